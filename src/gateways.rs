use anyhow::Result;
use otdb_gateways::{FsImageStorage, Notify};

use crate::config;

pub fn notification_gateway(cfg: &config::Notifications) -> Notify {
    if cfg.notify_on.is_empty() {
        log::warn!("All notifications are disabled");
    }
    Notify::new(cfg.notify_on.clone())
}

pub fn image_storage(cfg: &config::ImageStorage) -> Result<FsImageStorage> {
    let storage = FsImageStorage::try_new(cfg.dir.clone(), &cfg.public_base_url)?;
    log::info!("Storing uploaded images in {}", cfg.dir.display());
    Ok(storage)
}
