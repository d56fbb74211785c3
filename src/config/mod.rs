use anyhow::{anyhow, Result};
use otdb_core::gateways::notify::NotificationType;
use otdb_entities::geo::{MapBbox, MapPoint};
use std::{
    collections::HashSet,
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "opentreedb.toml";

const ENV_NAME_SNAPSHOT_FILE: &str = "OPENTREEDB_SNAPSHOT";

pub struct Config {
    pub db: Db,
    pub entries: Entries,
    pub region: Region,
    pub bootstrap: Bootstrap,
    pub image_storage: ImageStorage,
    pub notifications: Notifications,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(snapshot_file) = env::var(ENV_NAME_SNAPSHOT_FILE) {
            cfg.db.snapshot_file = snapshot_file.into();
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// JSON file the entry store is loaded from and written back to.
    pub snapshot_file: PathBuf,
}

pub struct Entries {
    /// Upper bound on the rows fetched per entry kind.
    pub fetch_limit: u64,
}

pub struct Region {
    pub bbox: MapBbox,
}

impl Region {
    pub fn center(&self) -> MapPoint {
        self.bbox.center()
    }
}

pub struct Bootstrap {
    pub fetch_deadline: Duration,
}

pub struct ImageStorage {
    /// File system directory for uploaded images.
    pub dir: PathBuf,
    pub public_base_url: String,
}

pub struct Notifications {
    pub notify_on: HashSet<NotificationType>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            entries,
            region,
            bootstrap,
            gateway,
        } = from;

        let raw::Db { snapshot_file } = db.unwrap_or_default();
        let db = Db { snapshot_file };

        let raw::Entries { fetch_limit } = entries.unwrap_or_default();
        if fetch_limit == 0 {
            return Err(anyhow!("The fetch limit must not be zero"));
        }
        let entries = Entries { fetch_limit };

        let raw::Region {
            sw_lat,
            sw_lng,
            ne_lat,
            ne_lng,
        } = region.unwrap_or_default();
        let sw = MapPoint::try_from_lat_lng_deg(sw_lat, sw_lng)
            .ok_or_else(|| anyhow!("Invalid south-west corner of the region"))?;
        let ne = MapPoint::try_from_lat_lng_deg(ne_lat, ne_lng)
            .ok_or_else(|| anyhow!("Invalid north-east corner of the region"))?;
        let bbox = MapBbox::new(sw, ne);
        if !bbox.is_valid() {
            return Err(anyhow!("Invalid region"));
        }
        let region = Region { bbox };

        let raw::Bootstrap { fetch_deadline } = bootstrap.unwrap_or_default();
        if fetch_deadline.is_zero() {
            return Err(anyhow!("The fetch deadline must not be zero"));
        }
        let bootstrap = Bootstrap { fetch_deadline };

        let gateway = gateway.unwrap_or_default();

        let raw::ImageStorage {
            dir,
            public_base_url,
        } = gateway
            .image_storage
            .ok_or_else(|| anyhow!("Missing image storage configuration"))?;
        let image_storage = ImageStorage {
            dir,
            public_base_url,
        };

        let raw::Notifications { notify_on } = gateway
            .notifications
            .ok_or_else(|| anyhow!("Missing notification configuration"))?;
        let notify_on = notify_on.into_iter().map(Into::into).collect();
        let notifications = Notifications { notify_on };

        Ok(Self {
            db,
            entries,
            region,
            bootstrap,
            image_storage,
            notifications,
        })
    }
}

impl From<raw::NotificationKind> for NotificationType {
    fn from(from: raw::NotificationKind) -> Self {
        use raw::NotificationKind as K;
        match from {
            K::EntryAdded => Self::EntryAdded,
            K::EntryReviewed => Self::EntryReviewed,
            K::EntryDeleted => Self::EntryDeleted,
            K::CommentAdded => Self::CommentAdded,
            K::CommentEdited => Self::CommentEdited,
            K::UserRoleChanged => Self::UserRoleChanged,
        }
    }
}
