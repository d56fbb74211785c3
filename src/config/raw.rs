use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("opentreedb.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub entries: Option<Entries>,
    pub region: Option<Region>,
    pub bootstrap: Option<Bootstrap>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub snapshot_file: PathBuf,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Entries {
    pub fetch_limit: u64,
}

impl Default for Entries {
    fn default() -> Self {
        Config::default().entries.expect("Entries configuration")
    }
}

#[derive(Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Region {
    pub sw_lat: f64,
    pub sw_lng: f64,
    pub ne_lat: f64,
    pub ne_lng: f64,
}

impl Default for Region {
    fn default() -> Self {
        Config::default().region.expect("Region configuration")
    }
}

#[derive(Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Bootstrap {
    #[serde(deserialize_with = "deserialize_duration")]
    pub fetch_deadline: Duration,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Config::default().bootstrap.expect("Bootstrap configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub image_storage: Option<ImageStorage>,
    pub notifications: Option<Notifications>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ImageStorage {
    pub dir: PathBuf,
    pub public_base_url: String,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Notifications {
    pub notify_on: Vec<NotificationKind>,
}

#[derive(Clone, Copy, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    EntryAdded,
    EntryReviewed,
    EntryDeleted,
    CommentAdded,
    CommentEdited,
    UserRoleChanged,
}
