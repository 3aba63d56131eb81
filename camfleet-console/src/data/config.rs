use std::{
    env::{self, VarError},
    fs::{self, File},
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use camfleet_core::inventory::{
    InventoryFeed, InventoryHandle, RemoteConfig, RemoteInventory, StaticInventory,
};
use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};

use super::nav::RouteTable;
use crate::error::Error;

const APP_NAME: &str = "Camfleet";
const CONFIG_FILENAME: &str = "config.json";
const PROXY_ENV_VAR: &str = "HTTPS_PROXY";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub inventory_source: InventorySource,
    pub inventory_url: String,
    pub inventory_feed: InventoryFeed,
    pub request_timeout_secs: u64,
    pub worker_threads: usize,
    pub route_table: RouteTable,
}

impl Default for Config {
    fn default() -> Self {
        let remote = RemoteConfig::default();
        Self {
            inventory_source: InventorySource::default(),
            inventory_url: remote.endpoint,
            inventory_feed: remote.feed,
            request_timeout_secs: remote.timeout.as_secs(),
            worker_threads: 2,
            route_table: RouteTable::default(),
        }
    }
}

impl Config {
    fn app_dirs() -> Option<AppDirs> {
        const USE_XDG_ON_MACOS: bool = false;

        AppDirs::new(Some(APP_NAME), USE_XDG_ON_MACOS)
    }

    pub fn config_dir() -> Option<PathBuf> {
        Self::app_dirs().map(|dirs| dirs.config_dir)
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILENAME))
    }

    pub fn load() -> Option<Config> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Option<Config> {
        let file = File::open(path).ok()?;
        log::info!("loading config: {:?}", path);
        match serde_json::from_reader(file) {
            Ok(config) => Some(config),
            Err(err) => {
                log::error!("failed to read config {:?}: {}", path, err);
                None
            }
        }
    }

    /// Write the config file for this platform and return where it went.
    pub fn init() -> Result<PathBuf, Error> {
        let path = Self::config_path().ok_or(Error::NoConfigDir)?;
        Self::init_at(&path)?;
        Ok(path)
    }

    /// Settings already on disk are kept.  A file that cannot be read is moved
    /// to `config.json.bak` before the defaults replace it.
    pub fn init_at(path: &Path) -> Result<Config, Error> {
        let config = if path.exists() {
            match Self::load_from(path) {
                Some(config) => {
                    log::warn!("rewriting existing config {:?}", path);
                    config
                }
                None => {
                    let backup = path.with_extension("json.bak");
                    log::warn!(
                        "config {:?} is unreadable, moving it to {:?} and writing defaults",
                        path,
                        backup
                    );
                    fs::rename(path, &backup)?;
                    Config::default()
                }
            }
        } else {
            Config::default()
        };
        config.save_to(path)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Error> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn proxy() -> Option<String> {
        env::var(PROXY_ENV_VAR).map_or_else(
            |err| match err {
                VarError::NotPresent => None,
                VarError::NotUnicode(_) => {
                    log::error!("proxy URL is not a valid unicode");
                    None
                }
            },
            Some,
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Assemble the device source this configuration asks for.
    pub fn inventory(&self) -> InventoryHandle {
        match self.inventory_source {
            InventorySource::Mock => Arc::new(StaticInventory::sample()),
            InventorySource::Remote => Arc::new(RemoteInventory::new(RemoteConfig {
                endpoint: self.inventory_url.clone(),
                feed: self.inventory_feed,
                proxy_url: Self::proxy(),
                timeout: self.request_timeout(),
            })),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum InventorySource {
    Mock,
    Remote,
}

impl Default for InventorySource {
    fn default() -> Self {
        Self::Mock
    }
}

#[cfg(test)]
mod tests {
    use camfleet_core::inventory::DeviceInventory;

    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = serde_json::from_str(r#"{"inventory_source": "Remote"}"#).unwrap();
        assert_eq!(config.inventory_source, InventorySource::Remote);
        assert_eq!(config.inventory_url, "http://localhost:8000/api/cameras");
        assert_eq!(config.inventory_feed, InventoryFeed::Cameras);
        assert_eq!(config.route_table, RouteTable::V3);
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILENAME);
        let config = Config {
            inventory_source: InventorySource::Remote,
            inventory_url: "http://fleet.local/api/devices/statuses/".into(),
            inventory_feed: InventoryFeed::DeviceStatuses,
            request_timeout_secs: 0,
            worker_threads: 4,
            route_table: RouteTable::V1,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.request_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn unreadable_config_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        assert_eq!(Config::load_from(&path), None);

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Config::load_from(&path), None);
    }

    #[test]
    fn init_keeps_readable_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        let custom = Config {
            route_table: RouteTable::V1,
            ..Config::default()
        };
        custom.save_to(&path).unwrap();

        assert_eq!(Config::init_at(&path).unwrap(), custom);
        assert_eq!(Config::load_from(&path), Some(custom));
        assert!(!path.with_extension("json.bak").exists());
    }

    #[test]
    fn init_moves_unreadable_file_aside() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, r#"{"route_table": "V9""#).unwrap();

        assert_eq!(Config::init_at(&path).unwrap(), Config::default());
        assert_eq!(Config::load_from(&path), Some(Config::default()));
        let backup = fs::read_to_string(path.with_extension("json.bak")).unwrap();
        assert_eq!(backup, r#"{"route_table": "V9""#);
    }

    #[test]
    fn init_writes_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("camfleet").join(CONFIG_FILENAME);
        assert_eq!(Config::init_at(&path).unwrap(), Config::default());
        assert!(path.exists());
    }

    #[test]
    fn save_failures_are_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let err = Config::default()
            .save_to(&blocker.join(CONFIG_FILENAME))
            .unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }

    #[test]
    fn mock_source_needs_no_network() {
        let devices = Config::default().inventory().fetch_devices();
        assert_eq!(devices.len(), 3);
    }
}
