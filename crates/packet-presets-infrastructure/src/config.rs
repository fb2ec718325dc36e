//! Application configuration (`config.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use packet_presets_core::error::Result;
use serde::Deserialize;
use tracing::{debug, info};

use crate::paths::PresetPaths;

/// Contents of `config.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Which version-scoped store to use
    #[serde(default = "default_host_version")]
    pub host_version: String,
    /// Overrides the platform data directory
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host_version() -> String {
    "default".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host_version: default_host_version(),
            data_dir: None,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        info!("Loaded config from {:?} (host_version={})", path, config.host_version);
        Ok(config)
    }

    /// The data directory: the configured one, else the platform default.
    pub fn resolve_data_dir(&self, paths: &PresetPaths) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => paths.data_dir(),
        }
    }
}
