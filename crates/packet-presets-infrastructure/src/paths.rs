//! Path resolution for configuration and data files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/packet-presets/        # Config directory
//! └── config.toml                  # Application configuration
//!
//! ~/.local/share/packet-presets/   # Data directory
//! └── versions/                    # One key/value file per host version
//!     └── <host_version>.json
//! ```

use std::path::{Path, PathBuf};

use packet_presets_core::PresetError;

const APP_DIR: &str = "packet-presets";
const CONFIG_FILENAME: &str = "config.toml";

/// Resolves directories, preferring explicit overrides over platform defaults.
#[derive(Debug, Clone, Default)]
pub struct PresetPaths {
    config_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
}

impl PresetPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// e.g. `~/.config/packet-presets/`
    pub fn config_dir(&self) -> Result<PathBuf, PresetError> {
        Self::resolve(self.config_dir.as_deref(), dirs::config_dir)
    }

    /// e.g. `~/.local/share/packet-presets/`
    pub fn data_dir(&self) -> Result<PathBuf, PresetError> {
        Self::resolve(self.data_dir.as_deref(), dirs::data_dir)
    }

    pub fn config_file(&self) -> Result<PathBuf, PresetError> {
        Ok(self.config_dir()?.join(CONFIG_FILENAME))
    }

    fn resolve(
        explicit: Option<&Path>,
        platform: fn() -> Option<PathBuf>,
    ) -> Result<PathBuf, PresetError> {
        if let Some(dir) = explicit {
            return Ok(dir.to_path_buf());
        }
        platform()
            .map(|base| base.join(APP_DIR))
            .ok_or_else(|| PresetError::config("Cannot determine platform directory"))
    }
}
