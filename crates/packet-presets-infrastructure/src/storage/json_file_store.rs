//! File-backed version-scoped store.
//!
//! One JSON object per host version, mapping storage keys to documents:
//!
//! ```text
//! data_dir/
//! └── versions/
//!     ├── 1.20.4.json
//!     └── default.json
//! ```

use std::path::{Path, PathBuf};

use packet_presets_core::VersionedStore;
use packet_presets_core::error::Result;
use serde_json::{Map, Value};
use tracing::{debug, error, warn};

use super::atomic_json::AtomicJsonFile;

/// Keys to documents, as stored in one version file.
type Documents = Map<String, Value>;

pub struct JsonFileStore {
    file: AtomicJsonFile<Documents>,
}

impl JsonFileStore {
    const VERSIONS_DIR: &'static str = "versions";

    /// Opens (lazily) the store for `host_version` under `data_dir`.
    pub fn new(data_dir: &Path, host_version: &str) -> Self {
        let path = Self::version_file(data_dir, host_version);
        debug!("[Store] Using version store {}", path.display());
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    /// `<data_dir>/versions/<sanitized version>.json`
    pub fn version_file(data_dir: &Path, host_version: &str) -> PathBuf {
        data_dir
            .join(Self::VERSIONS_DIR)
            .join(format!("{}.json", sanitize_version(host_version)))
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Reads the document under `key`. `Ok(None)` if the file or key is absent.
    pub fn try_get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self
            .file
            .load()?
            .and_then(|mut documents| documents.remove(key)))
    }

    /// Replaces the document under `key`, keeping every other key.
    pub fn try_set(&self, key: &str, value: Value) -> Result<()> {
        let path = self.path().to_path_buf();
        self.file.update(
            |current| match current {
                Ok(documents) => documents.unwrap_or_default(),
                Err(e) => {
                    warn!(
                        "[Store] Replacing unreadable version store {}: {}",
                        path.display(),
                        e
                    );
                    Documents::new()
                }
            },
            |documents| {
                documents.insert(key.to_string(), value);
            },
        )
    }
}

impl VersionedStore for JsonFileStore {
    fn get(&self, key: &str, default: Value) -> Value {
        match self.try_get(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                error!("[Store] Failed to read '{}' from {}: {}", key, self.path().display(), e);
                default
            }
        }
    }

    fn set(&self, key: &str, value: Value) {
        if let Err(e) = self.try_set(key, value) {
            error!("[Store] Failed to write '{}' to {}: {}", key, self.path().display(), e);
        }
    }
}

/// Keeps `[A-Za-z0-9._-]`, replaces everything else with `_`.
fn sanitize_version(version: &str) -> String {
    let sanitized: String = version
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.is_empty() || sanitized.chars().all(|c| c == '.') {
        "default".to_string()
    } else {
        sanitized
    }
}
