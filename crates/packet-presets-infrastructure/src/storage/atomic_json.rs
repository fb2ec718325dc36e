//! Atomic JSON file operations.
//!
//! Whole-file replacement through a temp file + rename, and an exclusive
//! lock around read-modify-write updates.

use packet_presets_core::error::{PresetError, Result};
use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// A handle to a JSON file that is only ever replaced wholesale.
///
/// Provides:
/// - **Atomicity**: writes go to a sibling temp file that is renamed over the target
/// - **Isolation**: `update` holds an exclusive lock for the read-modify-write
/// - **Durability**: the temp file is fsynced before the rename
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is blank
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = serde_json::from_str(&content)?;
        Ok(Some(data))
    }

    /// Serializes `data` and atomically replaces the file.
    pub fn save(&self, data: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Locked read-modify-write.
    ///
    /// `load_or_default` turns the current file contents (or a read error)
    /// into the starting value, so an unreadable file can be healed by the
    /// update rather than blocking it.
    pub fn update<D, F>(&self, load_or_default: D, f: F) -> Result<()>
    where
        D: FnOnce(Result<Option<T>>) -> T,
        F: FnOnce(&mut T),
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = load_or_default(self.load());
        f(&mut data);
        self.save(&data)
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| PresetError::storage("Path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| PresetError::storage("Path has no file name"))?;

        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Exclusive lock on `<path>.lock`, released on drop.
struct FileLock {
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        fs2::FileExt::lock_exclusive(&file)
            .map_err(|e| PresetError::storage(format!("Failed to acquire lock: {}", e)))?;

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Counter {
        name: String,
        count: u32,
    }

    fn counter(count: u32) -> Counter {
        Counter {
            name: "test".to_string(),
            count,
        }
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::<Counter>::new(temp_dir.path().join("nested/data.json"));

        file.save(&counter(42)).unwrap();

        assert_eq!(file.load().unwrap(), Some(counter(42)));
    }

    #[test]
    fn test_load_missing_or_blank_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        let file = AtomicJsonFile::<Counter>::new(path.clone());
        assert_eq!(file.load().unwrap(), None);

        fs::write(&path, "  \n").unwrap();
        assert_eq!(file.load().unwrap(), None);
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        fs::write(&path, "{not json").unwrap();

        let err = AtomicJsonFile::<Counter>::new(path).load().unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_update_applies_changes_and_cleans_up() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        let file = AtomicJsonFile::<Counter>::new(path.clone());

        for _ in 0..2 {
            file.update(
                |current| current.ok().flatten().unwrap_or_else(|| counter(0)),
                |c| c.count += 5,
            )
            .unwrap();
        }

        assert_eq!(file.load().unwrap(), Some(counter(10)));
        assert!(!temp_dir.path().join(".data.json.tmp").exists());
        assert!(!temp_dir.path().join("data.lock").exists());
    }

    #[test]
    fn test_update_can_heal_unreadable_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        fs::write(&path, "[[[").unwrap();
        let file = AtomicJsonFile::<Counter>::new(path);

        file.update(
            |current| current.ok().flatten().unwrap_or_else(|| counter(1)),
            |_| {},
        )
        .unwrap();

        assert_eq!(file.load().unwrap(), Some(counter(1)));
    }
}
