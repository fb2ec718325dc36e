pub mod config;
pub mod dto;
pub mod key_value_preset_store;
pub mod paths;
pub mod storage;

pub use crate::config::AppConfig;
pub use crate::key_value_preset_store::KeyValuePresetStore;
pub use crate::paths::PresetPaths;
pub use crate::storage::{JsonFileStore, MemoryStore};
