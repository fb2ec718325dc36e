pub mod error;
pub mod host;
pub mod preset;
pub mod render;
pub mod storage;

pub use error::{PresetError, SaveError};
pub use host::{PresetEvent, PresetHost};
pub use preset::{Direction, HiddenPackets, Preset, PresetCollection, PresetManager, PresetSummary};
pub use storage::VersionedStore;

/// Key under which the preset collection lives in the host store.
pub const PRESETS_STORAGE_KEY: &str = "customPresets";
