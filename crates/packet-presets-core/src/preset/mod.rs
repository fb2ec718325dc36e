//! Custom filter presets.
//!
//! A preset is a named snapshot of the hidden-packet configuration. Users can
//! save the current configuration under a name, load a preset back into the
//! live configuration, and delete presets they no longer need.
//!
//! # Module Structure
//!
//! - `model`: Preset, collection and live-configuration models
//! - `naming`: Name normalization, collision resolution and id generation
//! - `repository`: Store trait for the persisted collection
//! - `manager`: The lifecycle operations

pub mod manager;
pub mod model;
pub mod naming;
pub mod repository;

pub use manager::PresetManager;
pub use model::{
    CURRENT_SCHEMA_VERSION, Direction, HiddenPackets, MAX_PRESETS, Preset, PresetCollection,
    PresetSummary,
};
pub use naming::{DISPLAY_NAME_LIMIT, display_name, generate_preset_id, resolve_unique_name};
pub use repository::PresetStore;
