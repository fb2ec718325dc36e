//! Persisted data shapes and their conversions to domain models.

pub mod preset;

pub use preset::{HiddenPacketsV1, PresetCollectionV1, PresetV1, StoredCollection, StoredPreset};
