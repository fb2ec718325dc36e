//! Preset store trait.
//!
//! Defines the interface the manager uses to read and replace the persisted
//! collection.

use super::model::PresetCollection;

/// Reads and writes the whole preset collection.
///
/// Implementations translate between whatever is persisted and the normalized
/// [`PresetCollection`]. Both operations are infallible from the caller's
/// point of view:
///
/// - `load` returns an empty collection for missing or unreadable data
/// - `save` always writes the current schema and replaces the stored value
///   wholesale
pub trait PresetStore: Send + Sync {
    /// Returns the current collection, freshly read.
    fn load(&self) -> PresetCollection;

    /// Replaces the stored collection.
    fn save(&self, collection: &PresetCollection);
}
