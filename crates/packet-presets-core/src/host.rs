//! Host collaborators: prompts and change notifications.

use crate::preset::PresetSummary;

/// Something the host should react to after a preset operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetEvent {
    /// The live configuration was overwritten from preset `id`; dependent
    /// views must re-render.
    LiveConfigChanged { id: String },
    /// The stored list changed; the preset list should be re-rendered.
    PresetsChanged { presets: Vec<PresetSummary> },
}

/// Blocking prompts and notifications provided by the host application.
pub trait PresetHost {
    /// Yes/no confirmation. Only a `true` answer lets a delete proceed.
    fn confirm(&self, message: &str) -> bool;

    /// Informational alert.
    fn alert(&self, message: &str);

    /// Receives change notifications.
    fn notify(&self, event: PresetEvent);
}
