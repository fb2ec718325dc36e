//! Preset lifecycle: save, load, delete, list.

use tracing::{debug, info};

use super::model::{HiddenPackets, MAX_PRESETS, Preset, PresetSummary};
use super::naming::{display_name, generate_preset_id, normalize_name, resolve_unique_name};
use super::repository::PresetStore;
use crate::error::SaveError;
use crate::host::{PresetEvent, PresetHost};

/// The only component that mutates the stored preset collection.
///
/// Every operation reads the collection fresh from the store, and every
/// mutation writes the whole collection back. There is no cache, so changes
/// made by another process are picked up on the next call; concurrent writers
/// are not reconciled (the last full write wins).
pub struct PresetManager<S, H> {
    store: S,
    host: H,
}

impl<S: PresetStore, H: PresetHost> PresetManager<S, H> {
    pub fn new(store: S, host: H) -> Self {
        Self { store, host }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Captures `live` under `raw_name` (trimmed, made unique).
    ///
    /// # Returns
    ///
    /// - `Ok(Preset)`: stored; carries the resolved name and new id
    /// - `Err(SaveError::EmptyName)`: nothing to do, nothing shown to the user
    /// - `Err(SaveError::CapacityExceeded)`: the host was alerted, nothing written
    pub fn save_current_as_preset(
        &self,
        raw_name: &str,
        live: &HiddenPackets,
    ) -> Result<Preset, SaveError> {
        let Some(base_name) = normalize_name(raw_name) else {
            debug!("[Presets] Ignoring save with empty name");
            return Err(SaveError::EmptyName);
        };

        let mut collection = self.store.load();

        if collection.is_full() {
            info!(
                "[Presets] Refusing to save '{}': {} presets already stored",
                base_name,
                collection.len()
            );
            self.host.alert(&format!(
                "Maximum of {MAX_PRESETS} presets reached. Delete some to add more."
            ));
            return Err(SaveError::CapacityExceeded { limit: MAX_PRESETS });
        }

        let preset = Preset {
            id: generate_preset_id(),
            name: resolve_unique_name(base_name, &collection),
            hidden_config: live.clone(),
        };

        collection.presets.push(preset.clone());
        self.store.save(&collection);
        info!("[Presets] Saved preset '{}' ({})", preset.name, preset.id);

        self.notify_presets_changed();
        Ok(preset)
    }

    /// Overwrites `live` with the snapshot stored under `id`.
    ///
    /// Returns false, leaving `live` untouched, when no preset has that id.
    pub fn load_custom_preset(&self, id: &str, live: &mut HiddenPackets) -> bool {
        let collection = self.store.load();
        let Some(preset) = collection.find(id) else {
            debug!("[Presets] Load skipped, no preset with id {}", id);
            return false;
        };

        *live = preset.hidden_config.clone();
        info!("[Presets] Loaded preset '{}' ({})", preset.name, preset.id);

        self.host.notify(PresetEvent::LiveConfigChanged { id: id.to_string() });
        true
    }

    /// Deletes the preset with `id` after the host confirms.
    ///
    /// Returns false when the id is unknown or the user declines; in both
    /// cases nothing is written.
    pub fn delete_custom_preset(&self, id: &str) -> bool {
        let mut collection = self.store.load();
        let Some(preset) = collection.find(id) else {
            debug!("[Presets] Delete skipped, no preset with id {}", id);
            return false;
        };

        let prompt = format!("Delete preset \"{}\"?", display_name(&preset.name));
        if !self.host.confirm(&prompt) {
            debug!("[Presets] Delete of {} declined", id);
            return false;
        }

        let name = preset.name.clone();
        collection.remove(id);
        self.store.save(&collection);
        info!("[Presets] Deleted preset '{}' ({})", name, id);

        self.notify_presets_changed();
        true
    }

    /// Ids and display names, in display order.
    pub fn list_custom_presets(&self) -> Vec<PresetSummary> {
        self.store.load().summaries()
    }

    pub fn find_preset(&self, id: &str) -> Option<Preset> {
        self.store.load().find(id).cloned()
    }

    /// Full presets, in display order.
    pub fn presets(&self) -> Vec<Preset> {
        self.store.load().presets
    }

    fn notify_presets_changed(&self) {
        self.host.notify(PresetEvent::PresetsChanged {
            presets: self.list_custom_presets(),
        });
    }
}
