//! Preset store backed by the host's version-scoped key/value storage.
//!
//! Reads accept the current document and the legacy bare array; anything
//! else reads as an empty list. Writes always emit the current document, so
//! legacy or corrupt values are replaced by the first save.

use packet_presets_core::PRESETS_STORAGE_KEY;
use packet_presets_core::preset::{PresetCollection, PresetStore};
use packet_presets_core::storage::VersionedStore;
use tracing::debug;

use crate::dto::{PresetCollectionV1, StoredCollection};

pub struct KeyValuePresetStore<K> {
    store: K,
    key: String,
}

impl<K: VersionedStore> KeyValuePresetStore<K> {
    /// Stores presets under the standard `customPresets` key.
    pub fn new(store: K) -> Self {
        Self::with_key(store, PRESETS_STORAGE_KEY)
    }

    pub fn with_key(store: K, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn inner(&self) -> &K {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<K: VersionedStore> PresetStore for KeyValuePresetStore<K> {
    fn load(&self) -> PresetCollection {
        let raw = self
            .store
            .get(&self.key, PresetCollectionV1::empty_document());
        let collection = StoredCollection::classify(raw).into_collection();
        debug!("[Store] Loaded {} preset(s) from '{}'", collection.len(), self.key);
        collection
    }

    fn save(&self, collection: &PresetCollection) {
        let document = PresetCollectionV1::from(collection).to_value();
        self.store.set(&self.key, document);
        debug!("[Store] Wrote {} preset(s) to '{}'", collection.len(), self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use packet_presets_core::preset::{HiddenPackets, Preset};
    use serde_json::json;

    fn entry(id: &str, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "hiddenConfig": {"serverbound": ["chat"], "clientbound": []}
        })
    }

    #[test]
    fn test_load_nothing_stored_is_empty() {
        let store = KeyValuePresetStore::new(MemoryStore::new());
        let collection = store.load();
        assert!(collection.is_empty());
        assert_eq!(collection.schema_version, 1);
        assert_eq!(store.inner().raw(PRESETS_STORAGE_KEY), None);
    }

    #[test]
    fn test_legacy_array_loads_like_document() {
        let legacy = MemoryStore::new();
        legacy.insert_raw(PRESETS_STORAGE_KEY, json!([entry("preset_1_a", "One")]));
        let current = MemoryStore::new();
        current.insert_raw(
            PRESETS_STORAGE_KEY,
            json!({"schemaVersion": 1, "presets": [entry("preset_1_a", "One")]}),
        );

        assert_eq!(
            KeyValuePresetStore::new(legacy).load(),
            KeyValuePresetStore::new(current).load()
        );
    }

    #[test]
    fn test_legacy_array_is_not_rewritten_on_read() {
        let store = KeyValuePresetStore::new(MemoryStore::new());
        let raw = json!([entry("preset_1_a", "One")]);
        store.inner().insert_raw(PRESETS_STORAGE_KEY, raw.clone());

        store.load();
        assert_eq!(store.inner().raw(PRESETS_STORAGE_KEY), Some(raw));
    }

    #[test]
    fn test_corrupt_values_load_empty() {
        let corrupt = [
            json!("text"),
            json!(7),
            json!({"presets": {}}),
            json!({"other": []}),
            json!(null),
        ];
        for raw in corrupt {
            let store = KeyValuePresetStore::new(MemoryStore::new());
            store.inner().insert_raw(PRESETS_STORAGE_KEY, raw);
            assert!(store.load().is_empty());
        }
    }

    #[test]
    fn test_save_writes_current_document() {
        let store = KeyValuePresetStore::new(MemoryStore::new());
        store
            .inner()
            .insert_raw(PRESETS_STORAGE_KEY, json!([entry("preset_1_a", "One")]));

        let mut collection = store.load();
        collection.presets.push(Preset {
            id: "preset_2_b".into(),
            name: "Two".into(),
            hidden_config: HiddenPackets::new(vec![], vec!["map_chunk".into()]),
        });
        store.save(&collection);

        assert_eq!(
            store.inner().raw(PRESETS_STORAGE_KEY),
            Some(json!({
                "schemaVersion": 1,
                "presets": [
                    entry("preset_1_a", "One"),
                    {
                        "id": "preset_2_b",
                        "name": "Two",
                        "hiddenConfig": {"serverbound": [], "clientbound": ["map_chunk"]}
                    }
                ]
            }))
        );
    }

    #[test]
    fn test_custom_key() {
        let store = KeyValuePresetStore::with_key(MemoryStore::new(), "otherPresets");
        store.save(&PresetCollection::default());
        assert_eq!(store.key(), "otherPresets");
        assert!(store.inner().raw("otherPresets").is_some());
        assert!(store.inner().raw(PRESETS_STORAGE_KEY).is_none());
    }
}
