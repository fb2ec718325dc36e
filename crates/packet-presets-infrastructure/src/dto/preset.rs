//! Preset collection DTOs and read-side migration
//!
//! ## Version History
//! - **legacy**: bare JSON array of presets, no wrapping document
//! - **1**: `{"schemaVersion": 1, "presets": [...]}`

use packet_presets_core::preset::{
    CURRENT_SCHEMA_VERSION, HiddenPackets, Preset, PresetCollection,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

// ============================================================================
// Preset DTOs
// ============================================================================

/// Numbers and booleans are read as their text; other values are rejected.
fn scalar_to_string<E: serde::de::Error>(value: Value) -> Result<String, E> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(E::custom(format!("expected a string, found {other}"))),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    scalar_to_string(Value::deserialize(deserializer)?)
}

fn lenient_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.into_iter().map(scalar_to_string).collect(),
        other => Err(serde::de::Error::custom(format!("expected a list, found {other}"))),
    }
}

/// Hidden packet sets as stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HiddenPacketsV1 {
    #[serde(default, deserialize_with = "lenient_strings")]
    pub serverbound: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub clientbound: Vec<String>,
}

/// Preset DTO V1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetV1 {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Older writers called this field `hiddenPackets`
    #[serde(default, alias = "hiddenPackets")]
    pub hidden_config: HiddenPacketsV1,
}

impl From<PresetV1> for Preset {
    fn from(dto: PresetV1) -> Self {
        Preset {
            id: dto.id,
            name: dto.name,
            hidden_config: HiddenPackets::new(
                dto.hidden_config.serverbound,
                dto.hidden_config.clientbound,
            ),
        }
    }
}

impl From<&Preset> for PresetV1 {
    fn from(preset: &Preset) -> Self {
        PresetV1 {
            id: preset.id.clone(),
            name: preset.name.clone(),
            hidden_config: HiddenPacketsV1 {
                serverbound: preset.hidden_config.serverbound.clone(),
                clientbound: preset.hidden_config.clientbound.clone(),
            },
        }
    }
}

// ============================================================================
// Collection document
// ============================================================================

/// One entry of the stored `presets` array.
///
/// Entries that do not read as a preset are kept as they were found so a
/// later save writes them back instead of dropping them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredPreset {
    Preset(PresetV1),
    Retained(Value),
}

/// Collection document V1, the only shape ever written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetCollectionV1 {
    pub schema_version: u32,
    pub presets: Vec<StoredPreset>,
}

impl From<&PresetCollection> for PresetCollectionV1 {
    fn from(collection: &PresetCollection) -> Self {
        let presets = collection
            .presets
            .iter()
            .map(|preset| StoredPreset::Preset(PresetV1::from(preset)))
            .chain(collection.retained.iter().cloned().map(StoredPreset::Retained))
            .collect();

        PresetCollectionV1 {
            schema_version: CURRENT_SCHEMA_VERSION,
            presets,
        }
    }
}

impl PresetCollectionV1 {
    /// The value `get` is called with when nothing is stored yet.
    pub fn empty_document() -> Value {
        serde_json::json!({
            "schemaVersion": CURRENT_SCHEMA_VERSION,
            "presets": [],
        })
    }

    pub fn to_value(&self) -> Value {
        // Plain structs of strings and vectors always serialize.
        serde_json::to_value(self).unwrap_or_else(|_| Self::empty_document())
    }
}

// ============================================================================
// Read-side classification
// ============================================================================

/// The shapes a raw stored value can take.
#[derive(Debug, Clone)]
pub enum StoredCollection {
    /// Bare array of presets (pre-versioning).
    LegacyArray(Vec<Value>),
    /// Wrapping document exposing a `presets` array.
    CurrentDocument {
        schema_version: Option<u64>,
        presets: Vec<Value>,
    },
    /// Anything else.
    Corrupt,
}

impl StoredCollection {
    pub fn classify(raw: Value) -> Self {
        match raw {
            Value::Array(items) => StoredCollection::LegacyArray(items),
            Value::Object(mut map) => match map.remove("presets") {
                Some(Value::Array(items)) => StoredCollection::CurrentDocument {
                    schema_version: map.get("schemaVersion").and_then(Value::as_u64),
                    presets: items,
                },
                _ => StoredCollection::Corrupt,
            },
            _ => StoredCollection::Corrupt,
        }
    }

    /// Normalizes into the domain collection. Never fails: corrupt data
    /// yields an empty list and undecodable entries are retained verbatim.
    pub fn into_collection(self) -> PresetCollection {
        let items = match self {
            StoredCollection::LegacyArray(items) => {
                debug!("[Store] Reading legacy bare-array presets ({} entries)", items.len());
                items
            }
            StoredCollection::CurrentDocument {
                schema_version,
                presets,
            } => {
                if schema_version != Some(u64::from(CURRENT_SCHEMA_VERSION)) {
                    debug!(
                        "[Store] Reading presets document with schemaVersion {:?}",
                        schema_version
                    );
                }
                presets
            }
            StoredCollection::Corrupt => {
                warn!("[Store] Stored presets value is not recognized, treating as empty");
                Vec::new()
            }
        };

        let mut collection = PresetCollection::default();
        for (index, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<PresetV1>(item.clone()) {
                Ok(dto) => collection.presets.push(Preset::from(dto)),
                Err(e) => {
                    warn!("[Store] Keeping unreadable preset at index {} as-is: {}", index, e);
                    collection.retained.push(item);
                }
            }
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stored_preset() -> Value {
        json!({
            "id": "preset_1700000000000_k3x",
            "name": "Hide chat",
            "hiddenConfig": {"serverbound": ["chat"], "clientbound": ["system_chat"]}
        })
    }

    #[test]
    fn test_classify_shapes() {
        assert!(matches!(
            StoredCollection::classify(json!([stored_preset()])),
            StoredCollection::LegacyArray(items) if items.len() == 1
        ));
        assert!(matches!(
            StoredCollection::classify(json!({"schemaVersion": 1, "presets": []})),
            StoredCollection::CurrentDocument { schema_version: Some(1), .. }
        ));
        assert!(matches!(
            StoredCollection::classify(json!({"presets": "nope"})),
            StoredCollection::Corrupt
        ));
        assert!(matches!(StoredCollection::classify(json!(42)), StoredCollection::Corrupt));
        assert!(matches!(StoredCollection::classify(Value::Null), StoredCollection::Corrupt));
    }

    #[test]
    fn test_legacy_and_current_normalize_identically() {
        let legacy = StoredCollection::classify(json!([stored_preset()])).into_collection();
        let current = StoredCollection::classify(json!({
            "schemaVersion": 1,
            "presets": [stored_preset()]
        }))
        .into_collection();

        assert_eq!(legacy, current);
        assert_eq!(legacy.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(legacy.presets[0].hidden_config.serverbound, vec!["chat"]);
    }

    #[test]
    fn test_hidden_packets_alias_is_accepted() {
        let collection = StoredCollection::classify(json!([{
            "id": "preset_1_abc",
            "name": "Old",
            "hiddenPackets": {"serverbound": ["a"], "clientbound": []}
        }]))
        .into_collection();

        assert_eq!(collection.presets[0].hidden_config.serverbound, vec!["a"]);
    }

    #[test]
    fn test_unreadable_entries_are_retained() {
        let collection = StoredCollection::classify(json!([
            stored_preset(),
            {"name": "no id"},
            "garbage",
            {"id": "preset_2_abc", "name": "No config"}
        ]))
        .into_collection();

        let names: Vec<_> = collection.presets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Hide chat", "No config"]);
        assert!(collection.presets[1].hidden_config.is_empty());
        assert_eq!(collection.retained, vec![json!({"name": "no id"}), json!("garbage")]);
        assert!(collection.contains_name("no id"));
    }

    #[test]
    fn test_scalar_fields_are_read_as_text() {
        let collection = StoredCollection::classify(json!({
            "schemaVersion": 1,
            "presets": [{
                "id": 17,
                "name": "Numeric ids",
                "hiddenConfig": {"serverbound": [12, 13], "clientbound": null}
            }]
        }))
        .into_collection();

        assert!(collection.retained.is_empty());
        let preset = &collection.presets[0];
        assert_eq!(preset.id, "17");
        assert_eq!(preset.hidden_config.serverbound, vec!["12", "13"]);
        assert!(preset.hidden_config.clientbound.is_empty());
    }

    #[test]
    fn test_retained_entries_are_written_back() {
        let broken = json!({"id": "preset_3_ccc", "name": "Broken", "hiddenConfig": 7});
        let collection =
            StoredCollection::classify(json!([broken.clone(), stored_preset()])).into_collection();

        let value = PresetCollectionV1::from(&collection).to_value();

        assert_eq!(value["presets"], json!([stored_preset(), broken]));
    }

    #[test]
    fn test_document_is_written_with_current_field_names() {
        let collection = StoredCollection::classify(json!([stored_preset()])).into_collection();
        let value = PresetCollectionV1::from(&collection).to_value();

        assert_eq!(
            value,
            json!({"schemaVersion": 1, "presets": [stored_preset()]})
        );
    }
}
