//! Preset domain models.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString};

/// Maximum number of presets a collection may hold.
pub const MAX_PRESETS: usize = 25;

/// Schema version written on every save.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Direction of traffic a packet identifier belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    Serverbound,
    Clientbound,
}

/// The two directional sets of hidden packet identifiers.
///
/// Used both for the host's live filter and for the snapshot stored in a
/// preset. `Clone` is a deep copy, so a snapshot never aliases the live state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenPackets {
    #[serde(default)]
    pub serverbound: Vec<String>,
    #[serde(default)]
    pub clientbound: Vec<String>,
}

impl HiddenPackets {
    pub fn new(serverbound: Vec<String>, clientbound: Vec<String>) -> Self {
        Self {
            serverbound,
            clientbound,
        }
    }

    pub fn direction(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::Serverbound => &self.serverbound,
            Direction::Clientbound => &self.clientbound,
        }
    }

    fn direction_mut(&mut self, direction: Direction) -> &mut Vec<String> {
        match direction {
            Direction::Serverbound => &mut self.serverbound,
            Direction::Clientbound => &mut self.clientbound,
        }
    }

    pub fn is_hidden(&self, direction: Direction, packet: &str) -> bool {
        self.direction(direction).iter().any(|p| p == packet)
    }

    /// Adds `packet` to the hidden set. Returns false if it was already hidden.
    pub fn hide(&mut self, direction: Direction, packet: impl Into<String>) -> bool {
        let packet = packet.into();
        if self.is_hidden(direction, &packet) {
            return false;
        }
        self.direction_mut(direction).push(packet);
        true
    }

    /// Removes `packet` from the hidden set. Returns false if it was not hidden.
    pub fn unhide(&mut self, direction: Direction, packet: &str) -> bool {
        let list = self.direction_mut(direction);
        let before = list.len();
        list.retain(|p| p != packet);
        list.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.serverbound.is_empty() && self.clientbound.is_empty()
    }
}

/// A named snapshot of [`HiddenPackets`]. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    /// Opaque id, `preset_<millis>_<token>`
    pub id: String,
    /// Display name, unique within its collection
    pub name: String,
    pub hidden_config: HiddenPackets,
}

impl Preset {
    pub fn summary(&self) -> PresetSummary {
        PresetSummary {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// What the rendering side is allowed to see of a preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetSummary {
    pub id: String,
    pub name: String,
}

/// The full persisted collection, normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetCollection {
    pub schema_version: u32,
    pub presets: Vec<Preset>,
    /// Stored entries that could not be read as presets. They are written
    /// back unchanged, after `presets`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub retained: Vec<Value>,
}

impl Default for PresetCollection {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PresetCollection {
    /// Wraps `presets` at the current schema version.
    pub fn new(presets: Vec<Preset>) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            presets,
            retained: Vec::new(),
        }
    }

    /// Stored entries, retained ones included.
    pub fn len(&self) -> usize {
        self.presets.len() + self.retained.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() >= MAX_PRESETS
    }

    pub fn find(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Also true when a retained entry carries `name`.
    pub fn contains_name(&self, name: &str) -> bool {
        self.presets.iter().any(|p| p.name == name)
            || self
                .retained
                .iter()
                .any(|raw| raw.get("name").and_then(Value::as_str) == Some(name))
    }

    pub fn summaries(&self) -> Vec<PresetSummary> {
        self.presets.iter().map(Preset::summary).collect()
    }

    /// Removes every preset with `id`, keeping the others in order.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.presets.len();
        self.presets.retain(|p| p.id != id);
        self.presets.len() != before
    }
}
