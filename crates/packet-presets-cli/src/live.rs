//! The live hidden-packet configuration, owned by this host.
//!
//! Kept in the same version store as the presets, under its own key.

use packet_presets_core::{HiddenPackets, VersionedStore};
use serde_json::Value;
use tracing::warn;

pub const LIVE_CONFIG_KEY: &str = "hiddenPackets";

pub fn load(store: &impl VersionedStore) -> HiddenPackets {
    match store.get(LIVE_CONFIG_KEY, Value::Null) {
        Value::Null => HiddenPackets::default(),
        raw => serde_json::from_value(raw).unwrap_or_else(|e| {
            warn!("Ignoring unreadable live configuration: {}", e);
            HiddenPackets::default()
        }),
    }
}

pub fn save(store: &impl VersionedStore, live: &HiddenPackets) {
    match serde_json::to_value(live) {
        Ok(value) => store.set(LIVE_CONFIG_KEY, value),
        Err(e) => warn!("Failed to encode live configuration: {}", e),
    }
}
