//! In-memory version-scoped store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use packet_presets_core::VersionedStore;
use serde_json::Value;

/// Keeps documents in a map for the lifetime of the process.
///
/// Useful for embedding hosts without persistence and for tests that need to
/// seed legacy or corrupt values directly.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` verbatim, bypassing any normalization.
    pub fn insert_raw(&self, key: impl Into<String>, value: Value) {
        self.values().insert(key.into(), value);
    }

    /// The stored document, if any.
    pub fn raw(&self, key: &str) -> Option<Value> {
        self.values().get(key).cloned()
    }

    fn values(&self) -> MutexGuard<'_, HashMap<String, Value>> {
        // Values are replaced whole, so a poisoned map is still consistent.
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl VersionedStore for MemoryStore {
    fn get(&self, key: &str, default: Value) -> Value {
        self.raw(key).unwrap_or(default)
    }

    fn set(&self, key: &str, value: Value) {
        self.insert_raw(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_returns_default_until_set() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k", json!({"d": true})), json!({"d": true}));

        store.set("k", json!([1, 2]));
        assert_eq!(store.get("k", json!(null)), json!([1, 2]));
        assert_eq!(store.raw("other"), None);
    }
}
