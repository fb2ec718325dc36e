//! Host key/value storage seam.

use serde_json::Value;

/// A host-provided store of JSON documents keyed by string, scoped to one
/// running version of the host.
///
/// Failures are the implementation's concern: `get` falls back to `default`
/// and `set` never reports an error to the caller.
pub trait VersionedStore: Send + Sync {
    /// Returns the stored document for `key`, or `default` when nothing is stored.
    fn get(&self, key: &str, default: Value) -> Value;

    /// Replaces the document stored under `key`.
    fn set(&self, key: &str, value: Value);
}

impl<T: VersionedStore + ?Sized> VersionedStore for std::sync::Arc<T> {
    fn get(&self, key: &str, default: Value) -> Value {
        (**self).get(key, default)
    }

    fn set(&self, key: &str, value: Value) {
        (**self).set(key, value)
    }
}
