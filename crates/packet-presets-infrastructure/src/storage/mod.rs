//! Version-scoped key/value stores.

pub mod atomic_json;
pub mod json_file_store;
pub mod memory_store;

pub use atomic_json::AtomicJsonFile;
pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;
