//! Persistent key-value storage for settings.
//!
//! The panel only needs two batched operations: read a set of keys and write
//! a set of keys. Absent keys are simply missing from a read result.
//!
//! - [`MemoryStore`] - in-process store, with failure injection for tests
//! - [`JsonFileStore`] - a JSON object on disk, written atomically under a lock file

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

/// Mapping of storage key to stored JSON value
pub type StoredValues = serde_json::Map<String, serde_json::Value>;

/// Error type for key-value store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Async batched key-value store
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the given keys; keys with no stored value are left out of the result
    async fn get(&self, keys: &[&str]) -> Result<StoredValues, StoreError>;

    /// Write all given keys. Returning `Ok` marks the write as durable.
    async fn set(&self, values: StoredValues) -> Result<(), StoreError>;
}
