//! In-process key-value store

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use super::{KeyValueStore, StoreError, StoredValues};

/// Key-value store held in memory.
///
/// Reads and writes can be switched to fail, and every accepted write batch
/// is recorded so callers can inspect exactly what was persisted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<StoredValues>,
    writes: Mutex<Vec<StoredValues>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `values`
    pub fn with_values(values: StoredValues) -> Self {
        Self {
            values: Mutex::new(values),
            ..Self::default()
        }
    }

    /// Make subsequent reads fail with [`StoreError::Unavailable`]
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent writes fail with [`StoreError::Unavailable`]
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Everything currently stored
    pub fn snapshot(&self) -> StoredValues {
        self.values.lock().expect("Memory store lock poisoned").clone()
    }

    /// Every write batch accepted so far, oldest first
    pub fn writes(&self) -> Vec<StoredValues> {
        self.writes.lock().expect("Memory store lock poisoned").clone()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, keys: &[&str]) -> Result<StoredValues, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("reads disabled".to_string()));
        }

        let values = self.values.lock().expect("Memory store lock poisoned");
        Ok(keys
            .iter()
            .filter_map(|key| values.get(*key).map(|v| (key.to_string(), v.clone())))
            .collect())
    }

    async fn set(&self, batch: StoredValues) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("writes disabled".to_string()));
        }

        let mut values = self.values.lock().expect("Memory store lock poisoned");
        for (key, value) in &batch {
            values.insert(key.clone(), value.clone());
        }
        self.writes
            .lock()
            .expect("Memory store lock poisoned")
            .push(batch);
        Ok(())
    }
}
