//! JSON file backed key-value store

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{KeyValueStore, StoreError, StoredValues};
use crate::config::write_locked;

/// Key-value store persisted as a single JSON object.
///
/// Writes merge the batch into the existing object and replace the file
/// atomically (temp file + rename) while holding an exclusive lock on a
/// sibling `.lock` file, so a CLI and another process never interleave.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(path: &Path) -> Result<StoredValues, StoreError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(StoredValues::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(StoredValues::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_batch(path: &Path, batch: StoredValues) -> Result<(), StoreError> {
        write_locked(path, || {
            let mut values = match Self::read_all(path) {
                Ok(values) => values,
                Err(StoreError::Json(e)) => {
                    tracing::warn!("Replacing unreadable storage file {}: {}", path.display(), e);
                    StoredValues::new()
                }
                Err(e) => return Err(e),
            };
            values.extend(batch);
            Ok(serde_json::to_string_pretty(&values)?)
        })
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, keys: &[&str]) -> Result<StoredValues, StoreError> {
        let path = self.path.clone();
        let keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();

        tokio::task::spawn_blocking(move || -> Result<StoredValues, StoreError> {
            let mut values = Self::read_all(&path)?;
            Ok(keys
                .into_iter()
                .filter_map(|key| values.remove(&key).map(|v| (key, v)))
                .collect())
        })
        .await
        .map_err(|e| StoreError::Unavailable(format!("storage task failed: {}", e)))?
    }

    async fn set(&self, values: StoredValues) -> Result<(), StoreError> {
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || Self::write_batch(&path, values))
            .await
            .map_err(|e| StoreError::Unavailable(format!("storage task failed: {}", e)))?
    }
}
