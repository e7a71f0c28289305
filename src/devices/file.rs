//! Device list read from a JSON snapshot file

use std::path::PathBuf;

use async_trait::async_trait;

use super::{DeviceDescriptor, DeviceError, DeviceProvider};

/// Provider that reads a JSON array of [`DeviceDescriptor`] from disk.
///
/// Used by hosts that cannot query media devices themselves. A missing
/// path or file means no devices.
#[derive(Debug, Clone, Default)]
pub struct JsonDeviceProvider {
    path: Option<PathBuf>,
}

impl JsonDeviceProvider {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

#[async_trait]
impl DeviceProvider for JsonDeviceProvider {
    async fn enumerate(&self) -> Result<Vec<DeviceDescriptor>, DeviceError> {
        let Some(path) = &self.path else {
            return Ok(Vec::new());
        };

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                return Err(DeviceError::PermissionDenied(path.display().to_string()));
            }
            Err(e) => {
                return Err(DeviceError::Enumeration(format!("{}: {}", path.display(), e)));
            }
        };
        Ok(serde_json::from_str(&content)?)
    }
}
