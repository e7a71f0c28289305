//! Input device enumeration
//!
//! Devices are fetched once per panel open and never persisted. Only
//! audio inputs are offered for selection; everything else a provider
//! reports is filtered out.

mod file;
mod selector;

pub use file::JsonDeviceProvider;
pub use selector::{
    DEFAULT_DEVICE_LABEL, DeviceOption, SelectedDevice, device_options, display_label,
    selected_device,
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Kind of media device reported by a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    AudioInput,
    AudioOutput,
    VideoInput,
}

/// A device as reported by the environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    /// Opaque handle, stable per physical device for the session
    pub id: String,

    /// Human-readable name; empty when device permission was not granted
    #[serde(default)]
    pub label: String,

    pub kind: DeviceKind,
}

impl DeviceDescriptor {
    pub fn audio_input(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: DeviceKind::AudioInput,
        }
    }
}

/// Error type for device enumeration
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("Device permission denied: {0}")]
    PermissionDenied(String),

    #[error("Device enumeration failed: {0}")]
    Enumeration(String),

    #[error("Invalid device list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Environment-supplied source of media devices
#[async_trait]
pub trait DeviceProvider: Send + Sync {
    /// Enumerate devices. May return an empty or label-less list.
    async fn enumerate(&self) -> Result<Vec<DeviceDescriptor>, DeviceError>;
}

/// Keep only audio inputs, preserving provider order
pub fn audio_inputs(devices: Vec<DeviceDescriptor>) -> Vec<DeviceDescriptor> {
    devices
        .into_iter()
        .filter(|d| d.kind == DeviceKind::AudioInput)
        .collect()
}
