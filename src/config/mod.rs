//! Host configuration loading and management

mod io;

pub use io::write_locked;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::settings::DefaultValues;

/// Configuration for hosting the settings panel outside the extension
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// JSON file backing the key-value store
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Optional JSON snapshot of media devices to offer for selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devices_path: Option<PathBuf>,

    /// Defaults layered over the compiled-in ones
    #[serde(default)]
    pub defaults: DefaultValues,
}

fn default_store_path() -> PathBuf {
    PanelConfig::global_config_dir().join("storage.json")
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            devices_path: None,
            defaults: DefaultValues::default(),
        }
    }
}

impl PanelConfig {
    /// Configured defaults, falling back to the compiled-in ones per field
    pub fn effective_defaults(&self) -> DefaultValues {
        self.defaults.clone().or(DefaultValues::compiled())
    }
}
