//! Load and save orchestration over the store and device provider

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::devices::{DeviceDescriptor, DeviceProvider, audio_inputs};
use crate::settings::{
    DefaultValues, DefaultsProvider, SettingsField, SettingsRecord, resolve_record,
};
use crate::store::{KeyValueStore, StoreError, StoredValues};

/// Result of a full [`SettingsResolver::load`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSettings {
    pub record: SettingsRecord,
    /// Audio inputs only; empty when enumeration failed
    pub devices: Vec<DeviceDescriptor>,
}

/// Resolves the panel's settings from storage and defaults, and persists them.
///
/// Defaults are snapshotted once at construction.
pub struct SettingsResolver {
    store: Arc<dyn KeyValueStore>,
    devices: Arc<dyn DeviceProvider>,
    defaults: DefaultValues,
}

impl SettingsResolver {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        devices: Arc<dyn DeviceProvider>,
        defaults: &dyn DefaultsProvider,
    ) -> Self {
        Self {
            store,
            devices,
            defaults: DefaultValues::snapshot(defaults),
        }
    }

    /// Read all six keys in one request and resolve each field.
    ///
    /// A failed read is logged and treated as an empty store, so this
    /// always produces a complete record.
    pub async fn load_settings(&self) -> SettingsRecord {
        let keys = SettingsField::storage_keys();
        let stored = match self.store.get(&keys).await {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Failed to read stored settings, using defaults: {}", e);
                StoredValues::new()
            }
        };
        debug!("Loaded {} stored settings", stored.len());
        resolve_record(&stored, &self.defaults)
    }

    /// Enumerate audio input devices. Failure is logged and yields an empty list.
    pub async fn load_devices(&self) -> Vec<DeviceDescriptor> {
        match self.devices.enumerate().await {
            Ok(devices) => {
                let inputs = audio_inputs(devices);
                debug!("Found {} audio input devices", inputs.len());
                inputs
            }
            Err(e) => {
                warn!("Failed to enumerate devices: {}", e);
                Vec::new()
            }
        }
    }

    /// Run the store read and device enumeration concurrently
    pub async fn load(&self) -> LoadedSettings {
        let (record, devices) = futures::join!(self.load_settings(), self.load_devices());
        LoadedSettings { record, devices }
    }

    /// Write all six fields as one batch. `Ok` means the store acknowledged it.
    pub async fn save(&self, record: &SettingsRecord) -> Result<(), StoreError> {
        self.store.set(record.to_stored()).await?;
        info!("Settings saved");
        Ok(())
    }
}
