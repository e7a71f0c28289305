//! Editing session for one opening of the settings panel

use std::sync::Arc;

use futures::{FutureExt, pin_mut, select};
use tracing::warn;

use super::host::HostShell;
use super::resolver::SettingsResolver;
use crate::devices::{
    DeviceDescriptor, DeviceOption, SelectedDevice, device_options, selected_device,
};
use crate::settings::{Language, SettingsField, SettingsRecord};
use crate::store::StoreError;

/// Character used to mask hidden secrets
const MASK_CHAR: char = '\u{2022}';

/// Error type for panel operations
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("Failed to save settings: {0}")]
    SaveFailed(#[from] StoreError),

    #[error("Settings panel is already closed")]
    Closed,
}

/// Save progress shown by the panel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    /// Write was not acknowledged; the user may retry
    Failed(String),
}

impl SaveStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, SaveStatus::Failed(_))
    }
}

/// Which load finished, reported to observers of [`PanelSession::open_observed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelLoad {
    Settings,
    Devices,
}

/// State of an open settings panel.
///
/// Owns the working [`SettingsRecord`] exclusively. The device list is a
/// snapshot taken when the panel opens. Visibility toggles only affect
/// [`PanelSession::display_value`].
pub struct PanelSession<H: HostShell> {
    resolver: Arc<SettingsResolver>,
    host: H,
    record: SettingsRecord,
    devices: Vec<DeviceDescriptor>,
    settings_loaded: bool,
    devices_loaded: bool,
    show_api_key: bool,
    show_secondary_key: bool,
    save_status: SaveStatus,
    closed: bool,
}

impl<H: HostShell> PanelSession<H> {
    /// Create a session without loading anything yet.
    ///
    /// Fields hold their literal fallbacks until [`apply_settings`](Self::apply_settings).
    pub fn new(resolver: Arc<SettingsResolver>, host: H) -> Self {
        Self {
            resolver,
            host,
            record: SettingsRecord::default(),
            devices: Vec::new(),
            settings_loaded: false,
            devices_loaded: false,
            show_api_key: false,
            show_secondary_key: false,
            save_status: SaveStatus::Idle,
            closed: false,
        }
    }

    /// Open the panel: issue the store read and device enumeration together
    /// and apply each as soon as it completes
    pub async fn open(resolver: Arc<SettingsResolver>, host: H) -> Self {
        Self::open_observed(resolver, host, |_, _| {}).await
    }

    /// Like [`open`](Self::open), calling `observer` after each result is applied
    pub async fn open_observed<F>(
        resolver: Arc<SettingsResolver>,
        host: H,
        mut observer: F,
    ) -> Self
    where
        F: FnMut(PanelLoad, &Self),
    {
        let mut session = Self::new(Arc::clone(&resolver), host);

        let settings = resolver.load_settings().fuse();
        let devices = resolver.load_devices().fuse();
        pin_mut!(settings, devices);

        loop {
            select! {
                record = settings => {
                    session.apply_settings(record);
                    observer(PanelLoad::Settings, &session);
                }
                list = devices => {
                    session.apply_devices(list);
                    observer(PanelLoad::Devices, &session);
                }
                complete => break,
            }
        }

        session
    }

    /// Replace the working record with a freshly resolved one
    pub fn apply_settings(&mut self, record: SettingsRecord) {
        self.record = record;
        self.settings_loaded = true;
    }

    /// Replace the device snapshot
    pub fn apply_devices(&mut self, devices: Vec<DeviceDescriptor>) {
        self.devices = devices;
        self.devices_loaded = true;
    }

    pub fn record(&self) -> &SettingsRecord {
        &self.record
    }

    pub fn devices(&self) -> &[DeviceDescriptor] {
        &self.devices
    }

    pub fn is_settings_loaded(&self) -> bool {
        self.settings_loaded
    }

    pub fn is_devices_loaded(&self) -> bool {
        self.devices_loaded
    }

    pub fn save_status(&self) -> &SaveStatus {
        &self.save_status
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    // Field edits. Each touches exactly one field of the working record.

    pub fn set_api_key(&mut self, value: impl Into<String>) {
        self.record.set_api_key(value);
    }

    pub fn set_secondary_key(&mut self, value: impl Into<String>) {
        self.record.set_secondary_key(value);
    }

    pub fn set_base_url(&mut self, value: impl Into<String>) {
        self.record.set_base_url(value);
    }

    pub fn set_model(&mut self, value: impl Into<String>) {
        self.record.set_model(value);
    }

    pub fn set_language(&mut self, language: Language) {
        self.record.set_language(language);
    }

    /// Select an input device by id; empty selects the system default.
    /// Takes effect only once saved.
    pub fn select_device(&mut self, id: impl Into<String>) {
        self.record.set_selected_device_id(id);
    }

    /// Set a field from its string form; `false` if the value is not accepted
    pub fn set_field(&mut self, field: SettingsField, value: impl Into<String>) -> bool {
        self.record.set(field, value)
    }

    pub fn toggle_api_key_visibility(&mut self) {
        self.show_api_key = !self.show_api_key;
    }

    pub fn toggle_secondary_key_visibility(&mut self) {
        self.show_secondary_key = !self.show_secondary_key;
    }

    /// Whether a field is shown in plain text. Only the two keys can be hidden.
    pub fn is_visible(&self, field: SettingsField) -> bool {
        match field {
            SettingsField::ApiKey => self.show_api_key,
            SettingsField::SecondaryKey => self.show_secondary_key,
            _ => true,
        }
    }

    /// Text to render for a field, masked when it is a hidden secret
    pub fn display_value(&self, field: SettingsField) -> String {
        let value = self.record.get(field);
        if self.is_visible(field) {
            value.to_string()
        } else {
            value.chars().map(|_| MASK_CHAR).collect()
        }
    }

    /// Device selector entries: "Default" followed by the enumerated inputs
    pub fn device_options(&self) -> Vec<DeviceOption> {
        device_options(&self.devices)
    }

    /// Current selection checked against the device snapshot
    pub fn selected_device(&self) -> SelectedDevice {
        selected_device(&self.record.selected_device_id, &self.devices)
    }

    /// Persist all six fields and hand control back to the host.
    ///
    /// The host is only notified after the store acknowledges the write. On
    /// failure the panel stays open with [`SaveStatus::Failed`] and the save
    /// can be retried.
    pub async fn save(&mut self) -> Result<(), PanelError> {
        if self.closed {
            return Err(PanelError::Closed);
        }

        self.save_status = SaveStatus::Saving;
        match self.resolver.save(&self.record).await {
            Ok(()) => {
                self.save_status = SaveStatus::Saved;
                self.close();
                Ok(())
            }
            Err(e) => {
                warn!("Settings save failed: {}", e);
                self.save_status = SaveStatus::Failed(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Leave without saving
    pub fn back(&mut self) -> Result<(), PanelError> {
        if self.closed {
            return Err(PanelError::Closed);
        }
        self.close();
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
        self.host.on_back();
    }
}
