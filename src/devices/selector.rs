//! Device selector options

use super::DeviceDescriptor;

/// Label of the "system default" entry
pub const DEFAULT_DEVICE_LABEL: &str = "Default";

/// Characters of the id shown when a device has no label
const UNLABELED_ID_CHARS: usize = 8;

/// One entry of the device selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceOption {
    /// Device id; empty for the system default
    pub id: String,
    pub label: String,
}

/// How the current selection relates to the enumerated devices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedDevice {
    /// Empty id: the system default input
    SystemDefault,
    /// Selected id is present in the device list
    Known(DeviceOption),
    /// Selected id is kept but has no matching device right now
    Unresolved(String),
}

/// Label for a device: its own label, or "Device " plus the first eight id characters
pub fn display_label(device: &DeviceDescriptor) -> String {
    if !device.label.is_empty() {
        return device.label.clone();
    }
    let short_id: String = device.id.chars().take(UNLABELED_ID_CHARS).collect();
    format!("Device {}", short_id)
}

/// Selector entries: the system default first, then every device in order
pub fn device_options(devices: &[DeviceDescriptor]) -> Vec<DeviceOption> {
    std::iter::once(DeviceOption {
        id: String::new(),
        label: DEFAULT_DEVICE_LABEL.to_string(),
    })
    .chain(devices.iter().map(|d| DeviceOption {
        id: d.id.clone(),
        label: display_label(d),
    }))
    .collect()
}

/// Match a selected id against the current device list. Never clears the id.
pub fn selected_device(selected_id: &str, devices: &[DeviceDescriptor]) -> SelectedDevice {
    if selected_id.is_empty() {
        return SelectedDevice::SystemDefault;
    }
    match devices.iter().find(|d| d.id == selected_id) {
        Some(device) => SelectedDevice::Known(DeviceOption {
            id: device.id.clone(),
            label: display_label(device),
        }),
        None => SelectedDevice::Unresolved(selected_id.to_string()),
    }
}
