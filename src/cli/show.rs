//! Show command implementation

use anyhow::Result;

use panel_settings::config::PanelConfig;
use panel_settings::devices::SelectedDevice;
use panel_settings::panel::PanelSession;
use panel_settings::settings::SettingsField;

use super::resolver_from_config;

/// Print the resolved settings as the panel would display them
pub async fn show_command(config: &PanelConfig, reveal: bool) -> Result<()> {
    let resolver = resolver_from_config(config);
    let mut session = PanelSession::open(resolver, || {}).await;

    if reveal {
        session.toggle_api_key_visibility();
        session.toggle_secondary_key_visibility();
    }

    println!("Settings ({}):\n", config.store_path.display());

    for field in SettingsField::ALL {
        if field == SettingsField::SelectedDeviceId {
            continue;
        }
        let value = session.display_value(field);
        let value = if value.is_empty() { "(empty)".to_string() } else { value };
        println!("  {:<16} {}", field.storage_key(), value);
    }

    let device = match session.selected_device() {
        SelectedDevice::SystemDefault => "Default".to_string(),
        SelectedDevice::Known(option) => format!("{} ({})", option.label, option.id),
        SelectedDevice::Unresolved(id) => format!("{} (not connected)", id),
    };
    println!("  {:<16} {}", SettingsField::SelectedDeviceId.storage_key(), device);

    Ok(())
}
