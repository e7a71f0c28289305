//! Devices command implementation

use anyhow::Result;

use panel_settings::config::PanelConfig;
use panel_settings::panel::PanelSession;

use super::resolver_from_config;

/// List the entries of the input device selector
pub async fn devices_command(config: &PanelConfig) -> Result<()> {
    let resolver = resolver_from_config(config);
    let session = PanelSession::open(resolver, || {}).await;
    let selected = &session.record().selected_device_id;

    println!("Input devices:\n");
    for option in session.device_options() {
        let marker = if &option.id == selected { "*" } else { " " };
        if option.id.is_empty() {
            println!("{} {}", marker, option.label);
        } else {
            println!("{} {}  [{}]", marker, option.label, option.id);
        }
    }

    Ok(())
}
