//! Set command implementation

use anyhow::{Result, bail};
use tracing::info;

use panel_settings::config::PanelConfig;
use panel_settings::panel::PanelSession;
use panel_settings::settings::SettingsField;

use super::resolver_from_config;

/// Apply `field=value` edits and save all settings
pub async fn set_command(config: &PanelConfig, assignments: &[String]) -> Result<()> {
    let mut edits = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        let Some((name, value)) = assignment.split_once('=') else {
            bail!("Expected field=value, got '{}'", assignment);
        };
        let Some(field) = SettingsField::from_name(name.trim()) else {
            bail!("Unknown setting: {}", name.trim());
        };
        edits.push((field, value.to_string()));
    }

    let resolver = resolver_from_config(config);
    let mut session = PanelSession::open(resolver, || info!("Settings panel closed")).await;

    for (field, value) in edits {
        if !session.set_field(field, value.as_str()) {
            bail!("Invalid value for {}: {}", field, value);
        }
    }

    session.save().await?;
    println!("Settings saved to {}", config.store_path.display());
    Ok(())
}
