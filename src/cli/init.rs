//! Init command implementation

use anyhow::{Context, Result, bail};
use std::path::PathBuf;

use panel_settings::config::{PanelConfig, write_locked};

/// Default configuration content for `panel-settings init`
pub const DEFAULT_CONFIG: &str = r#"# panel-settings configuration
# ===========================
#
# Hosts the extension's settings panel from the command line. Settings are
# kept in a JSON key-value file using the same keys as the extension:
# apiKey, elevenLabsKey, baseUrl, model, language, selectedDeviceId.

# Key-value store file (default: ~/.panel-settings/storage.json)
# store_path = "/home/me/.panel-settings/storage.json"

# Optional JSON array of devices to offer in the input device selector:
#   [{ "id": "abcdef1234567890", "label": "USB Microphone", "kind": "audioinput" }]
# devices_path = "/home/me/.panel-settings/devices.json"

# ============================================================================
# DEFAULTS - used only when the store has no value for a setting
# ============================================================================
#
# Anything left out here falls back to the values compiled in from
# DEFAULT_API_KEY, DEFAULT_ELEVENLABS_API_KEY, DEFAULT_BASE_URL,
# DEFAULT_MODEL and DEFAULT_LANGUAGE, then to "" / "gemini-3-flash" / "en".

[defaults]
# api_key = ""
# secondary_key = ""
# base_url = "https://api.openai.com/v1"
# model = "gemini-3-flash"
# language = "en"
"#;

/// Write the default config file
pub async fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(PanelConfig::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    write_locked(&config_path, || Ok::<_, anyhow::Error>(DEFAULT_CONFIG.to_string()))
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;
    println!("Created: {}", config_path.display());

    Ok(())
}
