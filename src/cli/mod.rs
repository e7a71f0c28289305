//! CLI command implementations

pub mod devices;
pub mod init;
pub mod set;
pub mod show;

use std::sync::Arc;

use panel_settings::config::PanelConfig;
use panel_settings::devices::JsonDeviceProvider;
use panel_settings::panel::SettingsResolver;
use panel_settings::store::JsonFileStore;

/// Build a resolver over the configured file store and device snapshot
pub fn resolver_from_config(config: &PanelConfig) -> Arc<SettingsResolver> {
    let store = Arc::new(JsonFileStore::new(&config.store_path));
    let devices = Arc::new(JsonDeviceProvider::new(config.devices_path.clone()));
    Arc::new(SettingsResolver::new(
        store,
        devices,
        &config.effective_defaults(),
    ))
}
