//! panel-settings - settings resolution and persistence for the assistant
//! extension's configuration panel.
//!
//! The panel edits six settings: the main API key, the speech service key,
//! the service base URL, the model, the UI language and the preferred audio
//! input device. Each one resolves independently:
//!
//! 1. **Stored value** from the [`store::KeyValueStore`], if a non-empty string
//! 2. **Compiled default** from a [`settings::DefaultsProvider`]
//! 3. **Literal fallback**: `""`, `"gemini-3-flash"` for the model, `en` for the language
//!
//! [`panel::PanelSession`] ties a store, a [`devices::DeviceProvider`] and a
//! [`panel::HostShell`] together into one load / edit / save lifecycle.

pub mod config;
pub mod devices;
pub mod panel;
pub mod settings;
pub mod store;
