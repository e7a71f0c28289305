//! The settings panel core: resolution, persistence and the editing session.
//!
//! - [`SettingsResolver`] - loads a fully resolved record and device list, saves records
//! - [`PanelSession`] - one open panel: working record, device snapshot, visibility, save status
//! - [`HostShell`] - the navigation shell that gets control back on close

mod host;
mod resolver;
mod session;

pub use host::HostShell;
pub use resolver::{LoadedSettings, SettingsResolver};
pub use session::{PanelError, PanelLoad, PanelSession, SaveStatus};
