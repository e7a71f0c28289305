//! Settings record, default sources and the resolution rules between them

mod defaults;
mod record;
mod resolve;

pub use defaults::{DefaultValues, DefaultsProvider};
pub use record::{FALLBACK_MODEL, Language, SettingsField, SettingsRecord};
pub use resolve::{resolve_language, resolve_record, resolve_text};
