//! Per-field resolution: stored value, else default, else literal fallback.
//!
//! Every function here is total. A stored value or default only counts when it
//! is a non-empty string (and, for the language, a known code); anything else
//! falls through to the next source.

use serde_json::Value;
use tracing::debug;

use super::defaults::DefaultValues;
use super::record::{FALLBACK_MODEL, Language, SettingsField, SettingsRecord};
use crate::store::StoredValues;

/// Resolve a complete record from whatever subset of keys the store returned
pub fn resolve_record(stored: &StoredValues, defaults: &DefaultValues) -> SettingsRecord {
    SettingsRecord {
        api_key: resolve_text(stored, defaults, SettingsField::ApiKey, ""),
        secondary_key: resolve_text(stored, defaults, SettingsField::SecondaryKey, ""),
        base_url: resolve_text(stored, defaults, SettingsField::BaseUrl, ""),
        model: resolve_text(stored, defaults, SettingsField::Model, FALLBACK_MODEL),
        language: resolve_language(stored, defaults),
        selected_device_id: stored_text(stored, SettingsField::SelectedDeviceId)
            .unwrap_or_default()
            .to_string(),
    }
}

/// Resolve a free-text field
pub fn resolve_text(
    stored: &StoredValues,
    defaults: &DefaultValues,
    field: SettingsField,
    fallback: &str,
) -> String {
    if let Some(value) = stored_text(stored, field) {
        return value.to_string();
    }
    if let Some(value) = default_text(defaults, field) {
        debug!("{} not stored, using compiled default", field);
        return value.to_string();
    }
    fallback.to_string()
}

/// Resolve the UI language; unknown codes are skipped like missing ones
pub fn resolve_language(stored: &StoredValues, defaults: &DefaultValues) -> Language {
    let field = SettingsField::Language;

    if let Some(code) = stored_text(stored, field) {
        match Language::from_code(code) {
            Some(language) => return language,
            None => debug!("Ignoring unknown stored language '{}'", code),
        }
    }
    if let Some(code) = default_text(defaults, field) {
        match Language::from_code(code) {
            Some(language) => return language,
            None => debug!("Ignoring unknown default language '{}'", code),
        }
    }
    Language::default()
}

fn stored_text(stored: &StoredValues, field: SettingsField) -> Option<&str> {
    match stored.get(field.storage_key()) {
        Some(Value::String(value)) if !value.is_empty() => Some(value.as_str()),
        _ => None,
    }
}

fn default_text(defaults: &DefaultValues, field: SettingsField) -> Option<&str> {
    defaults.get(field).filter(|v| !v.is_empty())
}
