//! Build-time and host-supplied default values

use serde::{Deserialize, Serialize};

use super::record::SettingsField;

/// Source of default values, consulted only when storage has nothing for a field.
///
/// Implementations return `None` when they have no default. The selected
/// device never has a default.
pub trait DefaultsProvider {
    fn default_for(&self, field: SettingsField) -> Option<String>;
}

/// Optional defaults for the five defaultable fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Speech service key
    #[serde(default, alias = "elevenlabs_key", skip_serializing_if = "Option::is_none")]
    pub secondary_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl DefaultValues {
    /// Defaults baked in from the build environment
    pub fn compiled() -> Self {
        Self {
            api_key: option_env!("DEFAULT_API_KEY").map(str::to_string),
            secondary_key: option_env!("DEFAULT_ELEVENLABS_API_KEY").map(str::to_string),
            base_url: option_env!("DEFAULT_BASE_URL").map(str::to_string),
            model: option_env!("DEFAULT_MODEL").map(str::to_string),
            language: option_env!("DEFAULT_LANGUAGE").map(str::to_string),
        }
    }

    /// Snapshot any provider into a plain value table
    pub fn snapshot(provider: &dyn DefaultsProvider) -> Self {
        Self {
            api_key: provider.default_for(SettingsField::ApiKey),
            secondary_key: provider.default_for(SettingsField::SecondaryKey),
            base_url: provider.default_for(SettingsField::BaseUrl),
            model: provider.default_for(SettingsField::Model),
            language: provider.default_for(SettingsField::Language),
        }
    }

    /// Take each field from `self`, falling back to `other` where `self` has
    /// no usable (non-empty) value
    pub fn or(self, other: DefaultValues) -> Self {
        fn pick(primary: Option<String>, secondary: Option<String>) -> Option<String> {
            match primary {
                Some(value) if !value.is_empty() => Some(value),
                _ => secondary,
            }
        }

        Self {
            api_key: pick(self.api_key, other.api_key),
            secondary_key: pick(self.secondary_key, other.secondary_key),
            base_url: pick(self.base_url, other.base_url),
            model: pick(self.model, other.model),
            language: pick(self.language, other.language),
        }
    }

    pub(crate) fn get(&self, field: SettingsField) -> Option<&str> {
        match field {
            SettingsField::ApiKey => self.api_key.as_deref(),
            SettingsField::SecondaryKey => self.secondary_key.as_deref(),
            SettingsField::BaseUrl => self.base_url.as_deref(),
            SettingsField::Model => self.model.as_deref(),
            SettingsField::Language => self.language.as_deref(),
            SettingsField::SelectedDeviceId => None,
        }
    }
}

impl DefaultsProvider for DefaultValues {
    fn default_for(&self, field: SettingsField) -> Option<String> {
        self.get(field).map(str::to_string)
    }
}
