//! The working settings record and its storage keys

use serde::{Deserialize, Serialize};

use crate::store::StoredValues;

/// Model used when neither storage nor the build provides one
pub const FALLBACK_MODEL: &str = "gemini-3-flash";

/// UI language of the extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Zh];

    /// Stored code for this language
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// Human-readable name shown in the language selector
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "Chinese (Simplified)",
        }
    }

    /// Parse a stored language code. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "en" => Some(Language::En),
            "zh" => Some(Language::Zh),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One of the six persisted settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    ApiKey,
    SecondaryKey,
    BaseUrl,
    Model,
    Language,
    SelectedDeviceId,
}

impl SettingsField {
    pub const ALL: [SettingsField; 6] = [
        SettingsField::ApiKey,
        SettingsField::SecondaryKey,
        SettingsField::BaseUrl,
        SettingsField::Model,
        SettingsField::Language,
        SettingsField::SelectedDeviceId,
    ];

    /// Key under which the field lives in the key-value store
    pub fn storage_key(&self) -> &'static str {
        match self {
            SettingsField::ApiKey => "apiKey",
            SettingsField::SecondaryKey => "elevenLabsKey",
            SettingsField::BaseUrl => "baseUrl",
            SettingsField::Model => "model",
            SettingsField::Language => "language",
            SettingsField::SelectedDeviceId => "selectedDeviceId",
        }
    }

    /// All six storage keys, in record order
    pub fn storage_keys() -> [&'static str; 6] {
        Self::ALL.map(|field| field.storage_key())
    }

    /// Look a field up by storage key (`apiKey`) or by its snake_case name (`api_key`)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| {
            field.storage_key() == name || field.snake_case_name() == name
        })
    }

    fn snake_case_name(&self) -> &'static str {
        match self {
            SettingsField::ApiKey => "api_key",
            SettingsField::SecondaryKey => "secondary_key",
            SettingsField::BaseUrl => "base_url",
            SettingsField::Model => "model",
            SettingsField::Language => "language",
            SettingsField::SelectedDeviceId => "selected_device_id",
        }
    }

    /// Whether the field holds a secret that is masked by default
    pub fn is_secret(&self) -> bool {
        matches!(self, SettingsField::ApiKey | SettingsField::SecondaryKey)
    }
}

impl std::fmt::Display for SettingsField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.storage_key())
    }
}

/// Fully resolved panel configuration.
///
/// Every field always holds a value; there is no "unset" state. An empty
/// `selected_device_id` means the system default input device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRecord {
    pub api_key: String,
    pub secondary_key: String,
    pub base_url: String,
    pub model: String,
    pub language: Language,
    pub selected_device_id: String,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            secondary_key: String::new(),
            base_url: String::new(),
            model: FALLBACK_MODEL.to_string(),
            language: Language::default(),
            selected_device_id: String::new(),
        }
    }
}

impl SettingsRecord {
    pub fn set_api_key(&mut self, value: impl Into<String>) {
        self.api_key = value.into();
    }

    pub fn set_secondary_key(&mut self, value: impl Into<String>) {
        self.secondary_key = value.into();
    }

    pub fn set_base_url(&mut self, value: impl Into<String>) {
        self.base_url = value.into();
    }

    pub fn set_model(&mut self, value: impl Into<String>) {
        self.model = value.into();
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_selected_device_id(&mut self, value: impl Into<String>) {
        self.selected_device_id = value.into();
    }

    /// Current value of a field as its stored string form
    pub fn get(&self, field: SettingsField) -> &str {
        match field {
            SettingsField::ApiKey => &self.api_key,
            SettingsField::SecondaryKey => &self.secondary_key,
            SettingsField::BaseUrl => &self.base_url,
            SettingsField::Model => &self.model,
            SettingsField::Language => self.language.code(),
            SettingsField::SelectedDeviceId => &self.selected_device_id,
        }
    }

    /// Set a field from its string form.
    ///
    /// Returns `false` (and leaves the record untouched) when `value` is not a
    /// valid language code for [`SettingsField::Language`].
    pub fn set(&mut self, field: SettingsField, value: impl Into<String>) -> bool {
        let value = value.into();
        match field {
            SettingsField::ApiKey => self.set_api_key(value),
            SettingsField::SecondaryKey => self.set_secondary_key(value),
            SettingsField::BaseUrl => self.set_base_url(value),
            SettingsField::Model => self.set_model(value),
            SettingsField::Language => match Language::from_code(&value) {
                Some(language) => self.set_language(language),
                None => return false,
            },
            SettingsField::SelectedDeviceId => self.set_selected_device_id(value),
        }
        true
    }

    /// The batched write for this record: always all six keys
    pub fn to_stored(&self) -> StoredValues {
        SettingsField::ALL
            .into_iter()
            .map(|field| {
                (
                    field.storage_key().to_string(),
                    serde_json::Value::String(self.get(field).to_string()),
                )
            })
            .collect()
    }
}
