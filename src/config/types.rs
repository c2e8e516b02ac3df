use std::collections::HashSet;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::Locale;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "locales[1].code")
    pub field_path: String,
    /// What is wrong and what to write instead.
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Settings could not be loaded or did not validate.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Every problem `Settings::validate` found.
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// The settings file could not be read.
    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// The settings file is not valid settings JSON.
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Numbered list of validation errors, one per line.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One entry of the locale switcher menu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleOption {
    pub code: Locale,
    /// Name shown in the menu, e.g. "Français".
    pub label: String,
    /// Emoji flag shown next to the label; may be empty.
    #[serde(default)]
    pub flag: String,
}

impl LocaleOption {
    #[must_use]
    pub fn new(code: &str, label: &str, flag: &str) -> Self {
        Self { code: Locale::from(code), label: label.to_string(), flag: flag.to_string() }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Storage key holding the raw active locale string.
    pub storage_key: String,

    /// Active locale when nothing valid is persisted.
    pub default_locale: Locale,

    /// Configured locale set, in switcher menu order.
    pub locales: Vec<LocaleOption>,

    /// Location of the dictionary resource (`Locale -> Translation Tree` JSON).
    pub dictionary_path: String,

    /// File backing the persisted locale when running outside a browser.
    pub storage_path: String,

    /// Separator between translation key segments.
    pub key_separator: String,

    /// Selector of the element the switcher is mounted into.
    pub mount_point: String,
}

impl Settings {
    /// Codes of the configured locale set, in menu order.
    pub fn locale_codes(&self) -> impl Iterator<Item = &Locale> {
        self.locales.iter().map(|option| &option.code)
    }

    #[must_use]
    pub fn is_supported(&self, locale: &str) -> bool {
        self.locales.iter().any(|option| option.code == locale)
    }

    /// # Errors
    /// - Required field is empty
    /// - Duplicate locale code
    /// - Default locale outside the configured set
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.storage_key.is_empty() {
            errors.push(ValidationError::new(
                "storageKey",
                "The storage key cannot be empty. Example: \"raghim-language\"",
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.dictionary_path.is_empty() {
            errors.push(ValidationError::new(
                "dictionaryPath",
                "The path cannot be empty. Example: \"assets/js/translations.json\"",
            ));
        }

        if self.locales.is_empty() {
            errors.push(ValidationError::new(
                "locales",
                "At least one locale is required. Example: [{\"code\": \"en\", \"label\": \"English\"}]",
            ));
        }

        let mut seen = HashSet::new();
        for (index, option) in self.locales.iter().enumerate() {
            if option.code.as_str().is_empty() {
                errors.push(ValidationError::new(
                    format!("locales[{index}].code"),
                    "The locale code cannot be empty",
                ));
            } else if !seen.insert(option.code.as_str()) {
                errors.push(ValidationError::new(
                    format!("locales[{index}].code"),
                    format!("Duplicate locale code '{}'", option.code),
                ));
            }
        }

        if !self.locales.is_empty() && !self.is_supported(self.default_locale.as_str()) {
            errors.push(ValidationError::new(
                "defaultLocale",
                format!("'{}' is not one of the configured locales", self.default_locale),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: "raghim-language".to_string(),
            default_locale: Locale::from("en"),
            locales: vec![
                LocaleOption::new("en", "English", "🇺🇸"),
                LocaleOption::new("fr", "Français", "🇫🇷"),
            ],
            dictionary_path: "assets/js/translations.json".to_string(),
            storage_path: ".site-i18n-storage.json".to_string(),
            key_separator: ".".to_string(),
            mount_point: ".nav-menu".to_string(),
        }
    }
}
