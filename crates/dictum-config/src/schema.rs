//! Settings schema definitions using serde with validation attributes.

use dictum_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// Top-level settings for a Dictum process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "crate::validation::validate_logging_section"))]
pub struct Settings {
    /// Where the dictionary lives and which locales to translate between.
    #[validate]
    pub translator: TranslatorSettings,
    /// Logging output.
    pub logging: LoggingConfig,
}

/// Translator section of the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TranslatorSettings {
    /// Dictionary file or directory of per-locale files.
    #[validate(custom(
        function = "crate::validation::validate_dictionary_path",
        message = "Dictionary path cannot be empty"
    ))]
    pub dictionary_path: PathBuf,

    /// Active locale.
    #[validate(custom(
        function = "crate::validation::validate_locale_tag",
        message = "Locale must be a valid language identifier"
    ))]
    pub locale: String,

    /// Locale consulted when the active locale lacks a message.
    #[validate(custom(
        function = "crate::validation::validate_locale_tag",
        message = "Default locale must be a valid language identifier"
    ))]
    pub default_locale: String,

    /// Check every locale against the default locale's schema after loading.
    pub validate_on_load: bool,
}
