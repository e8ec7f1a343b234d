//! Default values for every settings section.

use crate::schema::{Settings, TranslatorSettings};
use dictum_common::LoggingConfig;
use std::path::PathBuf;

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// Dictionary location relative to the working directory.
pub const DEFAULT_DICTIONARY_PATH: &str = "locales";

/// Settings file names looked up in the working directory, in order.
pub const DEFAULT_SETTINGS_FILES: [&str; 4] =
    ["dictum.yaml", "dictum.yml", "dictum.toml", "dictum.json"];

/// Whether loaded dictionaries are checked against the default locale.
pub const fn default_validate_on_load() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            translator: TranslatorSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            locale: DEFAULT_LOCALE.to_string(),
            default_locale: DEFAULT_LOCALE.to_string(),
            validate_on_load: default_validate_on_load(),
        }
    }
}
