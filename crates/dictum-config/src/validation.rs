//! Validation functions used by the settings derive attributes.

use crate::schema::Settings;
use dictum_common::{DictumError, Result};
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;
use validator::{Validate, ValidationError};

/// Validate that a locale tag parses as a BCP 47 language identifier.
pub fn validate_locale_tag(tag: &str) -> std::result::Result<(), ValidationError> {
    if tag.is_empty() {
        return Err(ValidationError::new("empty_locale"));
    }

    tag.parse::<LanguageIdentifier>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_locale"))
}

/// Validate that a dictionary path was given.
#[allow(clippy::ptr_arg)]
pub fn validate_dictionary_path(path: &PathBuf) -> std::result::Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::new("empty_dictionary_path"));
    }
    Ok(())
}

/// Cross-field checks on the logging section.
pub fn validate_logging_section(settings: &Settings) -> std::result::Result<(), ValidationError> {
    let logging = &settings.logging;

    if logging.level.trim().is_empty() {
        return Err(ValidationError::new("empty_log_level"));
    }

    if logging.json_format && logging.pretty_format {
        return Err(ValidationError::new("conflicting_log_formats"));
    }

    Ok(())
}

/// Settings validator.
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validates settings, reporting failures as a workspace error.
    pub fn validate(settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| DictumError::validation(e.to_string(), None))
    }
}
