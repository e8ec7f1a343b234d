//! Error types for dictionary loading and strict translation

use crate::schema::SchemaViolation;
use thiserror::Error;

/// Errors that can occur while loading or checking dictionaries
///
/// Plain translation never produces these: [`crate::Translator::translate`]
/// degrades to fallback or pass-through instead.
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// Failed to load a resource file
    #[error("Failed to load resource file: {path}")]
    ResourceLoadError {
        /// File or directory that could not be read
        path: String,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// A dictionary source could not be deserialized
    #[error("Failed to parse dictionary {path}: {message}")]
    ParseError {
        /// Source file, or `<json>`-style label for in-memory input
        path: String,
        /// Deserializer message
        message: String,
    },

    /// The file extension does not map to a known format
    #[error("Unsupported dictionary format: {0}")]
    UnsupportedFormat(String),

    /// A dictionary source contained no locale at all
    #[error("No locales found in {path}")]
    NoLocales {
        /// File or directory that was loaded
        path: String,
    },

    /// The requested locale is not part of the dictionary
    #[error("Locale not found in dictionary: {locale}")]
    UnknownLocale {
        /// Requested locale identifier
        locale: String,
    },

    /// The key path does not exist in the reference locale
    #[error("Message not found: {key}")]
    UnknownKey {
        /// Dotted key path
        key: String,
    },

    /// Placeholders of the resolved template have no value
    #[error("Missing variables for '{key}': {missing:?}")]
    MissingVariables {
        /// Dotted key path
        key: String,
        /// Placeholder names without a value, sorted
        missing: Vec<String>,
    },

    /// One or more locales break the reference shape
    #[error("Dictionary does not match the reference shape ({} violations)", violations.len())]
    SchemaViolations {
        /// Every violation across all locales
        violations: Vec<SchemaViolation>,
    },

    /// A dotted key path could not be parsed
    #[error("Invalid key path: '{0}'")]
    InvalidKeyPath(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
