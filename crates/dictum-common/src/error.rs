//! Error types and utilities for Dictum

use thiserror::Error;

/// Result type alias for Dictum operations
pub type Result<T> = std::result::Result<T, DictumError>;

/// Main error type for Dictum operations
#[derive(Error, Debug)]
pub enum DictumError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Dictionary loading and translation errors
    #[error("Localization error: {message}")]
    Localization {
        /// What went wrong
        message: String,
        /// Locale involved, if known
        locale: Option<String>,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        /// What went wrong
        message: String,
        /// Offending field or variable, if known
        field: Option<String>,
    },

    /// Logging could not be initialised
    #[error("Logging error: {message}")]
    Logging {
        /// Subscriber setup failure
        message: String,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        /// What went wrong
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DictumError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error
    pub fn localization(msg: impl Into<String>, locale: Option<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale,
            source: None,
        }
    }

    /// Create a new localization error with source
    pub fn localization_with_source(
        msg: impl Into<String>,
        locale: Option<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Localization {
            message: msg.into(),
            locale,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>, field: Option<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field,
        }
    }

    /// Create a new logging error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging {
            message: msg.into(),
        }
    }

    /// Whether the error was caused by the user's input rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_messages() {
        assert_eq!(DictumError::new("boom").to_string(), "boom");
        assert_eq!(
            DictumError::config("missing default locale").to_string(),
            "Configuration error: missing default locale"
        );
        assert_eq!(
            DictumError::localization("unknown locale", Some("xx".into())).to_string(),
            "Localization error: unknown locale"
        );
    }

    #[test]
    fn test_source_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = DictumError::config_with_source("cannot read settings", io);
        assert_eq!(err.source().unwrap().to_string(), "gone");
    }

    #[test]
    fn test_user_error_classification() {
        assert!(DictumError::config("x").is_user_error());
        assert!(DictumError::validation("x", Some("locale".into())).is_user_error());
        assert!(!DictumError::new("x").is_user_error());
    }

    #[test]
    fn test_from_io_error() {
        let err: DictumError = std::io::Error::new(std::io::ErrorKind::Other, "disk").into();
        assert!(matches!(err, DictumError::Io(_)));
    }
}
