//! Application-wide error types using thiserror.

use dictum_common::DictumError;
use dictum_i18n::I18nError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Settings could not be loaded or validated.
    #[error("Settings error: {0}")]
    Settings(#[from] DictumError),

    /// Dictionary loading or strict translation failed.
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] I18nError),

    /// Output could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failed.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Lift a dictionary error into the workspace error, keeping the locale.
    pub fn into_dictum_error(self, locale: Option<String>) -> DictumError {
        match self {
            Self::Settings(err) => err,
            Self::Dictionary(err) => {
                DictumError::localization_with_source("dictionary unavailable", locale, err)
            }
            Self::Io(err) => DictumError::Io(err),
            Self::Output(err) => DictumError::Serialization(err),
        }
    }
}

/// Result type for the command-line application.
pub type CliResult<T> = Result<T, CliError>;
