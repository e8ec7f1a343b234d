//! Settings loading from YAML, TOML or JSON files with environment overrides.

use crate::defaults::DEFAULT_SETTINGS_FILES;
use crate::schema::Settings;
use dictum_common::DictumError;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use validator::Validate;

/// Environment variable naming an explicit settings file.
pub const CONFIG_PATH_ENV: &str = "DICTUM_CONFIG";

/// Settings loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading the settings file
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML settings: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML settings: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON settings: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Settings validation error
    #[error("Settings validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name
        var: String,
        /// Parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// File extension is not one of yaml, yml, toml or json
    #[error("Unsupported settings format: {0}")]
    UnsupportedFormat(String),
}

impl From<ConfigError> for DictumError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ValidationError(_) => DictumError::validation(err.to_string(), None),
            ConfigError::EnvParseError { ref var, .. } => {
                DictumError::validation(err.to_string(), Some(var.clone()))
            }
            other => DictumError::config_with_source("cannot load settings", other),
        }
    }
}

/// Serialization formats accepted for settings files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    /// `.yaml` or `.yml`
    Yaml,
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl SettingsFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parses settings text in this format.
    pub fn parse(self, content: &str) -> Result<Settings, ConfigError> {
        Ok(match self {
            Self::Yaml => serde_yaml::from_str(content)?,
            Self::Toml => toml::from_str(content)?,
            Self::Json => serde_json::from_str(content)?,
        })
    }
}

/// Settings loader for the application
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from a file with environment variable overrides
    pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
        let path = path.as_ref();
        Self::finish(Self::read_settings(path)?, path)
    }

    /// Async variant of [`SettingsLoader::load_settings`].
    pub async fn load_settings_async<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
        let path = path.as_ref();
        Self::finish(Self::read_settings_async(path).await?, path)
    }

    /// Parse a settings file and apply environment overrides without
    /// validating, for callers that layer further overrides first.
    pub fn read_settings<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
        let path = path.as_ref();
        let format = SettingsFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        Self::with_env_overrides(format.parse(&content)?)
    }

    /// Async variant of [`SettingsLoader::read_settings`].
    pub async fn read_settings_async<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
        let path = path.as_ref();
        let format = SettingsFormat::from_path(path)?;
        let content = tokio::fs::read_to_string(path).await?;
        Self::with_env_overrides(format.parse(&content)?)
    }

    /// Load settings from an explicit path, `DICTUM_CONFIG`, a settings file
    /// in the working directory, or defaults, in that order.
    pub fn load(explicit: Option<&Path>) -> dictum_common::Result<Settings> {
        let settings = Self::resolve(explicit)?;
        settings.validate().map_err(ConfigError::ValidationError)?;
        Ok(settings)
    }

    /// Same lookup order as [`SettingsLoader::load`], without validation.
    pub fn resolve(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
        match Self::discover(explicit) {
            Some(path) => Self::read_settings(path),
            None => {
                debug!("No settings file found, using defaults");
                Self::with_env_overrides(Settings::default())
            }
        }
    }

    /// Resolves which settings file [`SettingsLoader::load`] would read.
    pub fn discover(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        DEFAULT_SETTINGS_FILES
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.exists())
    }

    /// Apply `DICTUM_*` environment variable overrides to settings
    pub fn apply_env_overrides(settings: &mut Settings) -> Result<(), ConfigError> {
        Self::apply_overrides_from(settings, |name| env::var(name).ok())
    }

    /// Apply overrides read through `lookup` instead of the process environment.
    pub fn apply_overrides_from<F>(settings: &mut Settings, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("DICTUM_DICTIONARY") {
            settings.translator.dictionary_path = PathBuf::from(path);
        }

        if let Some(locale) = lookup("DICTUM_LOCALE") {
            settings.translator.locale = locale;
        }

        if let Some(locale) = lookup("DICTUM_DEFAULT_LOCALE") {
            settings.translator.default_locale = locale;
        }

        if let Some(value) = lookup("DICTUM_VALIDATE_ON_LOAD") {
            settings.translator.validate_on_load = parse_bool("DICTUM_VALIDATE_ON_LOAD", &value)?;
        }

        if let Some(level) = lookup("DICTUM_LOG_LEVEL") {
            settings.logging.level = level;
        }

        if let Some(value) = lookup("DICTUM_LOG_JSON") {
            settings.logging.json_format = parse_bool("DICTUM_LOG_JSON", &value)?;
        }

        if let Some(file) = lookup("DICTUM_LOG_FILE") {
            settings.logging.file_path = Some(PathBuf::from(file));
        }

        Ok(())
    }

    fn with_env_overrides(mut settings: Settings) -> Result<Settings, ConfigError> {
        Self::apply_env_overrides(&mut settings)?;
        Ok(settings)
    }

    fn finish(settings: Settings, path: &Path) -> Result<Settings, ConfigError> {
        settings.validate()?;

        info!(
            path = %path.display(),
            locale = %settings.translator.locale,
            default_locale = %settings.translator.default_locale,
            "Loaded settings"
        );
        Ok(settings)
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    value
        .trim()
        .parse::<bool>()
        .map_err(|e| ConfigError::EnvParseError {
            var: var.to_string(),
            source: Box::new(e),
        })
}
