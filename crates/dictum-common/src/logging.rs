//! Structured logging infrastructure for Dictum
//!
//! Log output always goes to stderr or a file so that stdout stays free for
//! translated text.

use crate::error::{DictumError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Environment variable that overrides the configured filter
pub const LOG_ENV_VAR: &str = "DICTUM_LOG";

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "dictum_i18n=trace")
    pub level: String,
    /// Whether to emit one JSON object per event
    pub json_format: bool,
    /// Whether to enable pretty formatting with colors
    pub pretty_format: bool,
    /// Optional file path for log output
    pub file_path: Option<PathBuf>,
    /// Whether to include span open/close events in the output
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json_format: false,
            pretty_format: false,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

fn env_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(level))
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| DictumError::logging(e.to_string()))
}

fn file_writer(path: &Path) -> Result<BoxMakeWriter> {
    let file_name = path
        .file_name()
        .ok_or_else(|| DictumError::logging(format!("not a file path: {}", path.display())))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(directory)?;
    Ok(BoxMakeWriter::new(tracing_appender::rolling::never(
        directory, file_name,
    )))
}

/// Initialize the tracing subscriber with the given configuration
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = env_filter(&config.level)?;

    // Configure span events
    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let (writer, ansi) = match &config.file_path {
        Some(path) => (file_writer(path)?, false),
        None => (BoxMakeWriter::new(std::io::stderr), config.pretty_format),
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if config.json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init()
    } else if config.pretty_format {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_span_events(span_events)
                    .with_ansi(ansi)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_span_events(span_events)
                    .with_ansi(ansi)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init()
    };

    result.map_err(|e| DictumError::logging(e.to_string()))
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> Result<()> {
    init_logging(LoggingConfig::default())
}

/// Initialize logging for development (pretty, debug level)
pub fn init_dev_logging() -> Result<()> {
    init_logging(LoggingConfig {
        level: "debug".to_string(),
        pretty_format: true,
        include_spans: true,
        ..LoggingConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert!(!config.json_format);
        assert!(!config.pretty_format);
        assert!(config.file_path.is_none());
        assert!(!config.include_spans);
        assert!(config.include_targets);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: LoggingConfig = serde_yaml::from_str("level: debug\njson_format: true\n").unwrap();
        assert_eq!(config.level, "debug");
        assert!(config.json_format);
        assert!(config.include_targets);
    }

    #[test]
    fn test_invalid_level_falls_back() {
        assert!(env_filter("not a [valid filter").is_ok());
    }

    #[test]
    fn test_file_writer_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("dictum.log");
        assert!(file_writer(&path).is_ok());
        assert!(dir.path().join("logs").is_dir());
    }
}
