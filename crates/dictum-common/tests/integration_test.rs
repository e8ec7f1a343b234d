//! Integration tests for dictum-common crate.

use dictum_common::{init_logging, DictumError, LoggingConfig};
use std::error::Error as _;

#[test]
fn test_logging_to_file_installs_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig {
        level: "debug".to_string(),
        json_format: true,
        file_path: Some(dir.path().join("dictum.log")),
        ..LoggingConfig::default()
    };

    init_logging(config.clone()).unwrap();
    tracing::info!(locale = "fr", "logging initialised");

    // A global subscriber can only be set once per process
    let second = init_logging(config);
    assert!(matches!(second, Err(DictumError::Logging { .. })));
}

#[test]
fn test_logging_config_from_toml() {
    let config: LoggingConfig = toml::from_str("level = \"trace\"\npretty_format = true\n").unwrap();
    assert_eq!(config.level, "trace");
    assert!(config.pretty_format);
    assert!(!config.json_format);
}

#[test]
fn test_localization_error_chain() {
    let cause = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad tree");
    let err = DictumError::localization_with_source("cannot load dictionary", Some("fr".into()), cause);

    match &err {
        DictumError::Localization { locale, .. } => assert_eq!(locale.as_deref(), Some("fr")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.source().unwrap().to_string(), "bad tree");
    assert!(!err.is_user_error());
}
