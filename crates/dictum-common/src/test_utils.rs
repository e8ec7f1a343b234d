//! Test utilities and shared fixtures for the Dictum workspace.
//!
//! Enabled with the `testing` feature so other crates can pull these into
//! their dev-dependencies.

use std::sync::Once;
use tokio::runtime::Runtime;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // another test harness may already have installed a subscriber
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a tokio runtime for testing async functions.
pub fn create_test_runtime() -> Runtime {
    Runtime::new().expect("Failed to create test runtime")
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Create a temporary file for tests that automatically cleans up.
pub fn create_temp_file() -> tempfile::NamedTempFile {
    tempfile::NamedTempFile::new().expect("Failed to create temporary file")
}

/// Dictionary sources shared by the i18n, config and CLI tests.
///
/// English is the reference locale. French translates everything except
/// the `missingKeys` group.
pub mod dictionary_fixtures {
    /// Reference locale as a JSON message tree.
    pub fn en_json() -> &'static str {
        r#"{
  "hello": "Hello",
  "helloName": "Hello, {{name}}",
  "goodbye": "Goodbye",
  "youHaveOneMessage": "You have 1 message",
  "youHaveManyMessages": "You have {{count}} messages",
  "nested": {
    "key": "Deep nested key",
    "keyWithName": "Deep nested key with name {{name}}"
  },
  "missingKeys": {
    "missingKey": "Missing key",
    "missingKeyVariable": "Missing key with variable {{name}}"
  }
}"#
    }

    /// Partial French translation as a YAML message tree.
    pub fn fr_yaml() -> &'static str {
        concat!(
            "hello: Bonjour\n",
            "helloName: \"Bonjour, {{name}}\"\n",
            "goodbye: Au revoir\n",
            "youHaveOneMessage: Vous avez 1 message\n",
            "youHaveManyMessages: \"Vous avez {{count}} messages\"\n",
            "nested:\n",
            "  key: Clé profonde\n",
            "  keyWithName: \"Clé profonde avec nom {{name}}\"\n",
        )
    }

    /// Both locales in one JSON document keyed by locale.
    pub fn en_fr_json() -> &'static str {
        r#"{
  "en": {
    "hello": "Hello",
    "helloName": "Hello, {{name}}",
    "goodbye": "Goodbye",
    "youHaveOneMessage": "You have 1 message",
    "youHaveManyMessages": "You have {{count}} messages",
    "nested": {
      "key": "Deep nested key",
      "keyWithName": "Deep nested key with name {{name}}"
    },
    "missingKeys": {
      "missingKey": "Missing key",
      "missingKeyVariable": "Missing key with variable {{name}}"
    }
  },
  "fr": {
    "hello": "Bonjour",
    "helloName": "Bonjour, {{name}}",
    "goodbye": "Au revoir",
    "youHaveOneMessage": "Vous avez 1 message",
    "youHaveManyMessages": "Vous avez {{count}} messages",
    "nested": {
      "key": "Clé profonde",
      "keyWithName": "Clé profonde avec nom {{name}}"
    }
  }
}"#
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// Minimal settings file pointing at `dictionary_path`.
    pub fn minimal_settings_yaml(dictionary_path: &str) -> String {
        format!(
            "translator:\n  dictionary_path: \"{dictionary_path}\"\n  locale: fr\n  default_locale: en\n"
        )
    }

    /// Full settings file including the logging section.
    pub fn full_settings_toml(dictionary_path: &str) -> String {
        format!(
            concat!(
                "[translator]\n",
                "dictionary_path = \"{}\"\n",
                "locale = \"fr\"\n",
                "default_locale = \"en\"\n",
                "validate_on_load = true\n",
                "\n",
                "[logging]\n",
                "level = \"debug\"\n",
                "json_format = true\n",
            ),
            dictionary_path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        // Should not panic when called multiple times
        init_test_logging();
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_create_test_runtime() {
        let runtime = create_test_runtime();
        let result = runtime.block_on(async { 42 });
        assert_eq!(result, 42);
    }

    #[test]
    fn test_temp_dir_is_writable() {
        let dir = create_temp_dir();
        let path = dir.path().join("en.json");
        let written = tokio_test::block_on(async {
            tokio::fs::write(&path, dictionary_fixtures::en_json()).await
        });
        assert!(written.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_dictionary_fixtures_parse() {
        let en: serde_json::Value = serde_json::from_str(dictionary_fixtures::en_json()).unwrap();
        let fr: serde_yaml::Value = serde_yaml::from_str(dictionary_fixtures::fr_yaml()).unwrap();
        let both: serde_json::Value =
            serde_json::from_str(dictionary_fixtures::en_fr_json()).unwrap();

        assert_eq!(both["en"], en);
        assert_eq!(fr["nested"]["key"].as_str(), Some("Clé profonde"));
        assert!(both["fr"].get("missingKeys").is_none());
    }

    #[test]
    fn test_config_fixtures_mention_path() {
        assert!(config_fixtures::minimal_settings_yaml("/tmp/x").contains("/tmp/x"));
        assert!(config_fixtures::full_settings_toml("/tmp/x").contains("dictionary_path = \"/tmp/x\""));
    }
}
