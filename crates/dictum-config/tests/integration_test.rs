//! Integration tests for dictum-config crate.

use dictum_common::test_utils::{config_fixtures, create_temp_dir};
use dictum_config::{
    ConfigError, Settings, SettingsCache, SettingsLoader, SettingsValidator, DEFAULT_LOCALE,
};
use proptest::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

#[test]
fn test_default_settings_validation() {
    let mut settings = Settings::default();
    assert!(SettingsValidator::validate(&settings).is_ok());

    settings.translator.default_locale = String::new();
    assert!(SettingsValidator::validate(&settings).is_err());
}

#[test]
fn test_load_full_toml_settings() {
    let dir = create_temp_dir();
    let path = dir.path().join("dictum.toml");
    std::fs::write(&path, config_fixtures::full_settings_toml("/srv/locales")).unwrap();

    let settings = SettingsLoader::load_settings(&path).unwrap();

    assert_eq!(settings.translator.dictionary_path, PathBuf::from("/srv/locales"));
    assert_eq!(settings.translator.locale, "fr");
    assert_eq!(settings.translator.default_locale, DEFAULT_LOCALE);
    assert_eq!(settings.logging.level, "debug");
    assert!(settings.logging.json_format);
}

#[test]
fn test_load_settings_async() {
    let dir = create_temp_dir();
    let path = dir.path().join("dictum.yaml");
    std::fs::write(&path, config_fixtures::minimal_settings_yaml("locales")).unwrap();

    let settings = tokio_test::block_on(SettingsLoader::load_settings_async(&path)).unwrap();
    assert_eq!(settings.translator.locale, "fr");
}

#[test]
fn test_load_with_explicit_path() {
    let dir = create_temp_dir();
    let path = dir.path().join("settings.yml");
    std::fs::write(&path, config_fixtures::minimal_settings_yaml("i18n")).unwrap();

    let settings = SettingsLoader::load(Some(&path)).unwrap();
    assert_eq!(settings.translator.dictionary_path, PathBuf::from("i18n"));
}

#[test]
fn test_unsupported_extension() {
    let dir = create_temp_dir();
    let path = dir.path().join("dictum.ini");
    std::fs::write(&path, "locale = fr").unwrap();

    assert!(matches!(
        SettingsLoader::load_settings(&path),
        Err(ConfigError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_settings_cache() {
    let settings = Settings::default();
    let cache = SettingsCache::new(settings.clone());

    // Should be able to get the settings
    let cached = cache.get();
    assert_eq!(cached.translator.locale, settings.translator.locale);

    // Should be able to update the settings
    let mut new_settings = settings;
    new_settings.translator.locale = "fr-FR".to_string();
    cache.update(new_settings);

    assert_eq!(cache.get().translator.locale, "fr-FR");
    // Readers holding the old snapshot keep it
    assert_eq!(cached.translator.locale, "en");
}

#[test]
fn test_cache_reload_from_disk() {
    let dir = create_temp_dir();
    let path = dir.path().join("dictum.yaml");
    std::fs::write(&path, config_fixtures::minimal_settings_yaml("locales")).unwrap();

    let cache = SettingsCache::default();
    let reloaded = cache.reload(&path).unwrap();

    assert_eq!(reloaded.translator.locale, "fr");
    assert_eq!(cache.get().translator.locale, "fr");
}

#[test]
fn test_cache_shared_between_threads() {
    let cache = Arc::new(SettingsCache::default());

    let writer = {
        let cache = Arc::clone(&cache);
        thread::spawn(move || cache.modify(|s| s.translator.locale = "de".to_string()))
    };
    writer.join().unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || cache.get().translator.locale.clone())
        })
        .collect();

    for reader in readers {
        assert_eq!(reader.join().unwrap(), "de");
    }
}

proptest! {
    #[test]
    fn prop_locale_override_is_taken_verbatim(locale in "[a-z]{2,3}(-[A-Z]{2})?") {
        let mut settings = Settings::default();
        let expected = locale.clone();
        SettingsLoader::apply_overrides_from(&mut settings, move |name| {
            (name == "DICTUM_LOCALE").then(|| locale.clone())
        })
        .unwrap();

        prop_assert_eq!(&settings.translator.locale, &expected);
        prop_assert!(SettingsValidator::validate(&settings).is_ok());
    }
}
