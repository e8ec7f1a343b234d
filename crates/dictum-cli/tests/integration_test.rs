//! Integration tests for dictum-cli crate.
//!
//! These run the library entry points and the built `dictum` binary against
//! dictionaries written to temporary directories.

use clap::Parser;
use dictum_cli::{execute, load_dictionary, resolve_settings, Cli, CliError, Status};
use dictum_common::test_utils::{create_temp_dir, dictionary_fixtures, init_test_logging};
use std::path::Path;
use std::process::Command as Process;
use tempfile::TempDir;

fn locales_dir() -> TempDir {
    let dir = create_temp_dir();
    std::fs::write(dir.path().join("en.json"), dictionary_fixtures::en_json()).unwrap();
    std::fs::write(dir.path().join("fr.yaml"), dictionary_fixtures::fr_yaml()).unwrap();
    dir
}

fn run_cli(args: &[&str]) -> (Status, String) {
    init_test_logging();
    let cli = Cli::try_parse_from(args).unwrap();
    let settings = tokio_test::block_on(resolve_settings(&cli)).unwrap();
    let dictionary = load_dictionary(&settings).unwrap();

    let mut out = Vec::new();
    let status = execute(&cli.command, &settings, dictionary, &mut out).unwrap();
    (status, String::from_utf8(out).unwrap())
}

fn dictum(dir: &Path, args: &[&str]) -> std::process::Output {
    Process::new(env!("CARGO_BIN_EXE_dictum"))
        .arg("--dictionary")
        .arg(dir)
        .args(args)
        .env_remove("DICTUM_CONFIG")
        .env_remove("DICTUM_LOG")
        .output()
        .expect("failed to run dictum")
}

#[test]
fn test_translate_through_library() {
    let dir = locales_dir();
    let path = dir.path().to_str().unwrap();

    let (status, out) = run_cli(&[
        "dictum", "-d", path, "-l", "fr", "translate", "nested.keyWithName", "--var", "name=Zoé",
    ]);
    assert_eq!(status, Status::Success);
    assert_eq!(out, "Clé profonde avec nom Zoé\n");

    let (_, out) = run_cli(&["dictum", "-d", path, "-l", "fr", "translate", "missingKeys.missingKey"]);
    assert_eq!(out, "Missing key\n");
}

#[test]
fn test_numeric_variable_renders_as_decimal() {
    let dir = locales_dir();
    let path = dir.path().to_str().unwrap();

    let (_, out) = run_cli(&[
        "dictum", "-d", path, "-l", "en", "translate", "youHaveManyMessages", "-v", "count=5",
    ]);
    assert_eq!(out, "You have 5 messages\n");
}

#[test]
fn test_check_reports_unknown_placeholder() {
    let dir = locales_dir();
    std::fs::write(
        dir.path().join("de.json"),
        r#"{"hello": "Hallo", "helloName": "Hallo, {{nom}}"}"#,
    )
    .unwrap();
    let path = dir.path().to_str().unwrap();

    let (status, out) = run_cli(&["dictum", "-d", path, "check"]);
    assert_eq!(status, Status::Failure);
    assert!(out.contains("{{nom}}"));
    assert!(out.ends_with("1 problem(s) found\n"));
}

#[test]
fn test_coverage_text() {
    let dir = locales_dir();
    let path = dir.path().to_str().unwrap();

    let (status, out) = run_cli(&["dictum", "-d", path, "coverage"]);
    assert_eq!(status, Status::Success);
    assert!(out.contains("fr: 7/9"));
    assert!(out.contains("  missing missingKeys.missingKey\n"));
}

#[test]
fn test_missing_dictionary_is_an_error() {
    let dir = create_temp_dir();
    let cli = Cli::try_parse_from([
        "dictum",
        "-d",
        dir.path().join("absent").to_str().unwrap(),
        "check",
    ])
    .unwrap();
    let settings = tokio_test::block_on(resolve_settings(&cli)).unwrap();

    assert!(matches!(load_dictionary(&settings), Err(CliError::Dictionary(_))));
}

#[test]
fn test_invalid_locale_flag_is_rejected() {
    let cli = Cli::try_parse_from(["dictum", "-l", "not a locale", "check"]).unwrap();
    let result = tokio_test::block_on(resolve_settings(&cli));
    assert!(matches!(result, Err(CliError::Settings(_))));
}

#[test]
fn test_settings_file_with_flag_override() {
    let locales = locales_dir();
    let dir = create_temp_dir();
    let settings_path = dir.path().join("dictum.yaml");
    std::fs::write(
        &settings_path,
        dictum_common::test_utils::config_fixtures::minimal_settings_yaml(
            locales.path().to_str().unwrap(),
        ),
    )
    .unwrap();

    // The settings file selects fr; the flag wins
    let (_, out) = run_cli(&[
        "dictum",
        "--config",
        settings_path.to_str().unwrap(),
        "--locale",
        "en",
        "translate",
        "hello",
    ]);
    assert_eq!(out, "Hello\n");
}

#[test]
fn test_flag_replaces_invalid_locale_from_settings_file() {
    let locales = locales_dir();
    let dir = create_temp_dir();
    let settings_path = dir.path().join("dictum.toml");
    std::fs::write(
        &settings_path,
        format!(
            "[translator]\ndictionary_path = {:?}\nlocale = \"not a locale\"\n",
            locales.path().to_str().unwrap()
        ),
    )
    .unwrap();
    let config = settings_path.to_str().unwrap();

    let cli = Cli::try_parse_from(["dictum", "--config", config, "check"]).unwrap();
    assert!(matches!(
        tokio_test::block_on(resolve_settings(&cli)),
        Err(CliError::Settings(_))
    ));

    let (_, out) = run_cli(&["dictum", "--config", config, "--locale", "fr", "translate", "goodbye"]);
    assert_eq!(out, "Au revoir\n");
}

#[test]
fn test_binary_translate_and_exit_codes() {
    let dir = locales_dir();

    let output = dictum(dir.path(), &["--locale", "fr", "translate", "goodbye"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Au revoir\n");

    let output = dictum(dir.path(), &["--locale", "fr", "translate", "nope", "--strict"]);
    assert_eq!(output.status.code(), Some(1));

    let output = dictum(dir.path(), &["coverage", "--json"]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_messages"], 9);
}
