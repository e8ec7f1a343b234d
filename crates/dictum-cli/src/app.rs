//! Subcommand execution.
//!
//! Everything here writes to a caller-supplied sink so the binary can hand
//! it stdout while tests hand it a buffer.

use crate::cli::{Cli, Command};
use crate::error::{CliError, CliResult};
use dictum_config::{Settings, SettingsLoader, SettingsValidator};
use dictum_i18n::{
    CoverageReport, Dictionary, DictionaryLoader, I18nError, Translator, TranslatorConfig,
    VarValue, Variables,
};
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How a subcommand finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Exit code 0
    Success,
    /// Exit code 1
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => Self::SUCCESS,
            Status::Failure => Self::FAILURE,
        }
    }
}

/// Loads settings, then layers the command-line overrides on top.
///
/// Precedence is flags, then `DICTUM_*` variables, then the settings file,
/// then defaults. Validation runs once on the merged result.
pub async fn resolve_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = match SettingsLoader::discover(cli.config.as_deref()) {
        Some(path) => SettingsLoader::read_settings_async(&path).await,
        None => SettingsLoader::resolve(None),
    }
    .map_err(dictum_common::DictumError::from)?;

    apply_cli_overrides(cli, &mut settings);
    SettingsValidator::validate(&settings)?;
    Ok(settings)
}

fn apply_cli_overrides(cli: &Cli, settings: &mut Settings) {
    if let Some(path) = &cli.dictionary {
        settings.translator.dictionary_path.clone_from(path);
    }
    if let Some(locale) = &cli.locale {
        settings.translator.locale.clone_from(locale);
    }
    if let Some(locale) = &cli.default_locale {
        settings.translator.default_locale.clone_from(locale);
    }
    if let Some(level) = &cli.log_level {
        settings.logging.level.clone_from(level);
    }
}

/// Reads the dictionary named in the settings.
pub fn load_dictionary(settings: &Settings) -> CliResult<Arc<Dictionary>> {
    let dictionary = DictionaryLoader::new(&settings.translator.dictionary_path).load()?;
    Ok(Arc::new(dictionary))
}

/// Runs one subcommand against a loaded dictionary.
pub fn execute<W: Write>(
    command: &Command,
    settings: &Settings,
    dictionary: Arc<Dictionary>,
    out: &mut W,
) -> CliResult<Status> {
    let locale = settings.translator.locale.as_str();
    let default_locale = settings.translator.default_locale.as_str();

    match command {
        Command::Translate { key, vars, strict } => {
            if settings.translator.validate_on_load {
                // violations are logged by validate; lookups still proceed
                if let Err(err) = dictionary.validate(default_locale) {
                    debug!("Dictionary failed validation: {}", err);
                }
            }

            let translate = Translator::new(TranslatorConfig::new(dictionary, locale, default_locale));
            let variables: Variables = vars
                .iter()
                .map(|(name, value)| (name.as_str(), VarValue::clone(value)))
                .collect();

            translate_key(&translate, key, &variables, *strict, out)
        }
        Command::Check => check(&dictionary, default_locale, out),
        Command::Coverage { json } => coverage(&dictionary, default_locale, *json, out),
    }
}

fn translate_key<W: Write>(
    translate: &Translator,
    key: &str,
    variables: &Variables,
    strict: bool,
    out: &mut W,
) -> CliResult<Status> {
    let variables = (!variables.is_empty()).then_some(variables);

    if !strict {
        writeln!(out, "{}", translate.translate(key, variables))?;
        return Ok(Status::Success);
    }

    match translate.try_translate(key, variables) {
        Ok(text) => {
            writeln!(out, "{text}")?;
            Ok(Status::Success)
        }
        Err(err @ (I18nError::UnknownKey { .. } | I18nError::MissingVariables { .. })) => {
            warn!("Strict translation of '{}' failed: {}", key, err);
            writeln!(out, "error: {err}")?;
            Ok(Status::Failure)
        }
        Err(err) => Err(err.into()),
    }
}

fn check<W: Write>(dictionary: &Dictionary, default_locale: &str, out: &mut W) -> CliResult<Status> {
    match dictionary.validate(default_locale) {
        Ok(schema) => {
            info!("Dictionary check passed");
            writeln!(
                out,
                "ok: {} locales match {} ({} messages)",
                dictionary.len(),
                default_locale,
                schema.len()
            )?;
            Ok(Status::Success)
        }
        Err(I18nError::SchemaViolations { violations }) => {
            for violation in &violations {
                writeln!(out, "{violation}")?;
            }
            writeln!(out, "{} problem(s) found", violations.len())?;
            Ok(Status::Failure)
        }
        Err(err) => Err(CliError::Dictionary(err)),
    }
}

fn coverage<W: Write>(
    dictionary: &Dictionary,
    default_locale: &str,
    json: bool,
    out: &mut W,
) -> CliResult<Status> {
    let report = CoverageReport::build(dictionary, default_locale)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        write!(out, "{report}")?;
    }
    Ok(Status::Success)
}
