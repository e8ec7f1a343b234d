//! Command-line arguments.

use clap::{Parser, Subcommand};
use dictum_i18n::VarValue;
use std::path::PathBuf;

/// Look up translations in a locale dictionary.
#[derive(Parser, Debug)]
#[command(name = "dictum", author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML, TOML or JSON)
    #[arg(short, long, global = true, env = "DICTUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Dictionary file or directory, overriding the settings file
    #[arg(short, long, global = true)]
    pub dictionary: Option<PathBuf>,

    /// Active locale
    #[arg(short, long, global = true)]
    pub locale: Option<String>,

    /// Locale used when the active one lacks a message
    #[arg(long, global = true)]
    pub default_locale: Option<String>,

    /// Log filter, e.g. `debug` or `dictum_i18n=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the translation of a dotted key path
    Translate {
        /// Key path such as `nested.keyWithName`
        key: String,

        /// Placeholder value as `name=value`; numbers are passed as numbers
        #[arg(short = 'v', long = "var", value_parser = parse_variable)]
        vars: Vec<(String, VarValue)>,

        /// Fail instead of printing an empty string or literal placeholders
        #[arg(long)]
        strict: bool,
    },

    /// Check every locale against the default locale's keys and placeholders
    Check,

    /// Show which default-locale messages each locale is missing
    Coverage {
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse a `name=value` pair.
pub fn parse_variable(raw: &str) -> Result<(String, VarValue), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;

    if name.is_empty() {
        return Err(format!("variable name is empty in '{raw}'"));
    }

    Ok((name.to_string(), VarValue::parse_lenient(value)))
}
