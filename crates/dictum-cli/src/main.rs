//! Main entry point for the `dictum` command.

use anyhow::{Context, Result};
use clap::Parser;
use dictum_cli::{execute, load_dictionary, resolve_settings, Cli};
use dictum_common::init_logging;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let settings = resolve_settings(&cli)
        .await
        .context("Failed to resolve settings")?;

    // Logs go to stderr or a file; stdout carries only command output
    init_logging(settings.logging.clone()).context("Failed to initialise logging")?;

    debug!(
        dictionary = %settings.translator.dictionary_path.display(),
        locale = %settings.translator.locale,
        default_locale = %settings.translator.default_locale,
        "Settings resolved"
    );

    let dictionary = load_dictionary(&settings).map_err(|e| {
        let locale = Some(settings.translator.locale.clone());
        let err = e.into_dictum_error(locale);
        error!("{}", err);
        err
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let status = execute(&cli.command, &settings, dictionary, &mut out)?;
    out.flush()?;

    Ok(status.into())
}
