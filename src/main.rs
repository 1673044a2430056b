//! notify-webhook: HTTPS webhook validator and codec
//!
//! Entry point for the notify-webhook application.

use std::io;
use std::process::ExitCode;

use notify_webhook::config::{Cli, Command, ValidatedConfig, write_default_config};

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};
use run::RunError;

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    if cli.url.is_some() && !cli.needs_webhook() {
        tracing::warn!("--url is ignored by this subcommand");
    }

    match cli.command() {
        Command::Init { output } => handle_init(&output),
        Command::Parse { input } => finish(run::parse(&input, &mut io::stdout().lock())),
        Command::Decode { input } => finish(run::decode(&input, &mut io::stdout().lock())),
        Command::Check => {
            with_config(&cli, |config| run::check(config, &mut io::stdout().lock()))
        }
        Command::Encode { output } => with_config(&cli, |config| run::encode(config, &output)),
    }
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Loads and validates configuration, then runs `command` with it.
fn with_config(
    cli: &Cli,
    command: impl FnOnce(&ValidatedConfig) -> Result<(), RunError>,
) -> ExitCode {
    let config = match ValidatedConfig::load(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    tracing::debug!("{config}");
    finish(command(&config))
}

/// Maps a command result to the process exit code.
fn finish(result: Result<(), RunError>) -> ExitCode {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            exit_code::runtime_error()
        }
    }
}
