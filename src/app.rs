//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use notify_webhook::config::{ConfigError, field};
use notify_webhook::webhook::WebhookError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, missing or rejected URL, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - unreadable input, malformed documents, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints a hint for the given configuration error, if there is one.
pub fn print_config_hint(error: &ConfigError) {
    if let Some(hint) = config_hint(error) {
        eprintln!("\n{hint}");
    }
}

/// Returns a hint telling the user how to fix a configuration error.
///
/// Rejected URLs are explained per rejection kind and point back at the
/// source (`--url` or the config file) the URL was read from.
pub fn config_hint(error: &ConfigError) -> Option<String> {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::URL => Some(INIT_HINT.into()),
        ConfigError::FileRead { .. } => Some(INIT_HINT.into()),
        ConfigError::InvalidWebhook { origin, source } => {
            let fix = match source {
                WebhookError::MalformedUrl { .. } => {
                    "must be an absolute URL with a scheme and host".to_string()
                }
                WebhookError::UnsupportedScheme { scheme, .. } => {
                    format!("uses '{scheme}' but must use the https scheme")
                }
                WebhookError::TooLong { max, .. } => {
                    format!("is too long to be stored or sent (at most {max} bytes)")
                }
                _ => return None,
            };
            Some(format!(
                "Check {origin}: the webhook URL {fix}, e.g. https://hooks.example.com/notify"
            ))
        }
        _ => None,
    }
}

const INIT_HINT: &str = "Run 'notify-webhook init' to generate a configuration template.";

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so command output on stdout stays machine readable.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
