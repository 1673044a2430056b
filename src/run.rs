//! Subcommand execution.
//!
//! Each command writes its result to the given output so it can be
//! exercised in tests without touching stdout.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use notify_webhook::config::{ValidatedConfig, defaults};
use notify_webhook::webhook::{Webhook, WebhookError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for command execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to open an input file.
    #[error("Failed to open '{}': {source}", path.display())]
    Open {
        /// Path of the input
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create or flush an output file.
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        /// Path of the output
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to write command output.
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),

    /// The webhook could not be decoded or encoded.
    #[error("{0}")]
    Webhook(#[from] WebhookError),
}

/// Prints the JSON form of the configured webhook.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn check(config: &ValidatedConfig, out: &mut impl Write) -> Result<(), RunError> {
    config.webhook.to_json(&mut *out).map_err(RunError::Output)?;
    writeln!(out).map_err(RunError::Output)?;

    tracing::info!("Webhook is valid: {}", config.webhook);
    Ok(())
}

/// Parses a webhook JSON document and prints its URL.
///
/// # Errors
///
/// Returns an error if the input cannot be opened, the document is
/// rejected, or the output cannot be written.
pub fn parse(input: &Path, out: &mut impl Write) -> Result<(), RunError> {
    let webhook = Webhook::parse(open_input(input)?)?;
    tracing::debug!("Parsed webhook from {}", input.display());

    writeln!(out, "{webhook}").map_err(RunError::Output)
}

/// Writes the transport encoding of the configured webhook to `output`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn encode(config: &ValidatedConfig, output: &Path) -> Result<(), RunError> {
    let write_error = |source: io::Error| RunError::Write {
        path: output.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(output).map_err(write_error)?);
    config.webhook.write_to(&mut writer)?;
    writer.flush().map_err(write_error)?;

    tracing::info!(
        "Wrote transport encoding of {} to {}",
        config.webhook,
        output.display()
    );
    Ok(())
}

/// Reads a transport-encoded webhook and prints its JSON form.
///
/// # Errors
///
/// Returns an error if the input cannot be opened, the bytes are
/// rejected, or the output cannot be written.
pub fn decode(input: &Path, out: &mut impl Write) -> Result<(), RunError> {
    let webhook = Webhook::read_from(open_input(input)?)?;
    tracing::debug!("Decoded webhook from {}", input.display());

    webhook.to_json(&mut *out).map_err(RunError::Output)?;
    writeln!(out).map_err(RunError::Output)
}

/// Opens a file for reading, or stdin for [`defaults::STDIN_PATH`].
fn open_input(path: &Path) -> Result<Box<dyn Read>, RunError> {
    if path.as_os_str() == defaults::STDIN_PATH {
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path).map_err(|e| RunError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(Box::new(BufReader::new(file)))
}
