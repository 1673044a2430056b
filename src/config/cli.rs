//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// notify-webhook: HTTPS webhook validator and codec
///
/// Validates notification webhook URLs and converts them between
/// their JSON and transport encodings.
#[derive(Debug, Parser)]
#[command(name = "notify-webhook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run (default: check)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Webhook URL (overrides the config file)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for notify-webhook
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Validate the configured webhook and print its JSON form
    Check,

    /// Parse a webhook JSON document and print its URL
    Parse {
        /// JSON document to read ('-' for stdin)
        #[arg(long, short, default_value = defaults::STDIN_PATH)]
        input: PathBuf,
    },

    /// Write the transport encoding of the configured webhook
    Encode {
        /// Output path for the encoded bytes
        #[arg(long, short)]
        output: PathBuf,
    },

    /// Read a transport-encoded webhook and print its JSON form
    Decode {
        /// Encoded bytes to read ('-' for stdin)
        #[arg(long, short, default_value = defaults::STDIN_PATH)]
        input: PathBuf,
    },

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns the subcommand to run, defaulting to [`Command::Check`].
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Check)
    }

    /// Returns true if the subcommand needs a resolved webhook from
    /// the CLI or config file.
    #[must_use]
    pub fn needs_webhook(&self) -> bool {
        matches!(self.command(), Command::Check | Command::Encode { .. })
    }
}
