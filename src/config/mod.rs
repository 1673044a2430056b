//! Configuration layer for notify-webhook.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! The webhook URL is resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI argument** - `--url`
//! 2. **TOML config file** - `webhook.url`
//!
//! There is no built-in default; a missing URL is an error. Whichever source
//! wins is validated with the same rules as [`Webhook::new`](crate::webhook::Webhook::new).

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, UrlOrigin, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
