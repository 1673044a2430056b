//! Validated configuration after merging CLI and TOML sources.
//!
//! All validation is performed during construction.

use std::fmt;
use std::path::Path;

use crate::webhook::Webhook;

use super::cli::Cli;
use super::error::{ConfigError, UrlOrigin, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Webhook (required)
    pub webhook: Webhook,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ url: {}, verbose: {} }}",
            self.webhook, self.verbose
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The webhook URL is missing from both sources
    /// - The webhook URL is malformed or not HTTPS
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let webhook = Self::resolve_webhook(cli, toml)?;

        Ok(Self {
            webhook,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_webhook(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Webhook, ConfigError> {
        let (url, origin) = cli
            .url
            .as_deref()
            .map(|url| (url, UrlOrigin::Cli))
            .or_else(|| {
                toml.and_then(|t| t.webhook.url.as_deref())
                    .map(|url| (url, UrlOrigin::ConfigFile))
            })
            .ok_or_else(|| {
                ConfigError::missing(field::URL, "Use --url or set webhook.url in config file")
            })?;

        Webhook::new(url).map_err(|source| ConfigError::InvalidWebhook { origin, source })
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
