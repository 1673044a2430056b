//! Tests for validated configuration.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::webhook::{ErrorKind, Webhook};

use super::{ConfigError, UrlOrigin};
use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::{ValidatedConfig, write_default_config};

const SAMPLE_URL: &str = "https://domain.com/sample_url#1234567890";

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["notify-webhook"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod required_fields {
    use super::*;

    #[test]
    fn missing_url_returns_error() {
        let result = ValidatedConfig::from_raw(&cli(&[]), None);

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired { field: "url", .. })
        ));
    }

    #[test]
    fn empty_toml_still_missing_url() {
        let toml = toml("");
        let result = ValidatedConfig::from_raw(&cli(&[]), Some(&toml));

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired { field: "url", .. })
        ));
    }

    #[test]
    fn url_from_cli() {
        let config = ValidatedConfig::from_raw(&cli(&["--url", SAMPLE_URL]), None).unwrap();
        assert_eq!(config.webhook, Webhook::new(SAMPLE_URL).unwrap());
    }

    #[test]
    fn url_from_toml() {
        let toml = toml(&format!("[webhook]\nurl = \"{SAMPLE_URL}\""));
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap();

        assert_eq!(config.webhook.url(), SAMPLE_URL);
    }
}

mod precedence {
    use super::*;

    #[test]
    fn cli_url_overrides_toml() {
        let toml = toml("[webhook]\nurl = \"https://toml.example.com/\"");
        let cli = cli(&["--url", "https://cli.example.com/"]);

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();
        assert_eq!(config.webhook.url(), "https://cli.example.com/");
    }

    #[test]
    fn cli_url_is_validated_even_when_toml_is_valid() {
        let toml = toml("[webhook]\nurl = \"https://toml.example.com/\"");
        let cli = cli(&["--url", "http://cli.example.com/"]);

        let result = ValidatedConfig::from_raw(&cli, Some(&toml));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidWebhook {
                origin: UrlOrigin::Cli,
                ..
            })
        ));
    }

    #[test]
    fn verbose_comes_from_cli() {
        let config = ValidatedConfig::from_raw(&cli(&["--url", SAMPLE_URL, "-v"]), None).unwrap();
        assert!(config.verbose);
    }
}

mod webhook_validation {
    use super::*;

    fn rejection(result: Result<ValidatedConfig, ConfigError>) -> (UrlOrigin, ErrorKind) {
        match result {
            Err(ConfigError::InvalidWebhook { origin, source }) => (origin, source.kind()),
            other => panic!("Expected InvalidWebhook, got {other:?}"),
        }
    }

    #[test]
    fn malformed_url_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--url", "domain.com/sample_url"]), None);
        assert_eq!(
            rejection(result),
            (UrlOrigin::Cli, ErrorKind::MalformedUrl)
        );
    }

    #[test]
    fn http_url_from_toml_is_rejected() {
        let toml = toml("[webhook]\nurl = \"http://domain.com/sample_url\"");
        let result = ValidatedConfig::from_raw(&cli(&[]), Some(&toml));

        assert_eq!(
            rejection(result),
            (UrlOrigin::ConfigFile, ErrorKind::InvalidArgument)
        );
    }

    #[test]
    fn rejection_message_names_origin() {
        let toml = toml("[webhook]\nurl = \"http://domain.com/sample_url\"");
        let err = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap_err();

        assert!(err.to_string().contains("webhook.url in config file"));
        assert!(err.to_string().contains("only HTTPS URLs are supported"));
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_without_config_uses_cli() {
        let config = ValidatedConfig::load(&cli(&["--url", SAMPLE_URL])).unwrap();
        assert_eq!(config.webhook.url(), SAMPLE_URL);
    }

    #[test]
    fn load_reads_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[webhook]\nurl = \"{SAMPLE_URL}\"").unwrap();
        let path = file.path().to_str().unwrap();

        let config = ValidatedConfig::load(&cli(&["--config", path])).unwrap();
        assert_eq!(config.webhook.url(), SAMPLE_URL);
    }

    #[test]
    fn load_missing_config_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let result = ValidatedConfig::load(&cli(&["--config", path.to_str().unwrap()]));
        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn load_invalid_toml_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[webhook\nurl =").unwrap();
        let path = file.path().to_str().unwrap();

        let result = ValidatedConfig::load(&cli(&["--config", path]));
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn write_default_config_round_trips_through_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notify-webhook.toml");

        write_default_config(&path).unwrap();
        let toml = TomlConfig::load(&path).unwrap();

        assert!(toml.webhook.url.is_none());
    }

    #[test]
    fn write_default_config_into_missing_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("config.toml");

        let result = write_default_config(&path);
        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}

mod display {
    use super::*;

    #[test]
    fn display_shows_url() {
        let config = ValidatedConfig::from_raw(&cli(&["--url", SAMPLE_URL]), None).unwrap();
        let display = config.to_string();

        assert!(display.contains(SAMPLE_URL));
        assert!(display.contains("verbose: false"));
    }
}
