//! Default values for configuration options.

/// Default path written by the `init` subcommand.
pub const CONFIG_FILE: &str = "notify-webhook.toml";

/// Path argument that stands for standard input.
pub const STDIN_PATH: &str = "-";
