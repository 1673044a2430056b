//! Error types for webhook construction and decoding.

use std::fmt;

use thiserror::Error;

/// Error type for webhook operations.
///
/// Every variant aborts construction; there is no partially built
/// [`Webhook`](super::Webhook). Use [`WebhookError::kind`] to classify
/// an error without matching on every variant.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The URL is not a syntactically valid absolute URL.
    #[error("Malformed URL '{url}': {source}")]
    MalformedUrl {
        /// The rejected URL string
        url: String,
        /// Underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// The URL parsed, but its scheme is not `https`.
    #[error("Unsupported scheme '{scheme}' in '{url}': only HTTPS URLs are supported")]
    UnsupportedScheme {
        /// The rejected URL string
        url: String,
        /// The scheme found in the URL
        scheme: String,
    },

    /// The URL is longer than the transport encoding can carry.
    #[error("URL is {len} bytes long, at most {max} bytes are supported")]
    TooLong {
        /// Length of the rejected URL in bytes
        len: usize,
        /// Maximum accepted length in bytes
        max: usize,
    },

    /// A required JSON field was not present.
    #[error("Required field '{field}' is not specified")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// The JSON input is not a well-formed webhook object.
    #[error("Failed to parse webhook JSON: {0}")]
    JsonParse(#[source] serde_json::Error),

    /// The transport bytes could not be written or read.
    #[error("Webhook transport error: {0}")]
    Transport(#[source] bincode::Error),
}

/// Coarse classification of [`WebhookError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unparseable URL.
    MalformedUrl,
    /// Syntactically valid input that breaks a semantic rule
    /// (non-HTTPS scheme, oversized URL, missing required field).
    InvalidArgument,
    /// Structurally invalid JSON.
    JsonParse,
    /// Broken or truncated transport bytes.
    Transport,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::MalformedUrl => "malformed url",
            Self::InvalidArgument => "invalid argument",
            Self::JsonParse => "json parse error",
            Self::Transport => "transport error",
        };
        f.write_str(label)
    }
}

/// Well-known field names for `MissingField` errors.
pub mod field {
    /// The webhook URL field.
    pub const URL: &str = "url";
}

impl WebhookError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedUrl { .. } => ErrorKind::MalformedUrl,
            Self::UnsupportedScheme { .. } | Self::TooLong { .. } | Self::MissingField { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::JsonParse(_) => ErrorKind::JsonParse,
            Self::Transport(_) => ErrorKind::Transport,
        }
    }

    /// Creates a `MissingField` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}
