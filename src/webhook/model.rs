//! The validated webhook value object.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use url::Url;

use super::WebhookError;

/// The only scheme a webhook may use.
pub const HTTPS_SCHEME: &str = "https";

/// Longest accepted URL in bytes.
///
/// Equals [`MAX_TRANSPORT_BYTES`](super::MAX_TRANSPORT_BYTES) minus the
/// 8-byte length prefix, so every webhook can be transport encoded.
pub const MAX_URL_BYTES: usize = 64 * 1024 - 8;

/// An immutable, validated HTTPS callback URL.
///
/// A `Webhook` always holds a syntactically valid absolute URL whose scheme
/// is `https`. The original string is kept verbatim: construction never
/// normalizes or re-encodes it, so fragments, queries and path segments
/// survive every round trip unchanged.
///
/// Equality and hashing compare the URL string only.
///
/// # Example
///
/// ```
/// use notify_webhook::webhook::Webhook;
///
/// let webhook = Webhook::new("https://domain.com/sample_url#1234567890").unwrap();
/// assert_eq!(webhook.url(), "https://domain.com/sample_url#1234567890");
/// assert_eq!(webhook.parsed().fragment(), Some("1234567890"));
/// ```
#[derive(Clone)]
pub struct Webhook {
    url: String,
    parsed: Url,
}

impl Webhook {
    /// Creates a webhook from a URL string.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`WebhookError::MalformedUrl`] if the string is not an absolute URL
    ///   (for example `domain.com/path`, which has no scheme)
    /// - [`WebhookError::UnsupportedScheme`] if the scheme is not `https`
    /// - [`WebhookError::TooLong`] if the URL exceeds [`MAX_URL_BYTES`]
    pub fn new(url: impl Into<String>) -> Result<Self, WebhookError> {
        let url = url.into();

        let parsed = match Url::parse(&url) {
            Ok(parsed) => parsed,
            Err(source) => {
                tracing::debug!("Rejected webhook url '{url}': {source}");
                return Err(WebhookError::MalformedUrl { url, source });
            }
        };

        // The parser lowercases schemes, so `HTTPS://` is accepted here
        if parsed.scheme() != HTTPS_SCHEME {
            tracing::debug!(
                "Rejected webhook url '{url}': scheme '{}' is not https",
                parsed.scheme()
            );
            return Err(WebhookError::UnsupportedScheme {
                scheme: parsed.scheme().to_string(),
                url,
            });
        }

        if url.len() > MAX_URL_BYTES {
            tracing::debug!("Rejected webhook url of {} bytes", url.len());
            return Err(WebhookError::TooLong {
                len: url.len(),
                max: MAX_URL_BYTES,
            });
        }

        Ok(Self { url, parsed })
    }

    /// Returns the URL exactly as it was provided.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the parsed form of the URL.
    ///
    /// Useful when dispatching requests; note that [`Url::as_str`] may differ
    /// from [`Webhook::url`] since the parser normalizes its serialization.
    #[must_use]
    pub const fn parsed(&self) -> &Url {
        &self.parsed
    }

    /// Consumes the webhook, returning the original URL string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.url
    }
}

impl PartialEq for Webhook {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for Webhook {}

impl Hash for Webhook {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}

impl fmt::Debug for Webhook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Webhook").field("url", &self.url).finish()
    }
}

impl fmt::Display for Webhook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl AsRef<str> for Webhook {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl FromStr for Webhook {
    type Err = WebhookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Webhook {
    type Error = WebhookError;

    fn try_from(url: String) -> Result<Self, Self::Error> {
        Self::new(url)
    }
}

impl TryFrom<&str> for Webhook {
    type Error = WebhookError;

    fn try_from(url: &str) -> Result<Self, Self::Error> {
        Self::new(url)
    }
}

impl From<Webhook> for String {
    fn from(webhook: Webhook) -> Self {
        webhook.url
    }
}
