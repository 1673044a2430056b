//! Transport (binary) codec for [`Webhook`].
//!
//! The transport form is a single string field: a little-endian `u64`
//! byte length followed by the UTF-8 bytes of the URL. Reading re-validates
//! the URL, so forged or corrupted bytes fail the same way direct
//! construction does.

use std::io;

use bincode::Options;

use super::{Webhook, WebhookError};

/// Upper bound on the encoded size of a webhook, length prefix included.
///
/// Guards decoding against forged length prefixes. Construction caps URLs
/// at [`MAX_URL_BYTES`](super::MAX_URL_BYTES) so that every webhook fits.
pub const MAX_TRANSPORT_BYTES: u64 = 64 * 1024;

fn transport_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .with_limit(MAX_TRANSPORT_BYTES)
}

impl Webhook {
    /// Writes the transport form of this webhook.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Transport`] if the writer fails.
    pub fn write_to<W: io::Write>(&self, writer: W) -> Result<(), WebhookError> {
        transport_options()
            .serialize_into(writer, self.url())
            .map_err(WebhookError::Transport)
    }

    /// Reads a webhook from its transport form.
    ///
    /// Consumes exactly one encoded string from `reader`; trailing bytes are
    /// left unread.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Transport`] if the bytes are truncated, not
    /// UTF-8, or over the size limit, and any error of [`Webhook::new`] if
    /// the decoded URL is rejected.
    pub fn read_from<R: io::Read>(reader: R) -> Result<Self, WebhookError> {
        let url: String = transport_options()
            .deserialize_from(reader)
            .map_err(WebhookError::Transport)?;
        tracing::trace!("Decoded webhook transport url '{url}'");

        Self::new(url)
    }

    /// Returns the transport form of this webhook.
    ///
    /// # Errors
    ///
    /// Same as [`Webhook::write_to`].
    pub fn to_bytes(&self) -> Result<Vec<u8>, WebhookError> {
        transport_options()
            .serialize(self.url())
            .map_err(WebhookError::Transport)
    }

    /// Decodes a webhook from a byte slice holding its transport form.
    ///
    /// # Errors
    ///
    /// Same as [`Webhook::read_from`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WebhookError> {
        Self::read_from(bytes)
    }
}
