//! Webhook value object for notification channels.
//!
//! This module provides:
//! - The validated HTTPS callback URL ([`Webhook`])
//! - Its error taxonomy ([`WebhookError`], [`ErrorKind`])
//! - A JSON codec (`{"url": "..."}`) via [`Webhook::to_json`] and [`Webhook::parse`]
//! - A transport (binary) codec via [`Webhook::write_to`] and [`Webhook::read_from`]
//!
//! Every way of obtaining a [`Webhook`] runs the same validation, so a value
//! in hand is always an absolute `https` URL.

mod error;
mod json;
mod model;
mod transport;


pub use error::{ErrorKind, WebhookError, field};
pub use model::{HTTPS_SCHEME, MAX_URL_BYTES, Webhook};
pub use transport::MAX_TRANSPORT_BYTES;
