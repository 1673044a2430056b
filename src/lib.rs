//! notify-webhook: validated HTTPS webhooks for notification channels
//!
//! A library providing the [`webhook::Webhook`] value object, an immutable
//! absolute HTTPS callback URL, together with its JSON and transport
//! encodings and a small configuration layer for loading one.

pub mod config;
pub mod webhook;
