//! JSON codec for [`Webhook`].
//!
//! The JSON form is an object with a single `url` key:
//!
//! ```json
//! {"url": "https://domain.com/sample_url#1234567890"}
//! ```
//!
//! Parsing is forward compatible: keys other than `url` are skipped along
//! with their values, however deeply nested. A missing `url` is an error,
//! and no other key is treated as an alias for it.

use std::fmt;
use std::io;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use super::error::field;
use super::{Webhook, WebhookError};

/// Raw fields collected from a webhook JSON object, before validation.
#[derive(Debug, Default)]
struct WebhookDocument {
    url: Option<String>,
}

impl<'de> Deserialize<'de> for WebhookDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = WebhookDocument;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a webhook JSON object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut document = WebhookDocument::default();
        let mut seen_url = false;

        while let Some(key) = map.next_key::<String>()? {
            if key == field::URL {
                if seen_url {
                    return Err(de::Error::duplicate_field(field::URL));
                }
                seen_url = true;
                document.url = map.next_value::<Option<String>>()?;
            } else {
                tracing::trace!("Skipping unknown webhook field '{key}'");
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(document)
    }
}

impl WebhookDocument {
    /// Validates the collected fields into a [`Webhook`].
    fn into_webhook(self) -> Result<Webhook, WebhookError> {
        let url = self.url.ok_or(WebhookError::missing(field::URL))?;
        Webhook::new(url)
    }
}

impl Serialize for Webhook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Webhook", 1)?;
        state.serialize_field(field::URL, self.url())?;
        state.end()
    }
}

/// Deserializes with the same rules as [`Webhook::from_json_str`].
///
/// Validation failures surface as custom errors of the outer format,
/// so the original [`WebhookError`] kind is only available through the
/// dedicated parsing functions.
impl<'de> Deserialize<'de> for Webhook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = WebhookDocument::deserialize(deserializer)?;
        document.into_webhook().map_err(de::Error::custom)
    }
}

impl Webhook {
    /// Writes the JSON object form of this webhook.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn to_json<W: io::Write>(&self, writer: W) -> io::Result<()> {
        serde_json::to_writer(writer, self).map_err(io::Error::from)
    }

    /// Returns the JSON object form of this webhook as a value.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let mut object = serde_json::Map::new();
        object.insert(field::URL.to_string(), serde_json::Value::from(self.url()));
        serde_json::Value::Object(object)
    }

    /// Returns the compact JSON object form of this webhook.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.to_json_value().to_string()
    }

    /// Parses a webhook from a stream of JSON text.
    ///
    /// The whole stream must hold exactly one JSON object (surrounding
    /// whitespace is allowed).
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`WebhookError::JsonParse`] if the input is not a well-formed JSON
    ///   object, or `url` is present but not a string
    /// - [`WebhookError::MissingField`] if `url` is absent or `null`
    /// - any error of [`Webhook::new`] if the URL itself is rejected
    pub fn parse<R: io::Read>(reader: R) -> Result<Self, WebhookError> {
        let mut deserializer = serde_json::Deserializer::from_reader(reader);
        let document =
            WebhookDocument::deserialize(&mut deserializer).map_err(WebhookError::JsonParse)?;
        deserializer.end().map_err(WebhookError::JsonParse)?;

        document.into_webhook()
    }

    /// Parses a webhook from a JSON string.
    ///
    /// # Errors
    ///
    /// Same as [`Webhook::parse`].
    pub fn from_json_str(json: &str) -> Result<Self, WebhookError> {
        let document =
            serde_json::from_str::<WebhookDocument>(json).map_err(WebhookError::JsonParse)?;
        document.into_webhook()
    }

    /// Parses a webhook from an already decoded JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`Webhook::parse`].
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, WebhookError> {
        let document = WebhookDocument::deserialize(value).map_err(WebhookError::JsonParse)?;
        document.into_webhook()
    }
}
