//! Diagnostic messages and their metadata.
//!
//! A [`Message`] is a single diagnostic entry attached to an outcome: a
//! severity ([`MessageType`]), human-readable content, and an optional
//! [`Metadata`] bag for machine-readable detail.
//!
//! # Metadata semantics
//!
//! Metadata is an **ordered** mapping from string keys to JSON values.
//! Keys compare ASCII-case-insensitively: inserting `"k"` over an existing
//! `"K"` leaves exactly one entry, keyed with the latest casing and holding
//! the latest value. Null is a legal value (`serde_json::Value::Null`).
//!
//! # Example
//!
//! ```
//! use outcome_core::{Message, MessageType};
//!
//! let message = Message::error("quota exceeded")
//!     .with_detail("limit", 100)
//!     .with_detail("LIMIT", 250);
//!
//! assert_eq!(message.kind, MessageType::Error);
//! assert_eq!(message.metadata.len(), 1);
//! assert_eq!(message.metadata.get("limit"), Some(&250.into()));
//! ```

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Severity of a diagnostic message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageType {
    /// Informational note; does not indicate a problem.
    Information,
    /// Something worth attention that did not fail the operation.
    Warning,
    /// A problem that explains a non-success outcome.
    Error,
}

/// An ordered metadata bag with ASCII-case-insensitive keys.
///
/// Serializes as a JSON object preserving insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    entries: Vec<(String, Value)>,
}

impl Metadata {
    /// Creates an empty bag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a key/value pair.
    ///
    /// Any existing entry whose key matches case-insensitively is removed;
    /// the new entry is appended under the given casing. Re-keying thus
    /// collapses case variants with the last-used casing winning.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        self.entries
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(&key));
        self.entries.push((key, value.into()));
    }

    /// Looks a value up by key, case-insensitively.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(key))
            .map(|(_, value)| value)
    }

    /// Whether a key is present, case-insensitively.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }
}

impl FromIterator<(String, Value)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut metadata = Self::new();
        for (key, value) in iter {
            metadata.insert(key, value);
        }
        metadata
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Metadata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MetadataVisitor;

        impl<'de> Visitor<'de> for MetadataVisitor {
            type Value = Metadata;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of metadata entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Metadata, A::Error> {
                let mut metadata = Metadata::new();
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    metadata.insert(key, value);
                }
                Ok(metadata)
            }
        }

        deserializer.deserialize_map(MetadataVisitor)
    }
}

/// A single diagnostic entry attached to an outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Severity of the message.
    #[serde(rename = "type")]
    pub kind: MessageType,
    /// Human-readable text.
    pub content: String,
    /// Machine-readable detail; empty by default.
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl Message {
    /// Creates a message with empty metadata.
    #[must_use]
    pub fn new(kind: MessageType, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            metadata: Metadata::new(),
        }
    }

    /// An [`MessageType::Information`] message.
    #[must_use]
    pub fn information(content: impl Into<String>) -> Self {
        Self::new(MessageType::Information, content)
    }

    /// A [`MessageType::Warning`] message.
    #[must_use]
    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageType::Warning, content)
    }

    /// An [`MessageType::Error`] message.
    #[must_use]
    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageType::Error, content)
    }

    /// Replaces the metadata bag wholesale.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Returns a copy with one metadata entry added (case-insensitive
    /// re-keying per [`Metadata::insert`]).
    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key, value);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_collapses_case_variants() {
        let mut metadata = Metadata::new();
        metadata.insert("K", "first");
        metadata.insert("k", "second");

        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata.get("K"), Some(&Value::String("second".into())));
        // Last-used casing wins.
        let (key, _) = metadata.iter().next().unwrap();
        assert_eq!(key, "k");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut metadata = Metadata::new();
        metadata.insert("RequestId", 42);
        assert!(metadata.contains_key("requestid"));
        assert_eq!(metadata.get("REQUESTID"), Some(&json!(42)));
        assert_eq!(metadata.get("missing"), None);
    }

    #[test]
    fn test_null_is_a_legal_value() {
        let mut metadata = Metadata::new();
        metadata.insert("tombstone", Value::Null);
        assert_eq!(metadata.get("tombstone"), Some(&Value::Null));
    }

    #[test]
    fn test_metadata_serializes_as_ordered_object() {
        let mut metadata = Metadata::new();
        metadata.insert("b", 1);
        metadata.insert("a", 2);

        let json = serde_json::to_string(&metadata).unwrap();
        assert_eq!(json, r#"{"b":1,"a":2}"#);

        let back: Metadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metadata);
    }

    #[test]
    fn test_message_round_trips_with_type_field() {
        let message = Message::warning("slow response").with_detail("elapsedMs", 1250);
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["type"], "Warning");
        assert_eq!(json["content"], "slow response");
        assert_eq!(json["metadata"]["elapsedMs"], 1250);

        let back: Message = serde_json::from_value(json).unwrap();
        assert_eq!(back, message);
    }

    #[test]
    fn test_empty_metadata_is_omitted_from_json() {
        let json = serde_json::to_value(Message::information("done")).unwrap();
        assert!(json.get("metadata").is_none());
    }
}
