//! Field-level validation detail.
//!
//! A [`ValidationIssue`] names the thing that was rejected (`fields`) and
//! why (`message`). Issues travel on an outcome as message metadata, under
//! [`VALIDATION_RESULT_KEY`] for a single issue or [`VALIDATION_RESULTS_KEY`]
//! for a collection, so a failed outcome stays a plain value while the
//! structured detail remains recoverable downstream (for example by the
//! HTTP adapters when building a validation problem response).
//!
//! # Round trip
//!
//! ```
//! use outcome_core::{factory, ValidationIssue};
//!
//! let outcome = factory::validation_failure(vec![
//!     ValidationIssue::for_field("email", "must not be empty"),
//!     ValidationIssue::for_field("age", "must be positive"),
//! ]);
//!
//! let issues = outcome.validation_issues();
//! assert_eq!(issues.len(), 2);
//! assert_eq!(issues[0].fields, vec!["email"]);
//! ```

use crate::message::Message;
use crate::outcome::{Messages, Outcome};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata key holding a single attached [`ValidationIssue`].
pub const VALIDATION_RESULT_KEY: &str = "ValidationResult";

/// Metadata key holding an array of attached [`ValidationIssue`]s.
pub const VALIDATION_RESULTS_KEY: &str = "ValidationResults";

/// One rejected input: a message plus the names of the offending fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Why the input was rejected.
    pub message: String,
    /// The rejected field names; may be empty for object-level issues.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl ValidationIssue {
    /// An issue with no field attribution.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// An issue attributed to a single field.
    #[must_use]
    pub fn for_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(message).with_field(field)
    }

    /// Adds another field attribution.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// The metadata representation. Infallible by construction.
    fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("message".into(), Value::String(self.message.clone()));
        if !self.fields.is_empty() {
            map.insert(
                "fields".into(),
                Value::Array(self.fields.iter().cloned().map(Value::String).collect()),
            );
        }
        Value::Object(map)
    }

    /// Reads an issue back out of a metadata value; `None` when the value
    /// does not have the expected shape.
    fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let message = map.get("message")?.as_str()?.to_owned();
        let fields = match map.get("fields") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_owned))
                .collect(),
            _ => Vec::new(),
        };
        Some(Self { message, fields })
    }
}

/// Converts issues into Error messages, prefixing each content with the
/// issue's first named field (`"field: message"`; bare message when the
/// issue names no field). Each message carries its issue under
/// [`VALIDATION_RESULT_KEY`].
#[must_use]
pub fn to_messages_prefixed(issues: &[ValidationIssue]) -> Messages {
    issues
        .iter()
        .map(|issue| {
            let content = match issue.fields.first() {
                Some(field) => format!("{field}: {}", issue.message),
                None => issue.message.clone(),
            };
            Message::error(content).with_detail(VALIDATION_RESULT_KEY, issue.to_value())
        })
        .collect()
}

/// Converts issues into Error messages, deferring field attribution to the
/// caller: each base message carries the bare issue message and the metadata
/// attachment, and `enrich` may reshape it (rewrite the content, attach more
/// metadata, change the severity).
#[must_use]
pub fn to_messages_with(
    issues: &[ValidationIssue],
    enrich: impl Fn(Message, &ValidationIssue) -> Message,
) -> Messages {
    issues
        .iter()
        .map(|issue| {
            let base =
                Message::error(issue.message.clone()).with_detail(VALIDATION_RESULT_KEY, issue.to_value());
            enrich(base, issue)
        })
        .collect()
}

impl<T> Outcome<T> {
    /// Scans every message's metadata for validation issues, accumulating a
    /// single flat list in message order.
    ///
    /// Both [`VALIDATION_RESULT_KEY`] (single issue) and
    /// [`VALIDATION_RESULTS_KEY`] (array of issues) are recognized,
    /// case-insensitively. Metadata values that do not decode as issues are
    /// skipped; extraction never fails.
    #[must_use]
    pub fn validation_issues(&self) -> Vec<ValidationIssue> {
        let mut found = Vec::new();
        for message in self.messages() {
            for (key, value) in message.metadata.iter() {
                if key.eq_ignore_ascii_case(VALIDATION_RESULT_KEY) {
                    if let Some(issue) = ValidationIssue::from_value(value) {
                        found.push(issue);
                    }
                } else if key.eq_ignore_ascii_case(VALIDATION_RESULTS_KEY) {
                    if let Some(items) = value.as_array() {
                        found.extend(items.iter().filter_map(ValidationIssue::from_value));
                    }
                }
            }
        }
        found
    }

    /// [`validation_issues`](Self::validation_issues), returning `None` when
    /// no issue was found.
    #[must_use]
    pub fn try_validation_issues(&self) -> Option<Vec<ValidationIssue>> {
        let issues = self.validation_issues();
        if issues.is_empty() { None } else { Some(issues) }
    }
}
