//! RFC 7807 problem payloads.
//!
//! [`ProblemDetails`] is the failure payload shape emitted by the adapters;
//! [`ValidationProblemDetails`] extends it with a field→errors map for
//! validation failures. Both are explicit serializable DTOs (the outcome's
//! messages are projected through [`MessageDto`] rather than serialized
//! ad hoc), and both carry the service-level status and messages as RFC 7807
//! extension members (`svcStatus`, `messages`).
//!
//! # Shape
//!
//! ```json
//! {
//!   "type": "https://httpstatuses.io/400",
//!   "title": "first",
//!   "detail": "first; second",
//!   "status": 400,
//!   "svcStatus": "Failed",
//!   "messages": [{ "type": "Error", "content": "first" }, ...]
//! }
//! ```

use http::StatusCode;
use outcome_core::{Message, MessageType, Metadata, Outcome, Status};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Explicit serializable projection of a [`Message`] for problem extensions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    /// Severity of the projected message.
    #[serde(rename = "type")]
    pub kind: MessageType,
    /// The message text.
    pub content: String,
    /// The message metadata; omitted when empty.
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl From<&Message> for MessageDto {
    fn from(message: &Message) -> Self {
        Self {
            kind: message.kind,
            content: message.content.clone(),
            metadata: message.metadata.clone(),
        }
    }
}

/// An RFC 7807 problem payload derived from an outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// Problem type URI; points at the status code registry entry.
    #[serde(rename = "type")]
    pub type_uri: String,
    /// Short human-readable summary.
    pub title: String,
    /// Longer explanation; present only when there are two or more messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// The HTTP status code this payload is served with.
    pub status: u16,
    /// URI identifying this specific occurrence, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// Extension member: the service-level outcome status.
    #[serde(rename = "svcStatus")]
    pub svc_status: Status,
    /// Extension member: the outcome's diagnostic messages.
    pub messages: Vec<MessageDto>,
}

impl ProblemDetails {
    /// Builds the problem payload for an outcome served at `status`.
    ///
    /// The title is the first message's content when any messages exist and
    /// the outcome status name otherwise; the detail joins the message
    /// contents with `"; "` and is present only for two or more messages.
    #[must_use]
    pub fn from_outcome<T>(outcome: &Outcome<T>, status: StatusCode) -> Self {
        let messages = outcome.messages();
        let title = messages
            .first()
            .map_or_else(|| outcome.status().name().to_owned(), |m| m.content.clone());
        let detail = if messages.len() >= 2 {
            Some(
                messages
                    .iter()
                    .map(|m| m.content.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        } else {
            None
        };

        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title,
            detail,
            status: status.as_u16(),
            instance: None,
            svc_status: outcome.status(),
            messages: messages.iter().map(MessageDto::from).collect(),
        }
    }
}

/// A [`ProblemDetails`] extended with field-level validation errors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationProblemDetails {
    /// The base problem payload; its members serialize at the top level.
    #[serde(flatten)]
    pub problem: ProblemDetails,
    /// Field name → error texts. Object-level errors group under `""`.
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationProblemDetails {
    /// Builds the validation payload for an outcome served at `status`,
    /// with field errors already derived by the configured mapper.
    #[must_use]
    pub fn from_outcome<T>(
        outcome: &Outcome<T>,
        status: StatusCode,
        errors: BTreeMap<String, Vec<String>>,
    ) -> Self {
        Self {
            problem: ProblemDetails::from_outcome(outcome, status),
            errors,
        }
    }
}
