//! The outcome value itself.
//!
//! [`Outcome`] ties together a [`Status`], an optional [`ResultCode`], an
//! ordered list of [`Message`]s and, for `Outcome<T>`, an optional value.
//! The untyped result of the pattern is `Outcome<()>`, spelled plain
//! `Outcome` thanks to the default type parameter.
//!
//! Every instance is immutable: the `with_*`/`without_*` helpers and all
//! combinators return new instances and never touch the original, so a
//! single outcome can be shared freely across threads.
//!
//! # Value and status are orthogonal
//!
//! `value` carries no relationship to `status`. A `Completed` outcome may
//! hold `None` (an operation with nothing to return), and designated
//! factories produce `Cancelled` outcomes that still carry a best-effort
//! value snapshot.
//!
//! # Example
//!
//! ```
//! use outcome_core::{codes, factory, Message};
//!
//! let outcome = factory::success(7)
//!     .with_code(codes::CREATED)
//!     .with_message(Message::information("stored"));
//!
//! assert!(outcome.is_success());
//! assert!(outcome.has_code("created"));
//! assert_eq!(outcome.value(), Some(&7));
//! ```

use crate::code::ResultCode;
use crate::message::Message;
use crate::status::Status;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

/// Ordered list of diagnostic messages.
///
/// Most outcomes carry zero, one or two messages, so the list is inlined up
/// to two entries before spilling to the heap.
pub type Messages = SmallVec<[Message; 2]>;

/// An immutable, discriminated outcome value.
///
/// See the [module documentation](self) for the data model. The type
/// parameter defaults to `()`, which is the untyped (value-less) form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outcome<T = ()> {
    pub(crate) status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) code: Option<ResultCode>,
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub(crate) messages: Messages,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) value: Option<T>,
}

impl<T> Outcome<T> {
    /// Creates an outcome with the given status, no code, no messages and no
    /// value. Construction never fails.
    #[must_use]
    pub fn new(status: Status) -> Self {
        Self {
            status,
            code: None,
            messages: Messages::new(),
            value: None,
        }
    }

    /// The primary outcome classification.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// The secondary domain classifier, if any.
    #[must_use]
    pub const fn code(&self) -> Option<&ResultCode> {
        self.code.as_ref()
    }

    /// The diagnostic messages, in attachment order. Never null; empty when
    /// nothing was attached.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The carried value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consumes the outcome and returns the carried value, if any.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// `true` iff the status is [`Status::Completed`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// `true` iff the status is [`Status::Failed`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.status, Status::Failed)
    }

    /// `true` iff the status is [`Status::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.status, Status::Error)
    }

    /// `true` iff the status is [`Status::Cancelled`].
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self.status, Status::Cancelled)
    }

    /// The negation of [`is_success`](Self::is_success).
    #[must_use]
    pub const fn is_unsuccessful(&self) -> bool {
        !self.is_success()
    }

    /// ASCII-case-insensitive comparison of the attached code against `code`.
    /// `false` when no code is attached.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.code.as_ref().is_some_and(|c| c.matches(code))
    }

    /// Returns a copy with the code replaced.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<ResultCode>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns a copy with the code cleared.
    #[must_use]
    pub fn without_code(mut self) -> Self {
        self.code = None;
        self
    }

    /// [`with_code`](Self::with_code) when `condition` holds, otherwise the
    /// outcome unchanged.
    #[must_use]
    pub fn with_code_if(self, code: impl Into<ResultCode>, condition: bool) -> Self {
        if condition { self.with_code(code) } else { self }
    }

    /// [`with_code`](Self::with_code) when the predicate over the outcome
    /// holds, otherwise the outcome unchanged.
    #[must_use]
    pub fn with_code_when(
        self,
        code: impl Into<ResultCode>,
        predicate: impl FnOnce(&Self) -> bool,
    ) -> Self {
        let applies = predicate(&self);
        self.with_code_if(code, applies)
    }

    /// [`without_code`](Self::without_code) when `condition` holds.
    #[must_use]
    pub fn without_code_if(self, condition: bool) -> Self {
        if condition { self.without_code() } else { self }
    }

    /// [`without_code`](Self::without_code) when the predicate holds.
    #[must_use]
    pub fn without_code_when(self, predicate: impl FnOnce(&Self) -> bool) -> Self {
        let applies = predicate(&self);
        self.without_code_if(applies)
    }

    /// Returns a copy with one message appended.
    #[must_use]
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Returns a copy with messages appended in order.
    #[must_use]
    pub fn with_messages(mut self, messages: impl IntoIterator<Item = Message>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Returns a copy with a metadata entry attached to the **last** message.
    ///
    /// Keys re-key case-insensitively per
    /// [`Metadata::insert`](crate::Metadata::insert). When the outcome has no
    /// messages this is a no-op and the outcome is returned unchanged.
    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        if let Some(last) = self.messages.last_mut() {
            last.metadata.insert(key, value);
        }
        self
    }

    /// Discards the value, keeping status, code and messages.
    #[must_use]
    pub fn drop_value(self) -> Outcome {
        Outcome {
            status: self.status,
            code: self.code,
            messages: self.messages,
            value: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;
    use crate::message::MessageType;

    #[test]
    fn test_new_has_safe_defaults() {
        let outcome: Outcome = Outcome::new(Status::Completed);
        assert!(outcome.is_success());
        assert!(outcome.code().is_none());
        assert!(outcome.messages().is_empty());
        assert!(outcome.value().is_none());
    }

    #[test]
    fn test_unsuccessful_is_negated_success() {
        for status in [
            Status::Completed,
            Status::Failed,
            Status::Error,
            Status::Cancelled,
        ] {
            let outcome: Outcome = Outcome::new(status);
            assert_eq!(outcome.is_unsuccessful(), !outcome.is_success());
        }
    }

    #[test]
    fn test_with_message_leaves_original_untouched() {
        let original: Outcome = Outcome::new(Status::Failed);
        let extended = original.clone().with_message(Message::error("boom"));

        assert!(original.messages().is_empty());
        assert_eq!(extended.messages().len(), 1);
        assert_eq!(extended.messages()[0].content, "boom");
    }

    #[test]
    fn test_code_roundtrip_clears() {
        let outcome: Outcome = Outcome::new(Status::Completed);
        assert!(outcome.with_code("Anything").without_code().code().is_none());
    }

    #[test]
    fn test_conditional_code_helpers() {
        let outcome: Outcome = Outcome::new(Status::Failed);
        assert!(outcome.clone().with_code_if("NotFound", false).code().is_none());
        assert!(outcome.clone().with_code_if("NotFound", true).has_code("notfound"));

        let coded = outcome
            .clone()
            .with_code_when("NotFound", Outcome::is_failure);
        assert!(coded.has_code("NotFound"));

        let cleared = coded.without_code_when(|o| o.has_code("NOTFOUND"));
        assert!(cleared.code().is_none());
    }

    #[test]
    fn test_with_detail_targets_last_message_only() {
        let outcome: Outcome = Outcome::new(Status::Failed)
            .with_message(Message::error("first"))
            .with_message(Message::error("second"))
            .with_detail("hint", "retry");

        assert!(outcome.messages()[0].metadata.is_empty());
        assert_eq!(
            outcome.messages()[1].metadata.get("hint"),
            Some(&"retry".into())
        );
    }

    #[test]
    fn test_with_detail_rekeys_case_insensitively() {
        let outcome: Outcome = Outcome::new(Status::Failed)
            .with_message(Message::error("oops"))
            .with_detail("K", "V")
            .with_detail("k", "W");

        let metadata = &outcome.messages()[0].metadata;
        assert_eq!(metadata.len(), 1);
        let (key, value) = metadata.iter().next().unwrap();
        assert_eq!(key, "k");
        assert_eq!(value, &Value::from("W"));
    }

    #[test]
    fn test_with_detail_without_messages_is_noop() {
        let outcome: Outcome = Outcome::new(Status::Failed).with_detail("K", "V");
        assert!(outcome.messages().is_empty());
    }

    #[test]
    fn test_drop_value_preserves_everything_else() {
        let outcome = Outcome::<i32> {
            status: Status::Cancelled,
            code: Some("Partial".into()),
            messages: Messages::from_iter([Message::warning("cut short")]),
            value: Some(3),
        };

        let untyped = outcome.drop_value();
        assert!(untyped.is_cancelled());
        assert!(untyped.has_code("partial"));
        assert_eq!(untyped.messages().len(), 1);
        assert_eq!(untyped.messages()[0].kind, MessageType::Warning);
    }

    #[test]
    fn test_envelope_serialization_skips_absent_fields() {
        let bare: Outcome = Outcome::new(Status::Completed);
        let json = serde_json::to_value(&bare).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "Completed" }));

        let full = Outcome::<i32>::new(Status::Failed)
            .with_code("NotFound")
            .with_message(Message::error("missing"));
        let json = serde_json::to_value(&full).unwrap();
        assert_eq!(json["status"], "Failed");
        assert_eq!(json["code"], "NotFound");
        assert_eq!(json["messages"][0]["content"], "missing");
        assert!(json.get("value").is_none());
    }
}
