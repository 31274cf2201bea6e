//! Factory constructors for common status/code shapes.
//!
//! Every outcome in an application normally starts from one of these. They
//! pair a [`Status`] with the conventional [`codes`] value so callers and
//! HTTP adapters can discriminate without string plumbing at each call site.
//!
//! # Example
//!
//! ```
//! use outcome_core::{codes, factory};
//!
//! let found = factory::created("user-17");
//! assert!(found.is_success());
//! assert!(found.has_code(codes::CREATED));
//!
//! let missing = factory::not_found::<String>();
//! assert!(missing.is_failure());
//! assert!(missing.has_code("NotFound"));
//! ```

use crate::code::{ResultCode, codes};
use crate::message::Message;
use crate::outcome::Outcome;
use crate::status::Status;
use crate::validation::{self, ValidationIssue};
use std::fmt;

/// An untyped success.
#[must_use]
pub fn completed() -> Outcome {
    Outcome::new(Status::Completed)
}

/// A success carrying a value.
#[must_use]
pub fn success<T>(value: T) -> Outcome<T> {
    let mut outcome = Outcome::new(Status::Completed);
    outcome.value = Some(value);
    outcome
}

/// A success carrying no value.
///
/// Value presence is orthogonal to status; this is the typed counterpart of
/// [`completed`] for pipelines that expect an `Outcome<T>`.
#[must_use]
pub fn success_empty<T>() -> Outcome<T> {
    Outcome::new(Status::Completed)
}

/// A failure with a single Error message.
#[must_use]
pub fn failure<T>(message: impl Into<String>) -> Outcome<T> {
    Outcome::new(Status::Failed).with_message(Message::error(message))
}

/// A failure carrying the given messages verbatim.
#[must_use]
pub fn failure_from<T>(messages: impl IntoIterator<Item = Message>) -> Outcome<T> {
    Outcome::new(Status::Failed).with_messages(messages)
}

/// An error outcome with a single Error message.
#[must_use]
pub fn error<T>(message: impl Into<String>) -> Outcome<T> {
    Outcome::new(Status::Error).with_message(Message::error(message))
}

/// An error outcome carrying the given messages verbatim.
#[must_use]
pub fn error_from<T>(messages: impl IntoIterator<Item = Message>) -> Outcome<T> {
    Outcome::new(Status::Error).with_messages(messages)
}

/// A cancelled outcome with a single Warning message.
#[must_use]
pub fn cancelled<T>(message: impl Into<String>) -> Outcome<T> {
    Outcome::new(Status::Cancelled).with_message(Message::warning(message))
}

/// A cancelled outcome that still carries a best-effort value snapshot.
///
/// Cancellation often interrupts work that has already produced something
/// usable; the snapshot lets callers keep it. The outcome remains
/// unsuccessful.
#[must_use]
pub fn cancelled_with<T>(value: T, message: impl Into<String>) -> Outcome<T> {
    let mut outcome = cancelled(message);
    outcome.value = Some(value);
    outcome
}

/// A success for a newly created resource, coded [`codes::CREATED`].
#[must_use]
pub fn created<T>(value: T) -> Outcome<T> {
    success(value).with_code(codes::CREATED)
}

/// A success for an updated resource, coded [`codes::UPDATED`].
#[must_use]
pub fn updated() -> Outcome {
    completed().with_code(codes::UPDATED)
}

/// A success for a deleted resource, coded [`codes::DELETED`].
#[must_use]
pub fn deleted() -> Outcome {
    completed().with_code(codes::DELETED)
}

/// A failure coded [`codes::NOT_FOUND`].
#[must_use]
pub fn not_found<T>() -> Outcome<T> {
    Outcome::new(Status::Failed).with_code(codes::NOT_FOUND)
}

/// A failure coded [`codes::UNAUTHORIZED`].
#[must_use]
pub fn unauthorized<T>() -> Outcome<T> {
    Outcome::new(Status::Failed).with_code(codes::UNAUTHORIZED)
}

/// A failure coded [`codes::FORBIDDEN`].
#[must_use]
pub fn forbidden<T>() -> Outcome<T> {
    Outcome::new(Status::Failed).with_code(codes::FORBIDDEN)
}

/// A validation outcome coded [`codes::VALIDATION_FAILED`].
///
/// An empty issue list is **not** a failure: it yields a plain success with
/// no code and no messages. A non-empty list yields a failure with one
/// prefixed Error message per issue and each issue attached as metadata, so
/// the structured detail can later be recovered with
/// [`Outcome::validation_issues`].
#[must_use]
pub fn validation_failure(issues: Vec<ValidationIssue>) -> Outcome {
    validation_failure_with(codes::VALIDATION_FAILED, issues)
}

/// [`validation_failure`] with a caller-chosen code.
#[must_use]
pub fn validation_failure_with(
    code: impl Into<ResultCode>,
    issues: Vec<ValidationIssue>,
) -> Outcome {
    if issues.is_empty() {
        return completed();
    }
    Outcome::new(Status::Failed)
        .with_code(code)
        .with_messages(validation::to_messages_prefixed(&issues))
}

/// Bridges a std `Result` into the algebra.
///
/// `Ok` becomes a success carrying the value; `Err` becomes a failure with a
/// single Error message of the error's `Display` text.
impl<T, E: fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => success(value),
            Err(err) => failure(err.to_string()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;
    use crate::message::MessageType;

    #[test]
    fn test_status_shapes() {
        assert_eq!(completed().status(), Status::Completed);
        assert_eq!(success(1).status(), Status::Completed);
        assert_eq!(failure::<()>("e").status(), Status::Failed);
        assert_eq!(error::<()>("e").status(), Status::Error);
        assert_eq!(cancelled::<()>("c").status(), Status::Cancelled);
    }

    #[test]
    fn test_coded_factories() {
        assert!(created(1).has_code(codes::CREATED));
        assert!(updated().has_code(codes::UPDATED));
        assert!(deleted().has_code(codes::DELETED));
        assert!(not_found::<()>().has_code(codes::NOT_FOUND));
        assert!(unauthorized::<()>().has_code(codes::UNAUTHORIZED));
        assert!(forbidden::<()>().has_code(codes::FORBIDDEN));
    }

    #[test]
    fn test_failure_message_is_error_typed() {
        let outcome = failure::<()>("rejected");
        assert_eq!(outcome.messages().len(), 1);
        assert_eq!(outcome.messages()[0].kind, MessageType::Error);
        assert_eq!(outcome.messages()[0].content, "rejected");
    }

    #[test]
    fn test_cancelled_with_keeps_snapshot() {
        let outcome = cancelled_with(vec![1, 2, 3], "interrupted");
        assert!(outcome.is_cancelled());
        assert!(outcome.is_unsuccessful());
        assert_eq!(outcome.value(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_empty_validation_failure_is_success() {
        let outcome = validation_failure(Vec::new());
        assert!(outcome.is_success());
        assert!(outcome.code().is_none());
        assert!(outcome.messages().is_empty());
    }

    #[test]
    fn test_validation_failure_defaults_code_and_is_overridable() {
        let issue = ValidationIssue::for_field("email", "must not be empty");
        let outcome = validation_failure(vec![issue.clone()]);
        assert!(outcome.is_failure());
        assert!(outcome.has_code(codes::VALIDATION_FAILED));

        let custom = validation_failure_with("InputRejected", vec![issue]);
        assert!(custom.has_code("inputrejected"));
    }

    #[test]
    fn test_from_std_result() {
        let ok: Outcome<i32> = Ok::<_, std::io::Error>(3).into();
        assert_eq!(ok.value(), Some(&3));

        let err: Outcome<i32> = Err::<i32, _>("disk on fire".to_string()).into();
        assert!(err.is_failure());
        assert_eq!(err.messages()[0].content, "disk on fire");
    }
}
