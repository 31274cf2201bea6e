//! Transformation rules over outcomes.
//!
//! These are the transition rules of the algebra: branch ([`Outcome::fold`],
//! [`Outcome::resolve`], [`Outcome::visit`]), transform ([`Outcome::map`],
//! [`Outcome::and_then`]), and validate/observe/fall back
//! ([`Outcome::ensure`], [`Outcome::tap`], [`Outcome::recover`]).
//!
//! The propagation policy throughout: the first unsuccessful state wins and
//! its messages are carried forward, unless explicitly recovered or replaced.
//!
//! # Status collapse on transform
//!
//! `map` and `and_then` re-wrap any non-success as [`Status::Failed`], even
//! when the input was `Error` or `Cancelled`. The original status distinction
//! is lost on transformation. This mirrors the behavior this library is
//! modeled on and is pinned by the tests below; do not "fix" it without
//! revisiting those tests.

use crate::message::Message;
use crate::outcome::{Messages, Outcome};
use crate::status::Status;

impl<T> Outcome<T> {
    /// Three-way branch over the outcome.
    ///
    /// The unsuccessful check always runs first and receives the messages;
    /// among successful outcomes, the value branch runs when a value is
    /// present and the empty branch otherwise.
    ///
    /// The return type is generic, so branch arms may themselves return an
    /// [`Outcome`] to continue an outcome-to-outcome pipeline:
    ///
    /// ```
    /// use outcome_core::{factory, Outcome};
    ///
    /// let next: Outcome<String> = factory::success(21).fold(
    ///     |messages| Outcome::new(outcome_core::Status::Failed).with_messages(messages),
    ///     || factory::failure("nothing to double"),
    ///     |n| factory::success((n * 2).to_string()),
    /// );
    ///
    /// assert_eq!(next.value(), Some(&"42".to_string()));
    /// ```
    pub fn fold<R>(
        self,
        on_unsuccessful: impl FnOnce(Messages) -> R,
        on_empty: impl FnOnce() -> R,
        on_value: impl FnOnce(T) -> R,
    ) -> R {
        if self.is_unsuccessful() {
            return on_unsuccessful(self.messages);
        }
        match self.value {
            Some(value) => on_value(value),
            None => on_empty(),
        }
    }

    /// Two-way branch: unsuccessful (with messages) versus success.
    ///
    /// This is the branch shape of the untyped outcome; any carried value is
    /// ignored.
    pub fn resolve<R>(
        self,
        on_unsuccessful: impl FnOnce(Messages) -> R,
        on_success: impl FnOnce() -> R,
    ) -> R {
        if self.is_unsuccessful() {
            on_unsuccessful(self.messages)
        } else {
            on_success()
        }
    }

    /// Side-effecting, by-reference counterpart of [`fold`](Self::fold).
    ///
    /// Applies the same three-way dispatch rule without consuming the
    /// outcome.
    pub fn visit(
        &self,
        on_unsuccessful: impl FnOnce(&[Message]),
        on_empty: impl FnOnce(),
        on_value: impl FnOnce(&T),
    ) {
        if self.is_unsuccessful() {
            on_unsuccessful(&self.messages);
            return;
        }
        match &self.value {
            Some(value) => on_value(value),
            None => on_empty(),
        }
    }

    /// Transforms the value of a successful outcome.
    ///
    /// On success, returns a fresh success whose value is the mapped value
    /// (the function runs only when a value is present). On non-success,
    /// returns a `Failed` outcome carrying the original messages verbatim
    /// (see the module notes on status collapse). The mapping function is never
    /// invoked for unsuccessful outcomes.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        if self.is_unsuccessful() {
            return Outcome {
                status: Status::Failed,
                code: None,
                messages: self.messages,
                value: None,
            };
        }
        Outcome {
            status: Status::Completed,
            code: None,
            messages: Messages::new(),
            value: self.value.map(f),
        }
    }

    /// Chains an outcome-returning continuation.
    ///
    /// Same failure propagation as [`map`](Self::map); on success with a
    /// value the continuation's outcome is returned directly, and on success
    /// without a value an empty success is returned without invoking the
    /// continuation.
    #[must_use]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        if self.is_unsuccessful() {
            return Outcome {
                status: Status::Failed,
                code: None,
                messages: self.messages,
                value: None,
            };
        }
        match self.value {
            Some(value) => f(value),
            None => Outcome {
                status: Status::Completed,
                code: None,
                messages: Messages::new(),
                value: None,
            },
        }
    }

    /// Validates a successful outcome against a predicate.
    ///
    /// Already-unsuccessful outcomes pass through unchanged. On success the
    /// predicate sees the value (as `Option<&T>`, since value presence is
    /// orthogonal to success): `true` keeps the original outcome intact,
    /// `false` produces a failed outcome carrying exactly one Error message
    /// with the given text, discarding the original value, code and messages.
    #[must_use]
    pub fn ensure(
        self,
        predicate: impl FnOnce(Option<&T>) -> bool,
        message: impl Into<String>,
    ) -> Self {
        if self.is_unsuccessful() {
            return self;
        }
        if predicate(self.value.as_ref()) {
            self
        } else {
            let mut messages = Messages::new();
            messages.push(Message::error(message));
            Self {
                status: Status::Failed,
                code: None,
                messages,
                value: None,
            }
        }
    }

    /// Runs an action for its side effect when the outcome is successful.
    ///
    /// The original outcome is always returned unchanged; on failure the
    /// action is skipped.
    #[must_use]
    pub fn tap(self, action: impl FnOnce(Option<&T>)) -> Self {
        if self.is_success() {
            action(self.value.as_ref());
        }
        self
    }

    /// Replaces a failed outcome with a fallback value.
    ///
    /// Successful outcomes pass through unchanged. On any non-success the
    /// recovery function sees the failure messages and its value becomes a
    /// brand-new success with zero messages: the original failure messages
    /// are dropped. Callers that need an audit trail can re-attach messages
    /// with [`with_messages`](Self::with_messages) afterwards.
    #[must_use]
    pub fn recover(self, recovery: impl FnOnce(&[Message]) -> T) -> Self {
        if self.is_success() {
            return self;
        }
        let value = recovery(&self.messages);
        Self {
            status: Status::Completed,
            code: None,
            messages: Messages::new(),
            value: Some(value),
        }
    }
}
