//! Response shaping configuration.
//!
//! [`ResponseOptions`] is an explicitly constructed, immutable configuration
//! value. There is no process-wide default object: every adapter call site
//! receives its options by reference, so hosting code decides the lifecycle
//! (usually one instance built at startup and shared via application state).
//!
//! # Example
//!
//! ```
//! use outcome_http::ResponseOptions;
//!
//! let options = ResponseOptions::new()
//!     .with_problem_details(true)
//!     .with_validation_problem_details(true);
//!
//! assert!(options.use_problem_details);
//! ```

use crate::problem::{ProblemDetails, ValidationProblemDetails};
use http::StatusCode;
use outcome_core::{Message, Outcome, ResultCode, Status, codes};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Maps an outcome [`Status`] to the HTTP status code it is served with.
pub type StatusResolver = fn(Status) -> StatusCode;

/// Mutation hook applied to a [`ProblemDetails`] before serialization.
pub type ProblemBuilder = Arc<dyn Fn(&mut ProblemDetails) + Send + Sync>;

/// Mutation hook applied to a [`ValidationProblemDetails`] before
/// serialization.
pub type ValidationBuilder = Arc<dyn Fn(&mut ValidationProblemDetails) + Send + Sync>;

/// Derives the `errors` map of a validation problem from the messages.
pub type ValidationMapper = Arc<dyn Fn(&[Message]) -> BTreeMap<String, Vec<String>> + Send + Sync>;

/// Configuration consumed by the response adapters.
#[derive(Clone)]
pub struct ResponseOptions {
    /// Serialize the whole outcome envelope instead of just the value (on
    /// success) or the problem payload (on failure).
    pub include_full_payload: bool,
    /// Wrap failures in an RFC 7807 [`ProblemDetails`] payload.
    pub use_problem_details: bool,
    /// Wrap validation failures in a [`ValidationProblemDetails`] payload
    /// (takes precedence over `use_problem_details` when field errors are
    /// derivable).
    pub use_validation_problem_details: bool,
    status_resolver: StatusResolver,
    code_overrides: Vec<(ResultCode, StatusCode)>,
    problem_builder: Option<ProblemBuilder>,
    validation_builder: Option<ValidationBuilder>,
    validation_mapper: Option<ValidationMapper>,
}

/// Default status resolver: Completed→200, Failed→400, Error→500,
/// Cancelled→409.
#[must_use]
pub fn default_status_resolver(status: Status) -> StatusCode {
    match status {
        Status::Completed => StatusCode::OK,
        Status::Failed => StatusCode::BAD_REQUEST,
        Status::Error => StatusCode::INTERNAL_SERVER_ERROR,
        Status::Cancelled => StatusCode::CONFLICT,
    }
}

fn default_code_overrides() -> Vec<(ResultCode, StatusCode)> {
    vec![
        (codes::CREATED.into(), StatusCode::CREATED),
        (codes::UPDATED.into(), StatusCode::OK),
        (codes::DELETED.into(), StatusCode::NO_CONTENT),
        (codes::NOT_FOUND.into(), StatusCode::NOT_FOUND),
        (codes::UNAUTHORIZED.into(), StatusCode::UNAUTHORIZED),
        (codes::FORBIDDEN.into(), StatusCode::FORBIDDEN),
        (codes::VALIDATION_FAILED.into(), StatusCode::UNPROCESSABLE_ENTITY),
    ]
}

/// Default validation mapper: groups the attached
/// [`ValidationIssue`](outcome_core::ValidationIssue) metadata by field name.
/// Issues naming several fields contribute to each; issues naming none group
/// under the empty key.
#[must_use]
pub fn default_validation_mapper(messages: &[Message]) -> BTreeMap<String, Vec<String>> {
    // Reuse the metadata scan by wrapping the messages in a throwaway outcome.
    let carrier: Outcome = Outcome::new(Status::Failed).with_messages(messages.iter().cloned());
    let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for issue in carrier.validation_issues() {
        if issue.fields.is_empty() {
            errors.entry(String::new()).or_default().push(issue.message);
        } else {
            for field in &issue.fields {
                errors
                    .entry(field.clone())
                    .or_default()
                    .push(issue.message.clone());
            }
        }
    }
    errors
}

impl ResponseOptions {
    /// Baseline options: plain payloads, default resolver and code
    /// overrides, no builder hooks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            include_full_payload: false,
            use_problem_details: false,
            use_validation_problem_details: false,
            status_resolver: default_status_resolver,
            code_overrides: default_code_overrides(),
            problem_builder: None,
            validation_builder: None,
            validation_mapper: None,
        }
    }

    /// Sets [`include_full_payload`](Self::include_full_payload).
    #[must_use]
    pub const fn with_full_payload(mut self, include: bool) -> Self {
        self.include_full_payload = include;
        self
    }

    /// Sets [`use_problem_details`](Self::use_problem_details).
    #[must_use]
    pub const fn with_problem_details(mut self, enabled: bool) -> Self {
        self.use_problem_details = enabled;
        self
    }

    /// Sets
    /// [`use_validation_problem_details`](Self::use_validation_problem_details).
    #[must_use]
    pub const fn with_validation_problem_details(mut self, enabled: bool) -> Self {
        self.use_validation_problem_details = enabled;
        self
    }

    /// Replaces the status resolver.
    #[must_use]
    pub const fn with_status_resolver(mut self, resolver: StatusResolver) -> Self {
        self.status_resolver = resolver;
        self
    }

    /// Replaces the code→status override table.
    #[must_use]
    pub fn with_code_overrides(
        mut self,
        overrides: impl IntoIterator<Item = (ResultCode, StatusCode)>,
    ) -> Self {
        self.code_overrides = overrides.into_iter().collect();
        self
    }

    /// Installs a hook mutating every emitted [`ProblemDetails`].
    #[must_use]
    pub fn with_problem_builder(
        mut self,
        builder: impl Fn(&mut ProblemDetails) + Send + Sync + 'static,
    ) -> Self {
        self.problem_builder = Some(Arc::new(builder));
        self
    }

    /// Installs a hook mutating every emitted [`ValidationProblemDetails`].
    #[must_use]
    pub fn with_validation_builder(
        mut self,
        builder: impl Fn(&mut ValidationProblemDetails) + Send + Sync + 'static,
    ) -> Self {
        self.validation_builder = Some(Arc::new(builder));
        self
    }

    /// Replaces the validation-error mapper.
    #[must_use]
    pub fn with_validation_mapper(
        mut self,
        mapper: impl Fn(&[Message]) -> BTreeMap<String, Vec<String>> + Send + Sync + 'static,
    ) -> Self {
        self.validation_mapper = Some(Arc::new(mapper));
        self
    }

    /// The HTTP status for an outcome: the resolver's answer for the status,
    /// overridden by the code table when the outcome carries a matching code.
    #[must_use]
    pub fn resolve_status<T>(&self, outcome: &Outcome<T>) -> StatusCode {
        let resolved = (self.status_resolver)(outcome.status());
        let Some(code) = outcome.code() else {
            return resolved;
        };
        self.code_overrides
            .iter()
            .find(|(known, _)| known == code)
            .map_or(resolved, |(_, status)| *status)
    }

    /// Derives the field→errors map for a validation payload.
    #[must_use]
    pub fn map_validation_errors(&self, messages: &[Message]) -> BTreeMap<String, Vec<String>> {
        match &self.validation_mapper {
            Some(mapper) => mapper(messages),
            None => default_validation_mapper(messages),
        }
    }

    /// Applies the problem hook, if installed.
    pub fn build_problem(&self, problem: &mut ProblemDetails) {
        if let Some(builder) = &self.problem_builder {
            builder(problem);
        }
    }

    /// Applies the validation hook, if installed.
    pub fn build_validation(&self, problem: &mut ValidationProblemDetails) {
        if let Some(builder) = &self.validation_builder {
            builder(problem);
        }
    }
}

impl Default for ResponseOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ResponseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseOptions")
            .field("include_full_payload", &self.include_full_payload)
            .field("use_problem_details", &self.use_problem_details)
            .field(
                "use_validation_problem_details",
                &self.use_validation_problem_details,
            )
            .field("code_overrides", &self.code_overrides)
            .field("problem_builder", &self.problem_builder.is_some())
            .field("validation_builder", &self.validation_builder.is_some())
            .field("validation_mapper", &self.validation_mapper.is_some())
            .finish_non_exhaustive()
    }
}
