//! Rendering outcomes into plain HTTP responses.
//!
//! This is the framework-neutral half of the adapter surface: pure functions
//! from an outcome plus [`ResponseOptions`] to an `http::Response<String>`,
//! usable from any host that speaks the `http` crate's types. The axum
//! adapter builds on these.
//!
//! Payload selection:
//!
//! - success → the full outcome envelope when
//!   [`include_full_payload`](ResponseOptions::include_full_payload) is set,
//!   otherwise the value as JSON (`null` when absent);
//! - failure → a [`ValidationProblemDetails`] when enabled and field errors
//!   are derivable, else a [`ProblemDetails`] when enabled, else the
//!   envelope or the bare message list.

use crate::options::ResponseOptions;
use crate::problem::{ProblemDetails, ValidationProblemDetails};
use http::{Response, StatusCode, header};
use outcome_core::Outcome;
use serde::Serialize;
use thiserror::Error;

/// Content type for RFC 7807 payloads.
pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Content type for plain JSON payloads.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Error types for response rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The payload could not be serialized to JSON.
    #[error("Failed to serialize response payload: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The HTTP response could not be assembled.
    #[error("Failed to build HTTP response: {0}")]
    Http(#[from] http::Error),
}

/// Renders an outcome into an HTTP response.
///
/// The status comes from the options' resolver and code overrides; the body
/// follows the payload selection rules in the [module docs](self).
///
/// # Errors
///
/// Returns [`RenderError`] when the payload cannot be serialized or the
/// response cannot be assembled.
pub fn render<T: Serialize>(
    outcome: &Outcome<T>,
    options: &ResponseOptions,
) -> Result<Response<String>, RenderError> {
    render_with_instance(outcome, options, None)
}

/// [`render`], additionally stamping the problem `instance` member with a
/// URI identifying this occurrence (used by the error-boundary middleware).
///
/// # Errors
///
/// Returns [`RenderError`] when the payload cannot be serialized or the
/// response cannot be assembled.
pub fn render_with_instance<T: Serialize>(
    outcome: &Outcome<T>,
    options: &ResponseOptions,
    instance: Option<&str>,
) -> Result<Response<String>, RenderError> {
    let status = options.resolve_status(outcome);

    // 204 must not carry a payload.
    if status == StatusCode::NO_CONTENT {
        return Ok(Response::builder().status(status).body(String::new())?);
    }

    let (body, content_type) = payload(outcome, status, options, instance)?;
    Ok(Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .body(body)?)
}

fn payload<T: Serialize>(
    outcome: &Outcome<T>,
    status: StatusCode,
    options: &ResponseOptions,
    instance: Option<&str>,
) -> Result<(String, &'static str), RenderError> {
    if outcome.is_success() {
        let body = if options.include_full_payload {
            serde_json::to_string(outcome)?
        } else {
            serde_json::to_string(&outcome.value())?
        };
        return Ok((body, JSON_CONTENT_TYPE));
    }

    if options.use_validation_problem_details {
        let errors = options.map_validation_errors(outcome.messages());
        if !errors.is_empty() {
            let mut problem = ValidationProblemDetails::from_outcome(outcome, status, errors);
            problem.problem.instance = instance.map(str::to_owned);
            options.build_validation(&mut problem);
            return Ok((serde_json::to_string(&problem)?, PROBLEM_CONTENT_TYPE));
        }
    }

    if options.use_problem_details {
        let mut problem = ProblemDetails::from_outcome(outcome, status);
        problem.instance = instance.map(str::to_owned);
        options.build_problem(&mut problem);
        return Ok((serde_json::to_string(&problem)?, PROBLEM_CONTENT_TYPE));
    }

    let body = if options.include_full_payload {
        serde_json::to_string(outcome)?
    } else {
        serde_json::to_string(outcome.messages())?
    };
    Ok((body, JSON_CONTENT_TYPE))
}
