//! Turning outcomes into axum responses.
//!
//! Three entry points, all over the same rendering path:
//!
//! - [`respond`]: free function taking explicit [`ResponseOptions`];
//! - [`OutcomeResponseExt::into_response_with`]: the same as a method;
//! - [`OutcomeResponse`]: a wrapper implementing `IntoResponse` with
//!   [`ResponseOptions::default`], for handlers that are happy with the
//!   baseline shaping.
//!
//! Rendering failures never panic and never leak: they degrade to a bare
//! 500 after logging the cause.
//!
//! # Example
//!
//! ```ignore
//! use axum::{routing::get, Router};
//! use outcome_core::factory;
//! use outcome_web::OutcomeResponse;
//!
//! async fn fetch_widget() -> OutcomeResponse<String> {
//!     OutcomeResponse(factory::success("widget".to_owned()))
//! }
//!
//! let app: Router = Router::new().route("/widget", get(fetch_widget));
//! ```

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use outcome_core::Outcome;
use outcome_http::{ResponseOptions, render};
use serde::Serialize;

/// Renders an outcome into an axum [`Response`] using the given options.
///
/// Server-error responses are logged before being emitted; a payload that
/// fails to serialize degrades to an empty 500 response.
pub fn respond<T: Serialize>(outcome: &Outcome<T>, options: &ResponseOptions) -> Response {
    match render(outcome, options) {
        Ok(response) => {
            if response.status().is_server_error() {
                tracing::error!(
                    status = %response.status(),
                    svc_status = %outcome.status(),
                    "Server error outcome"
                );
            }
            response.map(Body::from)
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to render outcome response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Extension methods for responding with an outcome.
pub trait OutcomeResponseExt {
    /// Renders the outcome with explicit options.
    fn into_response_with(self, options: &ResponseOptions) -> Response;
}

impl<T: Serialize> OutcomeResponseExt for Outcome<T> {
    fn into_response_with(self, options: &ResponseOptions) -> Response {
        respond(&self, options)
    }
}

/// Wrapper making an outcome an axum response with the default options.
///
/// Handlers can return this directly, analogous to `axum::Json`.
#[derive(Clone, Debug)]
pub struct OutcomeResponse<T = ()>(pub Outcome<T>);

impl<T: Serialize> IntoResponse for OutcomeResponse<T> {
    fn into_response(self) -> Response {
        respond(&self.0, &ResponseOptions::default())
    }
}

impl<T> From<Outcome<T>> for OutcomeResponse<T> {
    fn from(outcome: Outcome<T>) -> Self {
        Self(outcome)
    }
}
