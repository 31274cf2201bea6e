//! Error-boundary middleware.
//!
//! The combinator algebra never throws; this layer is the single outermost
//! place where an escaped service error is caught and folded back into the
//! uniform response path. A caught error becomes an Error-status outcome
//! rendered through the same [`ResponseOptions`] as every other response,
//! with a generated error id stamped into the problem `instance` member and
//! the log record so the two can be matched up later.
//!
//! The cause itself is logged, never emitted to the client.
//!
//! # Example
//!
//! ```ignore
//! use axum::Router;
//! use outcome_http::ResponseOptions;
//! use outcome_web::middleware::error_boundary_layer;
//!
//! let app = Router::new()
//!     .route("/api/widgets", get(list_widgets))
//!     .layer(error_boundary_layer(
//!         ResponseOptions::new().with_problem_details(true),
//!     ));
//! ```

use axum::body::Body;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use outcome_core::factory;
use outcome_http::{ResponseOptions, render_with_instance};
use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{BoxError, Layer, Service, ServiceExt};
use uuid::Uuid;

/// Create a layer that converts unhandled service errors into Error-status
/// outcome responses shaped by `options`.
#[must_use]
pub fn error_boundary_layer(options: ResponseOptions) -> ErrorBoundaryLayer {
    ErrorBoundaryLayer {
        options: Arc::new(options),
    }
}

/// Layer for the error boundary.
#[derive(Clone, Debug)]
pub struct ErrorBoundaryLayer {
    options: Arc<ResponseOptions>,
}

impl<S> Layer<S> for ErrorBoundaryLayer {
    type Service = ErrorBoundary<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ErrorBoundary {
            inner,
            options: Arc::clone(&self.options),
        }
    }
}

/// Middleware service wrapping a fallible inner service.
#[derive(Clone, Debug)]
pub struct ErrorBoundary<S> {
    inner: S,
    options: Arc<ResponseOptions>,
}

impl<S> Service<Request> for ErrorBoundary<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Error: Into<BoxError>,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // Readiness is driven per request through oneshot on a clone, so the
        // boundary itself is always ready.
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let inner = self.inner.clone();
        let options = Arc::clone(&self.options);

        Box::pin(async move {
            match inner.oneshot(req).await {
                Ok(response) => Ok(response),
                Err(err) => {
                    let err = err.into();
                    let error_id = Uuid::new_v4();
                    tracing::error!(
                        error = %err,
                        error_id = %error_id,
                        "Unhandled service error"
                    );

                    let outcome = factory::error::<()>("An unhandled error occurred");
                    let instance = format!("urn:uuid:{error_id}");
                    let response =
                        match render_with_instance(&outcome, &options, Some(&instance)) {
                            Ok(response) => response.map(Body::from),
                            Err(render_err) => {
                                tracing::error!(
                                    error = %render_err,
                                    "Failed to render error-boundary response"
                                );
                                StatusCode::INTERNAL_SERVER_ERROR.into_response()
                            }
                        };
                    Ok(response)
                }
            }
        })
    }
}
