//! Axum web framework integration for outcome values.
//!
//! This crate closes the gap between the pure outcome algebra and an axum
//! application: handlers produce [`Outcome`](outcome_core::Outcome) values,
//! and this crate turns them into HTTP responses through the shaping rules
//! of `outcome-http`.
//!
//! # Request Flow
//!
//! 1. **HTTP request** arrives at an axum handler
//! 2. **Domain logic** produces an `Outcome<T>` (factories + combinators)
//! 3. **Respond** via [`OutcomeResponse`], [`respond`] or
//!    [`OutcomeResponseExt::into_response_with`]
//! 4. **Status** comes from the options' resolver and code overrides;
//!    **failures** are optionally shaped as RFC 7807 problem details
//! 5. The [`middleware::error_boundary_layer`] catches anything the
//!    handlers let escape and folds it into the same response path
//!
//! # Example
//!
//! ```ignore
//! use axum::{extract::Path, routing::get, Router};
//! use outcome_core::factory;
//! use outcome_http::ResponseOptions;
//! use outcome_web::{middleware::error_boundary_layer, OutcomeResponse};
//!
//! async fn fetch_widget(Path(id): Path<u64>) -> OutcomeResponse<Widget> {
//!     match load(id) {
//!         Some(widget) => factory::success(widget).into(),
//!         None => factory::not_found().into(),
//!     }
//! }
//!
//! let app = Router::new()
//!     .route("/widgets/:id", get(fetch_widget))
//!     .layer(error_boundary_layer(
//!         ResponseOptions::new().with_problem_details(true),
//!     ));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod middleware;
pub mod respond;

// Re-export key types for convenience
pub use middleware::{ErrorBoundary, ErrorBoundaryLayer, error_boundary_layer};
pub use outcome_http::ResponseOptions;
pub use respond::{OutcomeResponse, OutcomeResponseExt, respond};
