//! Framework-neutral HTTP shaping for outcome values.
//!
//! This crate turns an [`Outcome`](outcome_core::Outcome) into a plain
//! `http::Response<String>`: status selection via a configurable resolver
//! plus code overrides, and failure payloads optionally shaped as RFC 7807
//! problem details. It has no opinion about the hosting framework: anything
//! that speaks the `http` crate's types can serve the result. The
//! `outcome-web` crate layers axum-specific conveniences on top.
//!
//! # Example
//!
//! ```
//! use outcome_core::factory;
//! use outcome_http::{render, ResponseOptions};
//!
//! let options = ResponseOptions::new().with_problem_details(true);
//! let response = render(&factory::not_found::<String>(), &options)?;
//!
//! assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
//! # Ok::<(), outcome_http::RenderError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod options;
pub mod problem;
pub mod render;

// Re-export key types for convenience
pub use options::{
    ProblemBuilder, ResponseOptions, StatusResolver, ValidationBuilder, ValidationMapper,
    default_status_resolver, default_validation_mapper,
};
pub use problem::{MessageDto, ProblemDetails, ValidationProblemDetails};
pub use render::{
    JSON_CONTENT_TYPE, PROBLEM_CONTENT_TYPE, RenderError, render, render_with_instance,
};
