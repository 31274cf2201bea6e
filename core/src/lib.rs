//! # Outcome Core
//!
//! An immutable, discriminated outcome value ([`Outcome`] / `Outcome<T>`)
//! and its combinator algebra.
//!
//! ## Core Concepts
//!
//! - **[`Status`]**: four-valued outcome tag (Completed, Failed, Error,
//!   Cancelled). The only successful status is `Completed`.
//! - **[`Message`]**: a diagnostic entry (severity + text + ordered,
//!   case-insensitive [`Metadata`]).
//! - **[`ResultCode`]**: an optional, case-insensitive domain classifier
//!   independent of status (`"Created"`, `"NotFound"`, ...).
//! - **[`Outcome`]**: status + optional code + messages (+ optional value
//!   for `Outcome<T>`). Value presence is orthogonal to status.
//! - **[`factory`]**: constructors for the common status/code shapes.
//! - **Combinators**: `fold`/`resolve`/`visit` to branch, `map`/`and_then`
//!   to transform, `ensure`/`tap`/`recover` to validate, observe and fall
//!   back, and `with_*`/`without_*` to derive adjusted copies.
//!
//! ## Design
//!
//! Everything here is a plain immutable value: no I/O, no shared state, no
//! panics, no exceptions. Operations that can "fail" express it as a
//! returned outcome with `Status::Failed` and an explanatory message, never
//! by unwinding. Concurrent callers may share one `Outcome` freely since
//! nothing ever mutates it; every helper returns a new instance.
//!
//! ## Example
//!
//! ```
//! use outcome_core::factory;
//!
//! let shipped = factory::success(5)
//!     .ensure(|v| v.is_some_and(|n| *n > 0), "quantity must be positive")
//!     .map(|n| n * 2)
//!     .tap(|n| println!("shipping {n:?}"));
//!
//! assert!(shipped.is_success());
//! assert_eq!(shipped.value(), Some(&10));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod code;
mod combinators;
pub mod factory;
pub mod message;
pub mod outcome;
pub mod status;
pub mod validation;

// Re-export the working surface at the crate root
pub use code::{ResultCode, codes};
pub use message::{Message, MessageType, Metadata};
pub use outcome::{Messages, Outcome};
pub use status::Status;
pub use validation::ValidationIssue;

// Re-export smallvec for constructing message lists without an extra dependency
pub use smallvec::{SmallVec, smallvec};
