//! Outcome status classification.
//!
//! [`Status`] is the primary, mutually exclusive classification of an
//! operation's outcome. Exactly one of the four variants applies; every
//! predicate on an outcome derives from it.
//!
//! # Example
//!
//! ```
//! use outcome_core::Status;
//!
//! let status = Status::Completed;
//! assert!(status.is_success());
//! assert_eq!(status.to_string(), "Completed");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of an operation.
///
/// `Completed` is the only successful variant; the other three are distinct
/// flavors of non-success:
///
/// - `Failed`: the operation ran and was rejected (validation, lookup miss,
///   domain rule violation).
/// - `Error`: the operation broke unexpectedly.
/// - `Cancelled`: the operation was abandoned before finishing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// The operation finished successfully.
    Completed,
    /// The operation ran to a rejection.
    Failed,
    /// The operation terminated unexpectedly.
    Error,
    /// The operation was abandoned before finishing.
    Cancelled,
}

impl Status {
    /// Returns `true` for [`Status::Completed`] and `false` for every other
    /// variant.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// The variant name, as used for display and problem-details titles.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Failed => "Failed",
            Self::Error => "Error",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_completed_is_success() {
        assert!(Status::Completed.is_success());
        assert!(!Status::Failed.is_success());
        assert!(!Status::Error.is_success());
        assert!(!Status::Cancelled.is_success());
    }

    #[test]
    fn test_display_matches_variant_name() {
        assert_eq!(Status::Cancelled.to_string(), "Cancelled");
        assert_eq!(Status::Error.name(), "Error");
    }
}
