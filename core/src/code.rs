//! Domain result codes.
//!
//! A [`ResultCode`] is a secondary, string-valued classifier carried next to
//! the [`Status`](crate::Status). Where `Status` answers "did it work",
//! the code answers "what kind of outcome was this" in domain terms
//! (`"Created"`, `"NotFound"`, `"ValidationFailed"`). Comparison is
//! ASCII-case-insensitive throughout.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Well-known result code values used by the factory constructors.
///
/// These are plain strings rather than an enum so applications can mint their
/// own codes alongside the built-in ones.
pub mod codes {
    /// A new resource was created.
    pub const CREATED: &str = "Created";
    /// An existing resource was updated.
    pub const UPDATED: &str = "Updated";
    /// A resource was deleted.
    pub const DELETED: &str = "Deleted";
    /// The requested resource does not exist.
    pub const NOT_FOUND: &str = "NotFound";
    /// The caller is not authenticated.
    pub const UNAUTHORIZED: &str = "Unauthorized";
    /// The caller is authenticated but not allowed.
    pub const FORBIDDEN: &str = "Forbidden";
    /// Input validation rejected the request.
    pub const VALIDATION_FAILED: &str = "ValidationFailed";
}

/// An opaque, case-insensitive domain classifier for an outcome.
///
/// The original casing is preserved for display and serialization; equality,
/// hashing and [`matches`](ResultCode::matches) ignore ASCII case.
///
/// # Example
///
/// ```
/// use outcome_core::{codes, ResultCode};
///
/// let code = ResultCode::new(codes::NOT_FOUND);
/// assert!(code.matches("notfound"));
/// assert_eq!(code, ResultCode::new("NOTFOUND"));
/// assert_eq!(code.as_str(), "NotFound");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultCode(String);

impl ResultCode {
    /// Wraps a code string, preserving its casing.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The code text with its original casing.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ASCII-case-insensitive comparison against a raw string.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl PartialEq for ResultCode {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for ResultCode {}

impl Hash for ResultCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with the case-insensitive Eq impl.
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResultCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for ResultCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(code: &ResultCode) -> u64 {
        let mut hasher = DefaultHasher::new();
        code.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equality_ignores_case() {
        assert_eq!(ResultCode::new("NotFound"), ResultCode::new("NOTFOUND"));
        assert_ne!(ResultCode::new("NotFound"), ResultCode::new("Created"));
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        let a = ResultCode::new("ValidationFailed");
        let b = ResultCode::new("validationfailed");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_original_casing_survives() {
        let code = ResultCode::new(codes::CREATED);
        assert_eq!(code.to_string(), "Created");
        assert_eq!(
            serde_json::to_string(&code).unwrap(),
            "\"Created\"",
        );
    }
}
