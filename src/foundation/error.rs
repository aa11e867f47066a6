//! Error types for validation failures
//!
//! Two disjoint error categories live here:
//!
//! - [`ValidationError`] — expected, data-driven failures: the value broke
//!   a business rule. Carries the rendered, human-readable message.
//! - [`ConfigError`] — programmer mistakes: an unresolvable dependency, a
//!   malformed match mode, an impossible comparison. Never raised by valid
//!   data against a well-configured validator.
//!
//! [`Error`] is the umbrella returned by every validator invocation, so
//! callers can treat only `Error::Validation` as a normal per-argument
//! failure and let configuration bugs surface loudly.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::template::MessageArgs;
use crate::json::ValueKind;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A data-driven validation failure with a rendered message.
///
/// Uses `Cow<'static, str>` for zero-allocation error codes (the common
/// case) and keeps the ordered message params around for programmatic
/// inspection and structured reporting.
///
/// # Examples
///
/// ```rust,ignore
/// use func_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("must_be_positive", "age: -3 must be > 0.");
/// assert_eq!(error.code, "must_be_positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "must_be_greater_than", "must_match_regex"
    pub code: Cow<'static, str>,

    /// The fully rendered, human-readable message.
    pub message: String,

    /// Parameters the message was rendered from, in substitution order.
    ///
    /// Example: `[("arg_name", "age"), ("arg_value", "-3"), ("to", "0")]`
    pub params: MessageArgs,
}

impl ValidationError {
    /// Creates a new validation error with a code and an already-rendered
    /// message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: MessageArgs::new(),
        }
    }

    /// Attaches the params the message was rendered from.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_params(mut self, params: MessageArgs) -> Self {
        self.params = params;
        self
    }

    /// Looks up a rendering parameter by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key)
    }

    /// Converts the error to a JSON structure for reporting layers.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.clone())))
            .collect();

        serde_json::json!({
            "code": self.code,
            "message": self.message,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// A validator configuration or usage mistake.
///
/// These are programmer errors, kept in a separate category from
/// [`ValidationError`] so a broken validator setup can never be mistaken
/// for a normal validation failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A `DependsOn` dependency name resolved neither as a bound argument
    /// nor as a field of the receiver entry.
    #[error("dependency argument '{0}' not found")]
    MissingDependency(String),

    /// Two operands that cannot be ordered against each other.
    #[error("cannot compare {left} with {right}")]
    Incomparable { left: String, right: String },

    /// A range constructed with `min > max`.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: String, max: String },

    /// An unrecognized match-mode name.
    #[error("invalid match mode '{0}', expected one of 'match', 'fullmatch', 'search'")]
    InvalidMatchMode(String),

    /// A regex pattern that failed to compile.
    #[error("invalid regex pattern: {0}")]
    InvalidPattern(String),

    /// A dynamically-bound argument has the wrong JSON kind for the
    /// attached validator.
    #[error("argument has type {actual}, validator expects {expected}")]
    TypeMismatch {
        expected: &'static str,
        actual: ValueKind,
    },
}

impl From<regex::Error> for ConfigError {
    fn from(error: regex::Error) -> Self {
        ConfigError::InvalidPattern(error.to_string())
    }
}

// ============================================================================
// UMBRELLA ERROR
// ============================================================================

/// Everything a validator invocation can produce.
///
/// The call-binding layer aborts a call on either variant, but only
/// `Validation` should be reported as a user-facing argument failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The value violated the configured rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The validator itself is misconfigured or misused.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Returns true for a data-driven validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Returns true for a configuration/usage error.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Borrows the inner validation error, if that is what this is.
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(e) => Some(e),
            Error::Config(_) => None,
        }
    }
}

/// A validation result using the crate-level [`Error`].
pub type ValidationResult = Result<(), Error>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
    }

    #[test]
    fn display_is_the_rendered_message() {
        let error = ValidationError::new("must_be_positive", "age: -3 must be > 0.");
        assert_eq!(error.to_string(), "age: -3 must be > 0.");
    }

    #[test]
    fn params_lookup() {
        let mut params = MessageArgs::new();
        params.push("arg_name", "age");
        params.push("to", "0");
        let error = ValidationError::new("cmp", "msg").with_params(params);

        assert_eq!(error.param("arg_name"), Some("age"));
        assert_eq!(error.param("to"), Some("0"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn zero_alloc_static_code() {
        let error = ValidationError::new("must_be_equal", "x");
        assert!(matches!(error.code, Cow::Borrowed(_)));
    }

    #[test]
    fn umbrella_categories_are_disjoint() {
        let invalid: Error = ValidationError::new("c", "m").into();
        let config: Error = ConfigError::MissingDependency("b".into()).into();

        assert!(invalid.is_validation());
        assert!(!invalid.is_config());
        assert!(config.is_config());
        assert!(config.as_validation().is_none());
    }

    #[test]
    fn to_json_value_carries_code_and_params() {
        let mut params = MessageArgs::new();
        params.push("to", "5");
        let error = ValidationError::new("must_be_equal", "x: 4 must be == 5.").with_params(params);

        let json = error.to_json_value();
        assert_eq!(json["code"], "must_be_equal");
        assert_eq!(json["params"]["to"], "5");
    }
}
