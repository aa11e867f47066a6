//! Datatype validators
//!
//! Runtime kind checks over dynamically bound arguments. The statically
//! typed API makes these checks redundant at compile time; they exist for
//! the `serde_json::Value` boundary where an argument's kind is data.

use serde_json::Value;

use crate::foundation::{Error, MessageArgs, MessageSpec, Validate};
use crate::json::{ValueKind, kind_of};
use crate::macros::message_options;

/// Template for kind-mismatch failures.
pub const DATATYPE_VALIDATOR_ERR_MSG: &str =
    "${arg_name} must be of type ${arg_type}, got ${arg_value_type} instead.";

// ============================================================================
// KIND VALIDATOR
// ============================================================================

/// Validates that a value has the expected runtime kind.
///
/// `ValueKind::Number` accepts both `Int` and `Float` — the wider kind
/// admits its members, matching subclass-instances-pass semantics.
///
/// ```
/// use func_validator::json::ValueKind;
/// use func_validator::validators::must_be_a;
/// use func_validator::foundation::Validate;
/// use serde_json::json;
///
/// let v = must_be_a(ValueKind::Number);
/// assert!(v.validate(&json!(3), "n").is_ok());
/// assert!(v.validate(&json!(3.5), "n").is_ok());
/// assert!(v.validate(&json!("3"), "n").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MustBeA {
    expected: ValueKind,
    msg: MessageSpec,
}

impl MustBeA {
    message_options!(DATATYPE_VALIDATOR_ERR_MSG);

    /// Creates the validator for an expected kind.
    #[must_use]
    pub fn new(expected: ValueKind) -> Self {
        Self {
            expected,
            msg: MessageSpec::new(),
        }
    }

    /// The expected kind.
    #[must_use]
    pub fn expected(&self) -> ValueKind {
        self.expected
    }
}

impl Validate for MustBeA {
    type Input = Value;

    fn validate(&self, value: &Self::Input, name: &str) -> Result<(), Error> {
        let actual = kind_of(value);
        if self.expected.matches(actual) {
            return Ok(());
        }
        let required = MessageArgs::new()
            .with("arg_name", name)
            .with("arg_value", value)
            .with("arg_type", self.expected)
            .with("arg_value_type", actual);
        Err(self
            .msg
            .fail("must_be_a", DATATYPE_VALIDATOR_ERR_MSG, required)
            .into())
    }
}

/// Creates a [`MustBeA`] for an expected kind.
#[must_use]
pub fn must_be_a(expected: ValueKind) -> MustBeA {
    MustBeA::new(expected)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exact_kinds() {
        assert!(must_be_a(ValueKind::String).validate(&json!("x"), "s").is_ok());
        assert!(must_be_a(ValueKind::String).validate(&json!(1), "s").is_err());
        assert!(must_be_a(ValueKind::Array).validate(&json!([1]), "a").is_ok());
        assert!(must_be_a(ValueKind::Object).validate(&json!({}), "o").is_ok());
        assert!(must_be_a(ValueKind::Null).validate(&json!(null), "n").is_ok());
    }

    #[test]
    fn number_family_admits_int_and_float() {
        let v = must_be_a(ValueKind::Number);
        assert!(v.validate(&json!(1), "n").is_ok());
        assert!(v.validate(&json!(1.5), "n").is_ok());
        assert!(v.validate(&json!(true), "n").is_err());
    }

    #[test]
    fn int_does_not_admit_float() {
        let v = must_be_a(ValueKind::Int);
        assert!(v.validate(&json!(1), "n").is_ok());
        assert!(v.validate(&json!(1.5), "n").is_err());
    }

    #[test]
    fn message_names_both_kinds() {
        let err = must_be_a(ValueKind::String).validate(&json!(42), "title").unwrap_err();
        assert_eq!(
            err.as_validation().unwrap().message,
            "title must be of type string, got int instead."
        );
    }
}
