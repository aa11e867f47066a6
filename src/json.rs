//! `serde_json::Value` integration
//!
//! The call-binding layer hands arguments around as `serde_json::Value`,
//! because a bound-argument map is heterogeneous by nature. This module
//! holds the `Value` corner of the data model:
//!
//! - [`ValueKind`] / [`kind_of`] — the runtime kind lattice used by the
//!   datatype validator;
//! - [`try_cmp`] — ordering between two values, with mixed kinds reported
//!   as a configuration error instead of an arbitrary order;
//! - [`is_truthy`] — the provided/non-empty test behind `MustBeProvided`;
//! - [`FromValue`] — projection from a `Value` onto the input type of a
//!   statically typed validator, so one validator definition serves both
//!   the typed API and the dynamic binding layer.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use serde_json::Value;

use crate::foundation::error::{ConfigError, Error};

// ============================================================================
// VALUE KINDS
// ============================================================================

/// Runtime kind of a JSON value.
///
/// `Int` and `Float` partition `Number`; a datatype check against
/// `Number` accepts either (the subtype-passes rule).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Whether a value of kind `actual` satisfies this expected kind.
    #[must_use]
    pub fn matches(self, actual: ValueKind) -> bool {
        self == actual
            || (self == ValueKind::Number && matches!(actual, ValueKind::Int | ValueKind::Float))
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// The runtime kind of a value.
#[must_use]
pub fn kind_of(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                ValueKind::Int
            } else {
                ValueKind::Float
            }
        }
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

// ============================================================================
// ORDERING
// ============================================================================

/// Orders two values of the same kind.
///
/// Numbers compare as `f64`, strings lexicographically, bools as
/// `false < true`.
///
/// # Errors
///
/// [`ConfigError::Incomparable`] for mixed kinds, for kinds without a
/// natural order (arrays, objects, nulls), and for NaN.
pub fn try_cmp(left: &Value, right: &Value) -> Result<Ordering, ConfigError> {
    let incomparable = || ConfigError::Incomparable {
        left: describe(left),
        right: describe(right),
    };

    match (left, right) {
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().ok_or_else(incomparable)?;
            let b = b.as_f64().ok_or_else(incomparable)?;
            a.partial_cmp(&b).ok_or_else(incomparable)
        }
        (Value::String(a), Value::String(b)) => Ok(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Ok(a.cmp(b)),
        _ => Err(incomparable()),
    }
}

fn describe(value: &Value) -> String {
    format!("{} ({value})", kind_of(value))
}

// ============================================================================
// TRUTHINESS
// ============================================================================

/// Whether a value counts as provided/non-empty.
///
/// Null, `false`, zero, and empty strings/arrays/objects are falsy;
/// everything else is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

// ============================================================================
// PROJECTION
// ============================================================================

/// Projects a `Value` onto a statically typed validator input.
///
/// The output is either a borrowed view (`&str`, `&[Value]`) or a copied
/// scalar (`f64`, `i64`, `bool`); either way it borrows as the target
/// type, so `ArgRule::new` can run any typed validator against a
/// dynamically bound argument.
///
/// A kind mismatch is a [`ConfigError::TypeMismatch`] — attaching a
/// string validator to a numeric argument is a wiring mistake, not a
/// validation failure.
pub trait FromValue {
    /// The view this projection yields.
    type Output<'a>: Borrow<Self>
    where
        Self: 'a;

    /// Projects `value` onto `Self`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::TypeMismatch`] when the value has the wrong kind.
    fn from_value(value: &Value) -> Result<Self::Output<'_>, Error>;
}

fn mismatch(expected: &'static str, value: &Value) -> Error {
    Error::Config(ConfigError::TypeMismatch {
        expected,
        actual: kind_of(value),
    })
}

impl FromValue for Value {
    type Output<'a>
        = &'a Value
    where
        Self: 'a;

    fn from_value(value: &Value) -> Result<Self::Output<'_>, Error> {
        Ok(value)
    }
}

impl FromValue for f64 {
    type Output<'a>
        = f64
    where
        Self: 'a;

    fn from_value(value: &Value) -> Result<Self::Output<'_>, Error> {
        value.as_f64().ok_or_else(|| mismatch("number", value))
    }
}

impl FromValue for i64 {
    type Output<'a>
        = i64
    where
        Self: 'a;

    fn from_value(value: &Value) -> Result<Self::Output<'_>, Error> {
        value.as_i64().ok_or_else(|| mismatch("integer", value))
    }
}

impl FromValue for bool {
    type Output<'a>
        = bool
    where
        Self: 'a;

    fn from_value(value: &Value) -> Result<Self::Output<'_>, Error> {
        value.as_bool().ok_or_else(|| mismatch("bool", value))
    }
}

impl FromValue for str {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    fn from_value(value: &Value) -> Result<Self::Output<'_>, Error> {
        value.as_str().ok_or_else(|| mismatch("string", value))
    }
}

impl FromValue for [Value] {
    type Output<'a>
        = &'a [Value]
    where
        Self: 'a;

    fn from_value(value: &Value) -> Result<Self::Output<'_>, Error> {
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| mismatch("array", value))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kinds() {
        assert_eq!(kind_of(&json!(null)), ValueKind::Null);
        assert_eq!(kind_of(&json!(true)), ValueKind::Bool);
        assert_eq!(kind_of(&json!(3)), ValueKind::Int);
        assert_eq!(kind_of(&json!(3.5)), ValueKind::Float);
        assert_eq!(kind_of(&json!("x")), ValueKind::String);
        assert_eq!(kind_of(&json!([1])), ValueKind::Array);
        assert_eq!(kind_of(&json!({"a": 1})), ValueKind::Object);
    }

    #[test]
    fn number_family_matches_both_int_and_float() {
        assert!(ValueKind::Number.matches(ValueKind::Int));
        assert!(ValueKind::Number.matches(ValueKind::Float));
        assert!(!ValueKind::Int.matches(ValueKind::Float));
        assert!(!ValueKind::Number.matches(ValueKind::String));
    }

    #[test]
    fn numbers_compare_across_int_and_float() {
        assert_eq!(try_cmp(&json!(2), &json!(2.5)), Ok(Ordering::Less));
        assert_eq!(try_cmp(&json!(3.0), &json!(3)), Ok(Ordering::Equal));
    }

    #[test]
    fn strings_compare_lexicographically() {
        assert_eq!(try_cmp(&json!("abc"), &json!("abd")), Ok(Ordering::Less));
    }

    #[test]
    fn mixed_kinds_are_incomparable() {
        let err = try_cmp(&json!(1), &json!("1")).unwrap_err();
        assert!(matches!(err, ConfigError::Incomparable { .. }));
        assert!(try_cmp(&json!([1]), &json!([1])).is_err());
    }

    #[test]
    fn truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
        assert!(is_truthy(&json!(10)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([0])));
    }

    #[test]
    fn projections() {
        assert_eq!(f64::from_value(&json!(2.5)).unwrap(), 2.5);
        assert_eq!(i64::from_value(&json!(7)).unwrap(), 7);
        assert_eq!(str::from_value(&json!("hi")).unwrap(), "hi");
        assert_eq!(<[Value]>::from_value(&json!([1, 2])).unwrap().len(), 2);
    }

    #[test]
    fn projection_kind_mismatch_is_config_error() {
        let err = str::from_value(&json!(42)).unwrap_err();
        assert!(err.is_config());
        assert!(matches!(
            err,
            Error::Config(ConfigError::TypeMismatch {
                expected: "string",
                actual: ValueKind::Int,
            })
        ));
    }
}
