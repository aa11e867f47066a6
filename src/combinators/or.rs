//! OR combinator - logical disjunction of validators

use crate::foundation::{Error, Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// At least one validator must pass; evaluation short-circuits on the
/// first success. When both fail, the combined error reports both
/// messages. A configuration error on the left is not an alternative to
/// try past — it propagates immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, value: &Self::Input, name: &str) -> Result<(), Error> {
        let left_err = match self.left.validate(value, name) {
            Ok(()) => return Ok(()),
            Err(Error::Validation(e)) => e,
            Err(config) => return Err(config),
        };
        let right_err = match self.right.validate(value, name) {
            Ok(()) => return Ok(()),
            Err(Error::Validation(e)) => e,
            Err(config) => return Err(config),
        };
        Err(ValidationError::new(
            "or_failed",
            format!("all alternatives failed: {left_err}; {right_err}"),
        )
        .into())
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{must_be_equal, must_be_greater_than};

    #[test]
    fn either_side_may_pass() {
        let v = must_be_equal(5).or(must_be_equal(10));
        assert!(v.validate(&5, "n").is_ok());
        assert!(v.validate(&10, "n").is_ok());
        assert!(v.validate(&7, "n").is_err());
    }

    #[test]
    fn combined_error_reports_both_alternatives() {
        let v = must_be_equal(5).or(must_be_greater_than(10));
        let err = v.validate(&7, "n").unwrap_err();
        let err = err.as_validation().unwrap();
        assert_eq!(err.code, "or_failed");
        assert!(err.message.contains("== 5"));
        assert!(err.message.contains("> 10"));
    }

    #[test]
    fn config_errors_are_not_alternatives() {
        let v = must_be_greater_than(1.0).or(must_be_equal(f64::NAN));
        let err = v.validate(&f64::NAN, "n").unwrap_err();
        assert!(err.is_config());
    }
}
