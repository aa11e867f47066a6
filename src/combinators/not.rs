//! NOT combinator - logical negation of a validator

use crate::foundation::{Error, Validate, ValidationError};

/// Inverts a validator.
///
/// Succeeds when the inner validator reports a validation failure, fails
/// when it passes. Configuration errors propagate unchanged — a broken
/// setup does not become a pass by negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Validate for Not<V> {
    type Input = V::Input;

    fn validate(&self, value: &Self::Input, name: &str) -> Result<(), Error> {
        match self.inner.validate(value, name) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                format!("{name}: validation must not pass, but it did"),
            )
            .into()),
            Err(Error::Validation(_)) => Ok(()),
            Err(config) => Err(config),
        }
    }
}

/// Creates a `Not` combinator around a validator.
pub fn not<V: Validate>(inner: V) -> Not<V> {
    Not::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{must_be_equal, must_be_greater_than};

    #[test]
    fn inverts_the_outcome() {
        let v = must_be_equal(5).not();
        assert!(v.validate(&4, "n").is_ok());
        assert!(v.validate(&5, "n").is_err());
    }

    #[test]
    fn failure_names_the_argument() {
        let err = must_be_equal(5).not().validate(&5, "limit").unwrap_err();
        assert!(err.as_validation().unwrap().message.starts_with("limit"));
    }

    #[test]
    fn config_errors_do_not_invert() {
        let v = must_be_greater_than(1.0).not();
        let err = v.validate(&f64::NAN, "n").unwrap_err();
        assert!(err.is_config());
    }
}
