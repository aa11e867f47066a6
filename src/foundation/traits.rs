//! Core traits for the validation system
//!
//! [`Validate`] is the capability every validator implements: it receives
//! the argument value together with the argument's name and either returns
//! `Ok(())` or reports why the argument is unacceptable. The name is part
//! of the contract because every rendered message leads with it.

use crate::foundation::error::Error;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Generic over the input type for compile-time safety; `Input` may be
/// unsized (`str`, `[T]`). Validator instances are immutable configuration
/// constructed once and reused across many calls — `validate` never
/// mutates.
///
/// # Examples
///
/// ```rust,ignore
/// use func_validator::foundation::{Error, Validate, ValidationError};
///
/// struct NotBlank;
///
/// impl Validate for NotBlank {
///     type Input = str;
///
///     fn validate(&self, value: &str, name: &str) -> Result<(), Error> {
///         if value.trim().is_empty() {
///             return Err(ValidationError::new(
///                 "not_blank",
///                 format!("{name} must not be blank"),
///             )
///             .into());
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validate {
    /// The type of value being validated.
    type Input: ?Sized;

    /// Validates `value`, bound to the argument called `name`.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] when the value breaks the configured rule;
    /// [`Error::Config`] when the validator itself is misused (an
    /// impossible comparison, a wrong argument kind).
    fn validate(&self, value: &Self::Input, name: &str) -> Result<(), Error>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, value: &Self::Input, name: &str) -> Result<(), Error> {
        (**self).validate(value, name)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, value: &Self::Input, name: &str) -> Result<(), Error> {
        (**self).validate(value, name)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```rust,ignore
/// use func_validator::prelude::*;
///
/// let v = must_be_greater_than(0).and(must_be_less_than(100));
/// assert!(v.validate(&50, "pct").is_ok());
/// assert!(v.validate(&120, "pct").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    ///
    /// Configuration errors propagate unchanged; only validation outcomes
    /// invert.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::not::Not;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::error::ValidationError;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _value: &Self::Input, _name: &str) -> Result<(), Error> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _value: &Self::Input, name: &str) -> Result<(), Error> {
            Err(ValidationError::new("always_fails", format!("{name} always fails")).into())
        }
    }

    #[test]
    fn validator_receives_the_argument_name() {
        let err = AlwaysFails.validate("x", "width").unwrap_err();
        assert_eq!(err.as_validation().unwrap().message, "width always fails");
    }

    #[test]
    fn boxed_validators_delegate() {
        let boxed: Box<dyn Validate<Input = str>> = Box::new(AlwaysValid);
        assert!(boxed.validate("x", "arg").is_ok());
    }

    #[test]
    fn references_delegate() {
        let v = AlwaysValid;
        assert!((&v).validate("x", "arg").is_ok());
    }
}
