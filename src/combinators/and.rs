//! AND combinator - logical conjunction of validators

use crate::foundation::{Error, Validate};

/// Combines two validators with logical AND.
///
/// Both validators must pass; evaluation short-circuits on the first
/// failure, so the error always comes from the earliest violated rule.
///
/// # Examples
///
/// ```rust,ignore
/// use func_validator::prelude::*;
///
/// let v = must_be_greater_than(0).and(must_be_less_than(10));
/// assert!(v.validate(&5, "n").is_ok());
/// assert!(v.validate(&-1, "n").is_err());
/// assert!(v.validate(&12, "n").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
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

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, value: &Self::Input, name: &str) -> Result<(), Error> {
        self.left.validate(value, name)?;
        self.right.validate(value, name)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
