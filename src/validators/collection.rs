//! Collection validators
//!
//! Membership, emptiness, length comparisons, and element-wise checks.
//! Length and element-wise validators delegate to the numeric validators
//! with a collection-specific template, so `${arg_value}` carries the
//! measured length (or offending element), exactly what the message needs.

use std::fmt::{Debug, Display};
use std::marker::PhantomData;

use crate::foundation::{
    Comparable, ConfigError, Error, ErrorTemplate, MessageArgs, MessageSpec, Validate,
};
use crate::macros::{length_validator, message_options, values_validator};
use crate::validators::numeric::{
    MustBeBetween, MustBeEqual, MustBeGreaterThan, MustBeGreaterThanOrEqual, MustBeLessThan,
    MustBeLessThanOrEqual, MustNotBeEqual,
};

/// Template for length checks; `${arg_value}` is the measured length.
pub const COLLECTION_LEN_VALIDATOR_ERR_MSG: &str =
    "Length of ${arg_name}: ${arg_value} must be ${fn_symbol} ${to}";

/// Template for element-wise checks; `${arg_value}` is the first
/// offending element.
pub const COLLECTION_VALUES_VALIDATOR_ERR_MSG: &str =
    "Values of ${arg_name}: ${arg_value} must be ${fn_symbol} ${to}";

const LEN_BETWEEN_VALIDATOR_ERR_MSG: &str = "Length of ${arg_name}: ${arg_value} must be \
     ${min_fn_symbol} ${min_value} and ${max_fn_symbol} ${max_value}";

const VALUES_BETWEEN_VALIDATOR_ERR_MSG: &str = "Values of ${arg_name}: ${arg_value} must be \
     ${min_fn_symbol} ${min_value} and ${max_fn_symbol} ${max_value}";

// ============================================================================
// MEMBERSHIP
// ============================================================================

/// Validates that the value is a member of a configured set.
///
/// Membership uses `PartialEq` against the stored values, so any element
/// type works — strings, numbers, `serde_json::Value`.
///
/// ```
/// use func_validator::validators::must_be_member_of;
/// use func_validator::foundation::Validate;
///
/// let v = must_be_member_of(["square", "rectangle"]);
/// assert!(v.validate(&"square", "shape").is_ok());
/// assert!(v.validate(&"circle", "shape").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MustBeMemberOf<T> {
    value_set: Vec<T>,
    msg: MessageSpec,
}

impl<T: PartialEq + Display + Debug> MustBeMemberOf<T> {
    message_options!("${arg_name}: ${arg_value} must be in ${value_set}");

    /// Creates the validator from any iterable of allowed values.
    pub fn new(value_set: impl IntoIterator<Item = T>) -> Self {
        Self {
            value_set: value_set.into_iter().collect(),
            msg: MessageSpec::new(),
        }
    }
}

impl<T: PartialEq + Display + Debug> Validate for MustBeMemberOf<T> {
    type Input = T;

    fn validate(&self, value: &Self::Input, name: &str) -> Result<(), Error> {
        if self.value_set.contains(value) {
            return Ok(());
        }
        let required = MessageArgs::new()
            .with("arg_name", name)
            .with("arg_value", value)
            .with("value_set", format!("{:?}", self.value_set));
        Err(self
            .msg
            .fail("must_be_member_of", Self::DEFAULT_ERROR_MSG, required)
            .into())
    }
}

/// Creates a [`MustBeMemberOf`] from any iterable of allowed values.
pub fn must_be_member_of<T: PartialEq + Display + Debug>(
    value_set: impl IntoIterator<Item = T>,
) -> MustBeMemberOf<T> {
    MustBeMemberOf::new(value_set)
}

// ============================================================================
// EMPTINESS
// ============================================================================

/// Validates that the collection is empty (length == 0).
#[derive(Debug, Clone)]
pub struct MustBeEmpty<T> {
    inner: MustBeEqual<usize>,
    _marker: PhantomData<T>,
}

impl<T> MustBeEmpty<T> {
    /// The default message template for this validator.
    pub const DEFAULT_ERROR_MSG: &'static str = COLLECTION_LEN_VALIDATOR_ERR_MSG;

    /// Creates the validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: MustBeEqual::new(0).with_err_msg(COLLECTION_LEN_VALIDATOR_ERR_MSG),
            _marker: PhantomData,
        }
    }

    /// Replaces the default message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_err_msg(mut self, template: impl Into<ErrorTemplate>) -> Self {
        self.inner = self.inner.with_err_msg(template);
        self
    }
}

impl<T> Default for MustBeEmpty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Validate for MustBeEmpty<T> {
    type Input = [T];

    fn validate(&self, value: &Self::Input, name: &str) -> Result<(), Error> {
        self.inner.validate(&value.len(), name)
    }
}

/// Creates a [`MustBeEmpty`].
#[must_use]
pub fn must_be_empty<T>() -> MustBeEmpty<T> {
    MustBeEmpty::new()
}

/// Validates that the collection is not empty (length != 0).
#[derive(Debug, Clone)]
pub struct MustBeNonEmpty<T> {
    inner: MustNotBeEqual<usize>,
    _marker: PhantomData<T>,
}

impl<T> MustBeNonEmpty<T> {
    /// The default message template for this validator.
    pub const DEFAULT_ERROR_MSG: &'static str = COLLECTION_LEN_VALIDATOR_ERR_MSG;

    /// Creates the validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: MustNotBeEqual::new(0).with_err_msg(COLLECTION_LEN_VALIDATOR_ERR_MSG),
            _marker: PhantomData,
        }
    }

    /// Replaces the default message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_err_msg(mut self, template: impl Into<ErrorTemplate>) -> Self {
        self.inner = self.inner.with_err_msg(template);
        self
    }
}

impl<T> Default for MustBeNonEmpty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Validate for MustBeNonEmpty<T> {
    type Input = [T];

    fn validate(&self, value: &Self::Input, name: &str) -> Result<(), Error> {
        self.inner.validate(&value.len(), name)
    }
}

/// Creates a [`MustBeNonEmpty`].
#[must_use]
pub fn must_be_non_empty<T>() -> MustBeNonEmpty<T> {
    MustBeNonEmpty::new()
}

// ============================================================================
// LENGTH
// ============================================================================

length_validator! {
    /// Validates that the collection has exactly the given length.
    pub MustHaveLengthEqual, MustBeEqual, fn must_have_length_equal;
}

length_validator! {
    /// Validates that the collection is longer than the given length.
    pub MustHaveLengthGreaterThan, MustBeGreaterThan, fn must_have_length_greater_than;
}

length_validator! {
    /// Validates that the collection has at least the given length.
    pub MustHaveLengthGreaterThanOrEqual, MustBeGreaterThanOrEqual, fn must_have_length_greater_than_or_equal;
}

length_validator! {
    /// Validates that the collection is shorter than the given length.
    pub MustHaveLengthLessThan, MustBeLessThan, fn must_have_length_less_than;
}

length_validator! {
    /// Validates that the collection has at most the given length.
    pub MustHaveLengthLessThanOrEqual, MustBeLessThanOrEqual, fn must_have_length_less_than_or_equal;
}

/// Validates that the collection length lies between two bounds.
///
/// ```
/// use func_validator::validators::MustHaveLengthBetween;
/// use func_validator::foundation::Validate;
///
/// let v = MustHaveLengthBetween::<i32>::new(2, 4).unwrap();
/// assert!(v.validate(&[1, 2, 3], "items").is_ok());
/// assert!(v.validate(&[1], "items").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MustHaveLengthBetween<T> {
    inner: MustBeBetween<usize>,
    _marker: PhantomData<T>,
}

impl<T> MustHaveLengthBetween<T> {
    /// The default message template for this validator.
    pub const DEFAULT_ERROR_MSG: &'static str = LEN_BETWEEN_VALIDATOR_ERR_MSG;

    /// Creates the validator with inclusive bounds.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidRange`] when `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: MustBeBetween::new(min, max)?.with_err_msg(LEN_BETWEEN_VALIDATOR_ERR_MSG),
            _marker: PhantomData,
        })
    }

    /// Makes the lower bound exclusive.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_exclusive(mut self) -> Self {
        self.inner = self.inner.min_exclusive();
        self
    }

    /// Makes the upper bound exclusive.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_exclusive(mut self) -> Self {
        self.inner = self.inner.max_exclusive();
        self
    }

    /// Replaces the default message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_err_msg(mut self, template: impl Into<ErrorTemplate>) -> Self {
        self.inner = self.inner.with_err_msg(template);
        self
    }
}

impl<T> Validate for MustHaveLengthBetween<T> {
    type Input = [T];

    fn validate(&self, value: &Self::Input, name: &str) -> Result<(), Error> {
        self.inner.validate(&value.len(), name)
    }
}

/// Creates a [`MustHaveLengthBetween`] with inclusive bounds.
pub fn must_have_length_between<T>(
    min: usize,
    max: usize,
) -> Result<MustHaveLengthBetween<T>, ConfigError> {
    MustHaveLengthBetween::new(min, max)
}

// ============================================================================
// ELEMENT-WISE
// ============================================================================

values_validator! {
    /// Validates that every element is greater than the given value.
    ///
    /// Fails on the first offending element in iteration order.
    pub MustHaveValuesGreaterThan, MustBeGreaterThan, fn must_have_values_greater_than;
}

values_validator! {
    /// Validates that every element is at least the given value.
    pub MustHaveValuesGreaterThanOrEqual, MustBeGreaterThanOrEqual, fn must_have_values_greater_than_or_equal;
}

values_validator! {
    /// Validates that every element is less than the given value.
    pub MustHaveValuesLessThan, MustBeLessThan, fn must_have_values_less_than;
}

values_validator! {
    /// Validates that every element is at most the given value.
    pub MustHaveValuesLessThanOrEqual, MustBeLessThanOrEqual, fn must_have_values_less_than_or_equal;
}

/// Validates that every element lies between two bounds.
///
/// Fails on the first offending element in the input's natural iteration
/// order; that element's value appears in the message.
#[derive(Debug, Clone)]
pub struct MustHaveValuesBetween<T> {
    inner: MustBeBetween<T>,
}

impl<T: Comparable + Display> MustHaveValuesBetween<T> {
    /// The default message template for this validator.
    pub const DEFAULT_ERROR_MSG: &'static str = VALUES_BETWEEN_VALIDATOR_ERR_MSG;

    /// Creates the validator with inclusive bounds.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidRange`] when `min > max`.
    pub fn new(min: T, max: T) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: MustBeBetween::new(min, max)?.with_err_msg(VALUES_BETWEEN_VALIDATOR_ERR_MSG),
        })
    }

    /// Makes the lower bound exclusive.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_exclusive(mut self) -> Self {
        self.inner = self.inner.min_exclusive();
        self
    }

    /// Makes the upper bound exclusive.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_exclusive(mut self) -> Self {
        self.inner = self.inner.max_exclusive();
        self
    }

    /// Replaces the default message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_err_msg(mut self, template: impl Into<ErrorTemplate>) -> Self {
        self.inner = self.inner.with_err_msg(template);
        self
    }
}

impl<T: Comparable + Display> Validate for MustHaveValuesBetween<T> {
    type Input = [T];

    fn validate(&self, value: &Self::Input, name: &str) -> Result<(), Error> {
        for element in value {
            self.inner.validate(element, name)?;
        }
        Ok(())
    }
}

/// Creates a [`MustHaveValuesBetween`] with inclusive bounds.
pub fn must_have_values_between<T: Comparable + Display>(
    min: T,
    max: T,
) -> Result<MustHaveValuesBetween<T>, ConfigError> {
    MustHaveValuesBetween::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================
