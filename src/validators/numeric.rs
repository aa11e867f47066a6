//! Numeric comparison validators
//!
//! Pure predicate evaluation against a fixed target: no state machine,
//! no call-time configuration. Every validator here renders its failure
//! from the shared numeric template with `{arg_name, arg_value, to,
//! fn_symbol}` filled in, so a custom `err_msg` can rely on those
//! placeholders being present.

use std::cmp::Ordering;
use std::fmt::Display;

use crate::foundation::{CmpOp, Comparable, ConfigError, Error, MessageArgs, MessageSpec, Validate};
use crate::macros::{comparison_validator, message_options, sign_validator};

/// Shared template for single-target comparison failures.
pub const DEFAULT_NUMERIC_VALIDATOR_ERR_MSG: &str =
    "${arg_name}: ${arg_value} must be ${fn_symbol} ${to}.";

/// Template for two-sided range failures.
pub const MUST_BE_BETWEEN_VALIDATOR_ERR_MSG: &str = "${arg_name}: ${arg_value} must be \
     ${min_fn_symbol} ${min_value} and ${max_fn_symbol} ${max_value}.";

/// Evaluates `value op to` and renders the shared comparison failure.
pub(crate) fn check_cmp<T: Comparable + Display>(
    value: &T,
    name: &str,
    to: &T,
    op: CmpOp,
    code: &'static str,
    msg: &MessageSpec,
) -> Result<(), Error> {
    let ordering = value.try_cmp(to)?;
    if op.accepts(ordering) {
        return Ok(());
    }
    let required = MessageArgs::new()
        .with("arg_name", name)
        .with("arg_value", value)
        .with("to", to)
        .with("fn_symbol", op.symbol());
    Err(msg
        .fail(code, DEFAULT_NUMERIC_VALIDATOR_ERR_MSG, required)
        .into())
}

// ============================================================================
// COMPARISON VALIDATORS
// ============================================================================

comparison_validator! {
    /// Validates that the value equals the target.
    ///
    /// ```
    /// use func_validator::validators::must_be_equal;
    /// use func_validator::foundation::Validate;
    ///
    /// let v = must_be_equal(5);
    /// assert!(v.validate(&5, "n").is_ok());
    /// assert!(v.validate(&4, "n").is_err());
    /// ```
    pub MustBeEqual, crate::foundation::CmpOp::Eq, "must_be_equal", fn must_be_equal;
}

comparison_validator! {
    /// Validates that the value differs from the target.
    pub MustNotBeEqual, crate::foundation::CmpOp::Ne, "must_not_be_equal", fn must_not_be_equal;
}

comparison_validator! {
    /// Validates that the value is strictly greater than the target.
    ///
    /// ```
    /// use func_validator::validators::must_be_greater_than;
    /// use func_validator::foundation::Validate;
    ///
    /// let v = must_be_greater_than(5);
    /// assert!(v.validate(&6, "n").is_ok());
    /// assert!(v.validate(&5, "n").is_err()); // not strictly greater
    /// ```
    pub MustBeGreaterThan, crate::foundation::CmpOp::Gt, "must_be_greater_than", fn must_be_greater_than;
}

comparison_validator! {
    /// Validates that the value is greater than or equal to the target.
    pub MustBeGreaterThanOrEqual, crate::foundation::CmpOp::Ge, "must_be_greater_than_or_equal", fn must_be_greater_than_or_equal;
}

comparison_validator! {
    /// Validates that the value is strictly less than the target.
    pub MustBeLessThan, crate::foundation::CmpOp::Lt, "must_be_less_than", fn must_be_less_than;
}

comparison_validator! {
    /// Validates that the value is less than or equal to the target.
    pub MustBeLessThanOrEqual, crate::foundation::CmpOp::Le, "must_be_less_than_or_equal", fn must_be_less_than_or_equal;
}

// ============================================================================
// SIGN VALIDATORS
// ============================================================================

sign_validator! {
    /// Validates that the value is positive (`x > 0`).
    pub MustBePositive, crate::foundation::CmpOp::Gt, "must_be_positive", fn must_be_positive;
}

sign_validator! {
    /// Validates that the value is non-positive (`x <= 0`).
    pub MustBeNonPositive, crate::foundation::CmpOp::Le, "must_be_non_positive", fn must_be_non_positive;
}

sign_validator! {
    /// Validates that the value is negative (`x < 0`).
    pub MustBeNegative, crate::foundation::CmpOp::Lt, "must_be_negative", fn must_be_negative;
}

sign_validator! {
    /// Validates that the value is non-negative (`x >= 0`).
    pub MustBeNonNegative, crate::foundation::CmpOp::Ge, "must_be_non_negative", fn must_be_non_negative;
}

// ============================================================================
// RANGE
// ============================================================================

/// Validates that the value lies between two bounds.
///
/// Bounds are inclusive by default; [`min_exclusive`](Self::min_exclusive)
/// and [`max_exclusive`](Self::max_exclusive) switch each side
/// independently to a strict comparison.
///
/// ```
/// use func_validator::validators::MustBeBetween;
/// use func_validator::foundation::Validate;
///
/// let v = MustBeBetween::new(2, 4).unwrap();
/// assert!(v.validate(&2, "n").is_ok());
/// assert!(v.validate(&5, "n").is_err());
///
/// let strict = MustBeBetween::new(2, 4).unwrap().min_exclusive().max_exclusive();
/// assert!(strict.validate(&2, "n").is_err()); // boundary excluded
/// assert!(strict.validate(&3, "n").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct MustBeBetween<T> {
    min: T,
    max: T,
    min_inclusive: bool,
    max_inclusive: bool,
    msg: MessageSpec,
}

impl<T: Comparable + Display> MustBeBetween<T> {
    message_options!(MUST_BE_BETWEEN_VALIDATOR_ERR_MSG);

    /// Creates the validator with inclusive bounds.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidRange`] when `min > max`;
    /// [`ConfigError::Incomparable`] when the bounds cannot be ordered.
    pub fn new(min: T, max: T) -> Result<Self, ConfigError> {
        if min.try_cmp(&max)? == Ordering::Greater {
            return Err(ConfigError::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self {
            min,
            max,
            min_inclusive: true,
            max_inclusive: true,
            msg: MessageSpec::new(),
        })
    }

    /// Makes the lower bound exclusive (`>` instead of `>=`).
    #[must_use = "builder methods must be chained or built"]
    pub fn min_exclusive(mut self) -> Self {
        self.min_inclusive = false;
        self
    }

    /// Makes the upper bound exclusive (`<` instead of `<=`).
    #[must_use = "builder methods must be chained or built"]
    pub fn max_exclusive(mut self) -> Self {
        self.max_inclusive = false;
        self
    }
}

impl<T: Comparable + Display> Validate for MustBeBetween<T> {
    type Input = T;

    fn validate(&self, value: &Self::Input, name: &str) -> Result<(), Error> {
        let min_op = if self.min_inclusive { CmpOp::Ge } else { CmpOp::Gt };
        let max_op = if self.max_inclusive { CmpOp::Le } else { CmpOp::Lt };

        let in_range = min_op.accepts(value.try_cmp(&self.min)?)
            && max_op.accepts(value.try_cmp(&self.max)?);
        if in_range {
            return Ok(());
        }

        let required = MessageArgs::new()
            .with("arg_name", name)
            .with("arg_value", value)
            .with("min_value", &self.min)
            .with("max_value", &self.max)
            .with("min_fn_symbol", min_op.symbol())
            .with("max_fn_symbol", max_op.symbol());
        Err(self
            .msg
            .fail("must_be_between", MUST_BE_BETWEEN_VALIDATOR_ERR_MSG, required)
            .into())
    }
}

/// Creates a [`MustBeBetween`] with inclusive bounds.
pub fn must_be_between<T: Comparable + Display>(
    min: T,
    max: T,
) -> Result<MustBeBetween<T>, ConfigError> {
    MustBeBetween::new(min, max)
}

// ============================================================================
// APPROXIMATE EQUALITY
// ============================================================================

/// Validates approximate equality against a target.
///
/// Passes iff `|value - target| <= max(rel_tol * max(|value|, |target|),
/// abs_tol)`. Both tolerances are construction-time configuration.
///
/// ```
/// use func_validator::validators::must_be_almost_equal;
/// use func_validator::foundation::Validate;
///
/// let v = must_be_almost_equal(5.39).with_rel_tol(0.01);
/// assert!(v.validate(&5.4, "ratio").is_ok());
/// assert!(v.validate(&6.0, "ratio").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MustBeAlmostEqual {
    to: f64,
    rel_tol: f64,
    abs_tol: f64,
    msg: MessageSpec,
}

impl MustBeAlmostEqual {
    message_options!(DEFAULT_NUMERIC_VALIDATOR_ERR_MSG);

    /// Creates the validator with `rel_tol = 1e-9` and `abs_tol = 0.0`.
    #[must_use]
    pub fn new(to: f64) -> Self {
        Self {
            to,
            rel_tol: 1e-9,
            abs_tol: 0.0,
            msg: MessageSpec::new(),
        }
    }

    /// Sets the relative tolerance.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rel_tol(mut self, rel_tol: f64) -> Self {
        self.rel_tol = rel_tol;
        self
    }

    /// Sets the absolute tolerance.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_abs_tol(mut self, abs_tol: f64) -> Self {
        self.abs_tol = abs_tol;
        self
    }
}

impl Validate for MustBeAlmostEqual {
    type Input = f64;

    fn validate(&self, value: &Self::Input, name: &str) -> Result<(), Error> {
        let tolerance = f64::max(self.rel_tol * f64::max(value.abs(), self.to.abs()), self.abs_tol);
        if (value - self.to).abs() <= tolerance {
            return Ok(());
        }
        let required = MessageArgs::new()
            .with("arg_name", name)
            .with("arg_value", value)
            .with("to", self.to)
            .with("fn_symbol", CmpOp::IsClose.symbol());
        Err(self
            .msg
            .fail("must_be_almost_equal", DEFAULT_NUMERIC_VALIDATOR_ERR_MSG, required)
            .into())
    }
}

/// Creates a [`MustBeAlmostEqual`] with default tolerances.
#[must_use]
pub fn must_be_almost_equal(to: f64) -> MustBeAlmostEqual {
    MustBeAlmostEqual::new(to)
}

// ============================================================================
// TESTS
// ============================================================================
