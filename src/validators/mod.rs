//! Built-in validators
//!
//! Ready-to-use validators for the common argument-validation scenarios:
//!
//! - **Numeric**: comparison against a target, sign checks, ranges,
//!   approximate equality
//! - **Collection**: membership, emptiness, length checks, element-wise
//!   checks
//! - **Text**: regex matching with selectable match semantics
//! - **Datatype**: runtime kind checks over dynamically bound values
//! - **Dependency**: cross-argument conditional validation
//!
//! # Examples
//!
//! ```rust,ignore
//! use func_validator::prelude::*;
//!
//! // numeric
//! let age = must_be_between(18, 100)?;
//!
//! // collection
//! let tags = must_have_length_between::<String>(1, 10)?;
//!
//! // cross-argument: width is mandatory for rectangles
//! let width = DependsOn::new(Vec::<String>::new()).on_value("shape", "rectangle");
//! ```

pub mod collection;
pub mod datatype;
pub mod depends_on;
pub mod numeric;
pub mod text;

// ============================================================================
// RE-EXPORTS: Numeric validators
// ============================================================================

pub use numeric::{
    DEFAULT_NUMERIC_VALIDATOR_ERR_MSG, MUST_BE_BETWEEN_VALIDATOR_ERR_MSG, MustBeAlmostEqual,
    MustBeBetween, MustBeEqual, MustBeGreaterThan, MustBeGreaterThanOrEqual, MustBeLessThan,
    MustBeLessThanOrEqual, MustBeNegative, MustBeNonNegative, MustBeNonPositive, MustBePositive,
    MustNotBeEqual, must_be_almost_equal, must_be_between, must_be_equal, must_be_greater_than,
    must_be_greater_than_or_equal, must_be_less_than, must_be_less_than_or_equal, must_be_negative,
    must_be_non_negative, must_be_non_positive, must_be_positive, must_not_be_equal,
};

// ============================================================================
// RE-EXPORTS: Collection validators
// ============================================================================

pub use collection::{
    COLLECTION_LEN_VALIDATOR_ERR_MSG, COLLECTION_VALUES_VALIDATOR_ERR_MSG, MustBeEmpty,
    MustBeMemberOf, MustBeNonEmpty, MustHaveLengthBetween, MustHaveLengthEqual,
    MustHaveLengthGreaterThan, MustHaveLengthGreaterThanOrEqual, MustHaveLengthLessThan,
    MustHaveLengthLessThanOrEqual, MustHaveValuesBetween, MustHaveValuesGreaterThan,
    MustHaveValuesGreaterThanOrEqual, MustHaveValuesLessThan, MustHaveValuesLessThanOrEqual,
    must_be_empty, must_be_member_of, must_be_non_empty, must_have_length_between,
    must_have_length_equal, must_have_length_greater_than, must_have_length_greater_than_or_equal,
    must_have_length_less_than, must_have_length_less_than_or_equal, must_have_values_between,
    must_have_values_greater_than, must_have_values_greater_than_or_equal,
    must_have_values_less_than, must_have_values_less_than_or_equal,
};

// ============================================================================
// RE-EXPORTS: Text validators
// ============================================================================

pub use text::{
    MatchMode, MustMatchRegex, RegexFlags, TEXT_VALIDATOR_ERR_MSG, must_match_regex,
};

// ============================================================================
// RE-EXPORTS: Datatype validators
// ============================================================================

pub use datatype::{DATATYPE_VALIDATOR_ERR_MSG, MustBeA, must_be_a};

// ============================================================================
// RE-EXPORTS: Dependency validators
// ============================================================================

pub use depends_on::{
    ArgsStrategy, DependsOn, KwStrategy, MUST_BE_PROVIDED_ERR_MSG, MustBeProvided,
    must_be_provided,
};
