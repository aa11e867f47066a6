//! Core validation types and traits
//!
//! The fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ConfigError`], [`Error`]
//! - **Messages**: [`ErrorTemplate`], [`MessageArgs`], [`MessageSpec`]
//! - **Comparison**: [`CmpOp`], [`Comparable`]
//!
//! # Architecture
//!
//! Validators are immutable configuration behind one capability trait:
//!
//! ```rust,ignore
//! use func_validator::prelude::*;
//!
//! let v = must_be_between(2, 4)?;
//! v.validate(&3, "retries")?;          // Ok
//! v.validate(&5, "retries")?;          // Err(Error::Validation(..))
//! ```
//!
//! Failure messages render from `${placeholder}` templates, so a custom
//! `err_msg` can reuse any placeholder a validator guarantees to fill:
//!
//! ```rust,ignore
//! let v = must_be_positive::<i64>()
//!     .with_err_msg("${arg_name} must be above zero, got ${arg_value}");
//! ```
//!
//! Two disjoint failure categories flow out of every validator: a value
//! breaking its rule is [`Error::Validation`]; a broken setup (missing
//! dependency, impossible comparison, bad pattern) is [`Error::Config`].

pub mod compare;
pub mod error;
pub mod template;
pub mod traits;

pub use compare::{CmpOp, Comparable};
pub use error::{ConfigError, Error, ValidationError, ValidationResult};
pub use template::{ErrorTemplate, MessageArgs, MessageSpec};
pub use traits::{Validate, ValidateExt};

/// Common imports for working with the validator core.
pub mod prelude {
    pub use super::{
        CmpOp, Comparable, ConfigError, Error, ErrorTemplate, MessageArgs, MessageSpec, Validate,
        ValidateExt, ValidationError, ValidationResult,
    };
}
