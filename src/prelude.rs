//! Prelude module for convenient imports.
//!
//! A single `use func_validator::prelude::*;` brings in the traits, error
//! types, built-in validators, combinators, and the call-binding surface.
//!
//! # Examples
//!
//! ```rust,ignore
//! use func_validator::prelude::*;
//!
//! let age = must_be_between(18, 100)?;
//! let shape = must_be_member_of(["square", "rectangle"]);
//! let width = DependsOn::new(Vec::<String>::new()).on_value("shape", "rectangle");
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, messages
// ============================================================================

pub use crate::foundation::{
    CmpOp, Comparable, ConfigError, Error, ErrorTemplate, MessageArgs, MessageSpec, Validate,
    ValidateExt, ValidationError, ValidationResult,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition types and functions
// ============================================================================

pub use crate::combinators::{And, Not, Or, and, not, or};

// ============================================================================
// BINDING: Call-validation surface
// ============================================================================

pub use crate::bind::{
    ArgRule, BoundArgs, DynArgValidator, Param, RECEIVER_KEY, ValidateWithArgs, validate_call,
};

// ============================================================================
// JSON: Dynamic-value helpers
// ============================================================================

pub use crate::json::{FromValue, ValueKind, is_truthy, kind_of};
