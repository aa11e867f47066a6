//! # func-validator
//!
//! Declarative function-argument validation: attach configured validator
//! objects to parameters, bind a call's arguments to their names, and
//! apply every attached rule before the wrapped function runs.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use func_validator::prelude::*;
//! use serde_json::json;
//!
//! let params = [
//!     Param::new("age", json!(25)).rule(must_be_between(18, 100)?),
//!     Param::new("shape", json!("rectangle")).rule(must_be_member_of(["square", "rectangle"])),
//!     Param::new("width", json!(10))
//!         .contextual_rule(DependsOn::new(Vec::<String>::new()).on_value("shape", "rectangle")),
//! ];
//! validate_call(&params)?;
//! ```
//!
//! ## Typed validation
//!
//! Every validator is an ordinary typed value; the dynamic binding layer
//! is optional:
//!
//! ```rust,ignore
//! use func_validator::prelude::*;
//!
//! let v = must_be_greater_than(0).and(must_be_less_than(100));
//! v.validate(&42, "percent")?;
//! ```
//!
//! ## Error categories
//!
//! Validators fail in exactly two disjoint ways: [`Error::Validation`]
//! when a value breaks its rule (carrying a message rendered from a
//! `${placeholder}` template), and [`Error::Config`] for programmer
//! mistakes — unresolvable dependencies, impossible comparisons, bad
//! patterns.
//!
//! [`Error::Validation`]: foundation::Error::Validation
//! [`Error::Config`]: foundation::Error::Config

// Error (ValidationError + params) is the fundamental result type of every
// validator call — boxing it would add indirection to each invocation for
// no practical benefit.
#![allow(clippy::result_large_err)]

pub mod bind;
pub mod combinators;
pub mod foundation;
pub mod json;
mod macros;
pub mod prelude;
pub mod validators;
