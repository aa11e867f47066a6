//! Validator combinators
//!
//! Logical composition of validators over the same input type. The
//! [`ValidateExt`](crate::foundation::ValidateExt) extension trait exposes
//! these as `.and()`, `.or()`, and `.not()`.
//!
//! Attaching several rules to one parameter in the binding layer already
//! gives fail-fast AND semantics; the combinators exist for composing a
//! single validator value inline.

pub mod and;
pub mod not;
pub mod or;

pub use and::{And, and};
pub use not::{Not, not};
pub use or::{Or, or};
