//! Macros for creating validators with minimal boilerplate.
//!
//! Every built-in validator carries the same message configuration — a
//! `DEFAULT_ERROR_MSG` template, an `err_msg` override, and additive
//! `extra_msg_args` — so the boilerplate lives here once:
//!
//! - [`message_options!`] — the message-configuration surface of a
//!   validator (const + builder methods), used inside an `impl` block
//! - [`comparison_validator!`] — a full comparison validator (struct,
//!   `Validate` impl, factory fn) from an operator and a code
//! - [`sign_validator!`] — zero-argument comparison against `T::zero()`
//! - [`length_validator!`] / [`values_validator!`] — collection validators
//!   delegating to a configured numeric validator
//! - [`bound_args!`] — literal construction of a [`BoundArgs`] map
//!
//! [`BoundArgs`]: crate::bind::BoundArgs

// ============================================================================
// MESSAGE OPTIONS
// ============================================================================

/// Generates the message-configuration surface of a validator.
///
/// Expects the surrounding struct to have a `msg: MessageSpec` field.
macro_rules! message_options {
    ($default:expr) => {
        /// The default message template for this validator.
        pub const DEFAULT_ERROR_MSG: &'static str = $default;

        /// Replaces the default message template.
        ///
        /// The template may use any placeholder this validator guarantees
        /// to fill, plus any key supplied via
        /// [`with_msg_arg`](Self::with_msg_arg).
        #[must_use = "builder methods must be chained or built"]
        pub fn with_err_msg(
            mut self,
            template: impl Into<$crate::foundation::ErrorTemplate>,
        ) -> Self {
            self.msg.template = Some(template.into());
            self
        }

        /// Adds an extra `${placeholder}` substitution value.
        ///
        /// Extras are additive context; they never override the
        /// placeholders the validator fills itself.
        #[must_use = "builder methods must be chained or built"]
        pub fn with_msg_arg(
            mut self,
            key: impl Into<::std::borrow::Cow<'static, str>>,
            value: impl ToString,
        ) -> Self {
            self.msg.extra.push(key, value);
            self
        }

        /// Replaces the whole message configuration.
        ///
        /// Used by strategy plumbing (`DependsOn`) to hand a validator a
        /// pre-populated spec.
        #[must_use = "builder methods must be chained or built"]
        pub fn with_message_spec(mut self, msg: $crate::foundation::MessageSpec) -> Self {
            self.msg = msg;
            self
        }
    };
}

pub(crate) use message_options;

// ============================================================================
// COMPARISON VALIDATOR
// ============================================================================

/// Generates a comparison validator: struct, message options, `Validate`
/// impl, and snake_case factory function.
macro_rules! comparison_validator {
    (
        $(#[$meta:meta])*
        pub $name:ident, $op:expr, $code:literal, fn $factory:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<T> {
            to: T,
            msg: $crate::foundation::MessageSpec,
        }

        impl<T: $crate::foundation::Comparable + ::std::fmt::Display> $name<T> {
            $crate::macros::message_options!(DEFAULT_NUMERIC_VALIDATOR_ERR_MSG);

            /// Creates the validator with a fixed comparison target.
            #[must_use]
            pub fn new(to: T) -> Self {
                Self {
                    to,
                    msg: $crate::foundation::MessageSpec::new(),
                }
            }
        }

        impl<T: $crate::foundation::Comparable + ::std::fmt::Display> $crate::foundation::Validate
            for $name<T>
        {
            type Input = T;

            fn validate(
                &self,
                value: &Self::Input,
                name: &str,
            ) -> Result<(), $crate::foundation::Error> {
                $crate::validators::numeric::check_cmp(value, name, &self.to, $op, $code, &self.msg)
            }
        }

        #[must_use]
        pub fn $factory<T: $crate::foundation::Comparable + ::std::fmt::Display>(
            to: T,
        ) -> $name<T> {
            $name::new(to)
        }
    };
}

pub(crate) use comparison_validator;

// ============================================================================
// SIGN VALIDATOR
// ============================================================================

/// Generates a zero-argument sign validator comparing against `T::zero()`.
macro_rules! sign_validator {
    (
        $(#[$meta:meta])*
        pub $name:ident, $op:expr, $code:literal, fn $factory:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<T> {
            to: T,
            msg: $crate::foundation::MessageSpec,
        }

        impl<T: $crate::foundation::Comparable + ::std::fmt::Display> $name<T> {
            $crate::macros::message_options!(DEFAULT_NUMERIC_VALIDATOR_ERR_MSG);

            /// Creates the validator.
            #[must_use]
            pub fn new() -> Self {
                Self {
                    to: T::zero(),
                    msg: $crate::foundation::MessageSpec::new(),
                }
            }
        }

        impl<T: $crate::foundation::Comparable + ::std::fmt::Display> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: $crate::foundation::Comparable + ::std::fmt::Display> $crate::foundation::Validate
            for $name<T>
        {
            type Input = T;

            fn validate(
                &self,
                value: &Self::Input,
                name: &str,
            ) -> Result<(), $crate::foundation::Error> {
                $crate::validators::numeric::check_cmp(value, name, &self.to, $op, $code, &self.msg)
            }
        }

        #[must_use]
        pub fn $factory<T: $crate::foundation::Comparable + ::std::fmt::Display>() -> $name<T> {
            $name::new()
        }
    };
}

pub(crate) use sign_validator;

// ============================================================================
// LENGTH VALIDATOR
// ============================================================================

/// Generates a collection-length validator delegating to a numeric
/// validator over `input.len()`.
macro_rules! length_validator {
    (
        $(#[$meta:meta])*
        pub $name:ident, $inner:ident, fn $factory:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<T> {
            inner: $inner<usize>,
            _marker: ::std::marker::PhantomData<T>,
        }

        impl<T> $name<T> {
            /// The default message template for this validator.
            pub const DEFAULT_ERROR_MSG: &'static str = COLLECTION_LEN_VALIDATOR_ERR_MSG;

            /// Creates the validator with a fixed length target.
            #[must_use]
            pub fn new(to: usize) -> Self {
                Self {
                    inner: $inner::new(to).with_err_msg(COLLECTION_LEN_VALIDATOR_ERR_MSG),
                    _marker: ::std::marker::PhantomData,
                }
            }

            /// Replaces the default message template.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_err_msg(
                mut self,
                template: impl Into<$crate::foundation::ErrorTemplate>,
            ) -> Self {
                self.inner = self.inner.with_err_msg(template);
                self
            }

            /// Adds an extra `${placeholder}` substitution value.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_msg_arg(
                mut self,
                key: impl Into<::std::borrow::Cow<'static, str>>,
                value: impl ToString,
            ) -> Self {
                self.inner = self.inner.with_msg_arg(key, value);
                self
            }
        }

        impl<T> $crate::foundation::Validate for $name<T> {
            type Input = [T];

            fn validate(
                &self,
                value: &Self::Input,
                name: &str,
            ) -> Result<(), $crate::foundation::Error> {
                self.inner.validate(&value.len(), name)
            }
        }

        #[must_use]
        pub fn $factory<T>(to: usize) -> $name<T> {
            $name::new(to)
        }
    };
}

pub(crate) use length_validator;

// ============================================================================
// VALUES VALIDATOR
// ============================================================================

/// Generates an element-wise collection validator delegating to a numeric
/// validator applied to every element in iteration order.
macro_rules! values_validator {
    (
        $(#[$meta:meta])*
        pub $name:ident, $inner:ident, fn $factory:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<T> {
            inner: $inner<T>,
        }

        impl<T: $crate::foundation::Comparable + ::std::fmt::Display> $name<T> {
            /// The default message template for this validator.
            pub const DEFAULT_ERROR_MSG: &'static str = COLLECTION_VALUES_VALIDATOR_ERR_MSG;

            /// Creates the validator with a fixed per-element target.
            #[must_use]
            pub fn new(to: T) -> Self {
                Self {
                    inner: $inner::new(to).with_err_msg(COLLECTION_VALUES_VALIDATOR_ERR_MSG),
                }
            }

            /// Replaces the default message template.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_err_msg(
                mut self,
                template: impl Into<$crate::foundation::ErrorTemplate>,
            ) -> Self {
                self.inner = self.inner.with_err_msg(template);
                self
            }

            /// Adds an extra `${placeholder}` substitution value.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_msg_arg(
                mut self,
                key: impl Into<::std::borrow::Cow<'static, str>>,
                value: impl ToString,
            ) -> Self {
                self.inner = self.inner.with_msg_arg(key, value);
                self
            }
        }

        impl<T: $crate::foundation::Comparable + ::std::fmt::Display> $crate::foundation::Validate
            for $name<T>
        {
            type Input = [T];

            fn validate(
                &self,
                value: &Self::Input,
                name: &str,
            ) -> Result<(), $crate::foundation::Error> {
                for element in value {
                    self.inner.validate(element, name)?;
                }
                Ok(())
            }
        }

        #[must_use]
        pub fn $factory<T: $crate::foundation::Comparable + ::std::fmt::Display>(
            to: T,
        ) -> $name<T> {
            $name::new(to)
        }
    };
}

pub(crate) use values_validator;

// ============================================================================
// BOUND ARGS
// ============================================================================

/// Builds a [`BoundArgs`](crate::bind::BoundArgs) map from literal
/// name/value pairs.
///
/// ```rust,ignore
/// use func_validator::bound_args;
/// use serde_json::json;
///
/// let args = bound_args! { "a" => json!(10), "b" => json!(5) };
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! bound_args {
    () => {
        $crate::bind::BoundArgs::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut args = $crate::bind::BoundArgs::new();
        $(args.insert($name, $value);)+
        args
    }};
}
