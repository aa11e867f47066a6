//! Cross-argument dependency validation
//!
//! [`DependsOn`] makes the validity of one argument depend on the value
//! of another argument bound in the same call. Two dependency kinds can
//! coexist on one instance:
//!
//! - **positional** — the argument is compared against each named
//!   dependency's resolved value through the `args_strategy` (default:
//!   less-than);
//! - **keyword** — when a named dependency equals its trigger value, the
//!   `kw_strategy` runs against the argument (default:
//!   [`MustBeProvided`]).
//!
//! Strategies are factories, not instances: `DependsOn` builds a fresh
//! strategy validator per dependency at validation time, handing it a
//! message spec pre-populated with `${dep_arg_name}` / `${dep_arg_value}`
//! so both paths render dependency-aware messages.

use std::sync::Arc;

use serde_json::Value;

use crate::bind::{BoundArgs, DynArgValidator, ValidateWithArgs};
use crate::foundation::{Error, ErrorTemplate, MessageArgs, MessageSpec, Validate};
use crate::json::is_truthy;
use crate::macros::message_options;
use crate::validators::numeric::MustBeLessThan;

/// Template used when a triggered dependency finds the argument missing.
pub const MUST_BE_PROVIDED_ERR_MSG: &str =
    "${arg_name} must be provided when ${dep_arg_name} has a value of ${dep_arg_value}";

// ============================================================================
// MUST BE PROVIDED
// ============================================================================

/// Validates that a value is provided (truthy, non-empty).
///
/// The default keyword strategy of [`DependsOn`]. Its default template
/// mentions `${dep_arg_name}` / `${dep_arg_value}`; used standalone those
/// placeholders render verbatim, which is safe by the template contract.
#[derive(Debug, Clone)]
pub struct MustBeProvided {
    msg: MessageSpec,
}

impl MustBeProvided {
    message_options!(MUST_BE_PROVIDED_ERR_MSG);

    /// Creates the validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            msg: MessageSpec::new(),
        }
    }
}

impl Default for MustBeProvided {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for MustBeProvided {
    type Input = Value;

    fn validate(&self, value: &Self::Input, name: &str) -> Result<(), Error> {
        if is_truthy(value) {
            return Ok(());
        }
        let required = MessageArgs::new()
            .with("arg_name", name)
            .with("arg_value", value);
        Err(self
            .msg
            .fail("must_be_provided", MUST_BE_PROVIDED_ERR_MSG, required)
            .into())
    }
}

/// Creates a [`MustBeProvided`].
#[must_use]
pub fn must_be_provided() -> MustBeProvided {
    MustBeProvided::new()
}

// ============================================================================
// STRATEGY FACTORIES
// ============================================================================

/// Builds the validator applied for a positional dependency.
///
/// Receives the dependency's resolved value and a message spec carrying
/// the dependency context.
pub type ArgsStrategy = Arc<dyn Fn(Value, MessageSpec) -> DynArgValidator + Send + Sync>;

/// Builds the validator applied when a keyword dependency triggers.
pub type KwStrategy = Arc<dyn Fn(MessageSpec) -> DynArgValidator + Send + Sync>;

fn default_args_strategy() -> ArgsStrategy {
    Arc::new(|dep_value, msg| Box::new(MustBeLessThan::new(dep_value).with_message_spec(msg)))
}

fn default_kw_strategy() -> KwStrategy {
    Arc::new(|msg| Box::new(MustBeProvided::new().with_message_spec(msg)))
}

// ============================================================================
// DEPENDS ON
// ============================================================================

/// Marks an argument as depending on other arguments of the same call.
///
/// ```
/// use func_validator::bind::ValidateWithArgs;
/// use func_validator::validators::DependsOn;
/// use func_validator::bound_args;
/// use serde_json::json;
///
/// // `a` must be less than `b` (default positional strategy)
/// let v = DependsOn::new(["b"]);
/// let args = bound_args! { "a" => json!(3), "b" => json!(5) };
/// assert!(v.validate_with_args(&json!(3), "a", &args).is_ok());
///
/// let args = bound_args! { "a" => json!(10), "b" => json!(5) };
/// assert!(v.validate_with_args(&json!(10), "a", &args).is_err());
/// ```
#[derive(Clone)]
pub struct DependsOn {
    args_dependencies: Vec<String>,
    kw_dependencies: Vec<(String, Value)>,
    args_strategy: ArgsStrategy,
    kw_strategy: KwStrategy,
    args_err_msg: Option<ErrorTemplate>,
    kw_err_msg: Option<ErrorTemplate>,
    extra_msg_args: MessageArgs,
}

impl DependsOn {
    /// Creates the validator with positional dependency names.
    ///
    /// Pass an empty iterator and add keyword dependencies via
    /// [`on_value`](Self::on_value) for a purely conditional validator.
    pub fn new<I>(args_dependencies: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            args_dependencies: args_dependencies.into_iter().map(Into::into).collect(),
            kw_dependencies: Vec::new(),
            args_strategy: default_args_strategy(),
            kw_strategy: default_kw_strategy(),
            args_err_msg: None,
            kw_err_msg: None,
            extra_msg_args: MessageArgs::new(),
        }
    }

    /// Adds a keyword dependency: when `dep_name` resolves to
    /// `trigger_value`, the keyword strategy runs against this argument.
    #[must_use = "builder methods must be chained or built"]
    pub fn on_value(mut self, dep_name: impl Into<String>, trigger_value: impl Into<Value>) -> Self {
        self.kw_dependencies
            .push((dep_name.into(), trigger_value.into()));
        self
    }

    /// Replaces the positional strategy (default: less-than).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_args_strategy<F>(mut self, strategy: F) -> Self
    where
        F: Fn(Value, MessageSpec) -> DynArgValidator + Send + Sync + 'static,
    {
        self.args_strategy = Arc::new(strategy);
        self
    }

    /// Replaces the keyword strategy (default: [`MustBeProvided`]).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_kw_strategy<F>(mut self, strategy: F) -> Self
    where
        F: Fn(MessageSpec) -> DynArgValidator + Send + Sync + 'static,
    {
        self.kw_strategy = Arc::new(strategy);
        self
    }

    /// Overrides the message template for the positional path.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_args_err_msg(mut self, template: impl Into<ErrorTemplate>) -> Self {
        self.args_err_msg = Some(template.into());
        self
    }

    /// Overrides the message template for the keyword path.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_kw_err_msg(mut self, template: impl Into<ErrorTemplate>) -> Self {
        self.kw_err_msg = Some(template.into());
        self
    }

    /// Adds an extra `${placeholder}` substitution value for both paths.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_msg_arg(
        mut self,
        key: impl Into<std::borrow::Cow<'static, str>>,
        value: impl ToString,
    ) -> Self {
        self.extra_msg_args.push(key, value);
        self
    }

    /// Message spec for one dependency, with the dependency context as
    /// leading extras so custom templates can always reference them.
    fn spec_for(
        &self,
        template: &Option<ErrorTemplate>,
        dep_name: &str,
        dep_value: &Value,
    ) -> MessageSpec {
        let mut extra = MessageArgs::new()
            .with("dep_arg_name", dep_name)
            .with("dep_arg_value", dep_value);
        extra.extend_from(&self.extra_msg_args);
        MessageSpec {
            template: template.clone(),
            extra,
        }
    }
}

impl ValidateWithArgs for DependsOn {
    fn validate_with_args(
        &self,
        value: &Value,
        name: &str,
        args: &BoundArgs,
    ) -> Result<(), Error> {
        for dep_name in &self.args_dependencies {
            let dep_value = args.resolve(dep_name)?;
            let spec = self.spec_for(&self.args_err_msg, dep_name, dep_value);
            let strategy = (self.args_strategy)(dep_value.clone(), spec);
            strategy.validate(value, name)?;
        }

        for (dep_name, trigger_value) in &self.kw_dependencies {
            let dep_value = args.resolve(dep_name)?;
            if dep_value == trigger_value {
                let spec = self.spec_for(&self.kw_err_msg, dep_name, dep_value);
                let strategy = (self.kw_strategy)(spec);
                strategy.validate(value, name)?;
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for DependsOn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependsOn")
            .field("args_dependencies", &self.args_dependencies)
            .field("kw_dependencies", &self.kw_dependencies)
            .field("args_strategy", &"<factory>")
            .field("kw_strategy", &"<factory>")
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound_args;
    use crate::foundation::ConfigError;
    use crate::validators::numeric::MustBeGreaterThan;
    use serde_json::json;

    #[test]
    fn must_be_provided_truthiness() {
        let v = must_be_provided();
        assert!(v.validate(&json!(10), "width").is_ok());
        assert!(v.validate(&json!(null), "width").is_err());
        assert!(v.validate(&json!(""), "width").is_err());
        assert!(v.validate(&json!(0), "width").is_err());
    }

    #[test]
    fn positional_dependency_enforces_less_than() {
        let v = DependsOn::new(["b"]);

        let args = bound_args! { "a" => json!(3), "b" => json!(5) };
        assert!(v.validate_with_args(&json!(3), "a", &args).is_ok());

        let args = bound_args! { "a" => json!(10), "b" => json!(5) };
        assert!(v.validate_with_args(&json!(10), "a", &args).is_err());
    }

    #[test]
    fn positional_failure_message_names_the_dependency_value() {
        let v = DependsOn::new(["b"]);
        let args = bound_args! { "a" => json!(10), "b" => json!(5) };
        let err = v.validate_with_args(&json!(10), "a", &args).unwrap_err();
        assert_eq!(err.as_validation().unwrap().message, "a: 10 must be < 5.");
    }

    #[test]
    fn positional_custom_template_sees_dependency_context() {
        let v = DependsOn::new(["b"])
            .with_args_err_msg("${arg_name} must stay below ${dep_arg_name} (= ${dep_arg_value})");
        let args = bound_args! { "a" => json!(10), "b" => json!(5) };
        let err = v.validate_with_args(&json!(10), "a", &args).unwrap_err();
        assert_eq!(
            err.as_validation().unwrap().message,
            "a must stay below b (= 5)"
        );
    }

    #[test]
    fn custom_args_strategy_replaces_the_comparison() {
        let v = DependsOn::new(["b"]).with_args_strategy(|dep, msg| {
            Box::new(MustBeGreaterThan::new(dep).with_message_spec(msg))
        });
        let args = bound_args! { "a" => json!(10), "b" => json!(5) };
        assert!(v.validate_with_args(&json!(10), "a", &args).is_ok());
        let args = bound_args! { "a" => json!(1), "b" => json!(5) };
        assert!(v.validate_with_args(&json!(1), "a", &args).is_err());
    }

    #[test]
    fn keyword_dependency_triggers_on_matching_value() {
        let v = DependsOn::new(Vec::<String>::new()).on_value("shape", "rectangle");

        // trigger matched, width missing
        let args = bound_args! { "shape" => json!("rectangle"), "width" => json!(null) };
        assert!(v.validate_with_args(&json!(null), "width", &args).is_err());

        // trigger not matched
        let args = bound_args! { "shape" => json!("square"), "width" => json!(null) };
        assert!(v.validate_with_args(&json!(null), "width", &args).is_ok());

        // trigger matched, width provided
        let args = bound_args! { "shape" => json!("rectangle"), "width" => json!(10) };
        assert!(v.validate_with_args(&json!(10), "width", &args).is_ok());
    }

    #[test]
    fn keyword_failure_message_carries_the_trigger() {
        let v = DependsOn::new(Vec::<String>::new()).on_value("shape", "rectangle");
        let args = bound_args! { "shape" => json!("rectangle"), "width" => json!(null) };
        let err = v.validate_with_args(&json!(null), "width", &args).unwrap_err();
        assert_eq!(
            err.as_validation().unwrap().message,
            "width must be provided when shape has a value of \"rectangle\""
        );
    }

    #[test]
    fn both_dependency_kinds_are_checked() {
        let v = DependsOn::new(["cap"]).on_value("mode", "strict");

        // positional violated
        let args = bound_args! { "n" => json!(9), "cap" => json!(5), "mode" => json!("lax") };
        assert!(v.validate_with_args(&json!(9), "n", &args).is_err());

        // positional ok, keyword triggered on a falsy value
        let args = bound_args! { "n" => json!(0), "cap" => json!(5), "mode" => json!("strict") };
        assert!(v.validate_with_args(&json!(0), "n", &args).is_err());

        // both satisfied
        let args = bound_args! { "n" => json!(3), "cap" => json!(5), "mode" => json!("lax") };
        assert!(v.validate_with_args(&json!(3), "n", &args).is_ok());
    }

    #[test]
    fn dependency_resolves_through_the_receiver() {
        let v = DependsOn::new(["limit"]);
        let args = bound_args! {
            "self" => json!({"limit": 10}),
            "n" => json!(7),
        };
        assert!(v.validate_with_args(&json!(7), "n", &args).is_ok());
        let args = bound_args! {
            "self" => json!({"limit": 10}),
            "n" => json!(12),
        };
        assert!(v.validate_with_args(&json!(12), "n", &args).is_err());
    }

    #[test]
    fn unresolvable_dependency_is_a_config_error() {
        let v = DependsOn::new(["ghost"]);
        let args = bound_args! { "n" => json!(1) };
        let err = v.validate_with_args(&json!(1), "n", &args).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingDependency(ref name)) if name == "ghost"
        ));
    }

    #[test]
    fn shared_instances_are_reusable_across_calls() {
        let v = DependsOn::new(["b"]);
        let small = bound_args! { "a" => json!(1), "b" => json!(5) };
        let large = bound_args! { "a" => json!(9), "b" => json!(5) };

        // interleaved calls see only their own argument map
        assert!(v.validate_with_args(&json!(1), "a", &small).is_ok());
        assert!(v.validate_with_args(&json!(9), "a", &large).is_err());
        assert!(v.validate_with_args(&json!(1), "a", &small).is_ok());
    }
}
