//! Call-binding layer
//!
//! The host wiring (decorators, reflection, code generation) is out of
//! scope; this module is the explicit interface it talks to. A call is
//! presented as an ordered list of [`Param`] records — `(name, value,
//! rules)` — and [`validate_call`] applies every attached rule fail-fast
//! before the host lets the wrapped function run.
//!
//! [`BoundArgs`] is the name→value map of the whole call. It is built
//! once per call and passed *explicitly* to dependency-aware validators,
//! so no validator ever holds per-call state.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, trace};

use crate::foundation::{ConfigError, Error, Validate};
use crate::json::FromValue;

/// Map key under which a method receiver is bound.
///
/// Dependency resolution falls back to field lookup on this entry when a
/// name is not an argument of the call itself.
pub const RECEIVER_KEY: &str = "self";

// ============================================================================
// BOUND ARGS
// ============================================================================

/// The name→value mapping of one call's bound arguments, in declaration
/// order, after the callee's defaults have been applied.
///
/// Lifetime: one call. Validators never store it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundArgs {
    args: IndexMap<String, Value>,
}

impl BoundArgs {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.args.insert(name.into(), value.into());
    }

    /// Direct lookup of a bound argument.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }

    /// Resolves a dependency name.
    ///
    /// Tries a direct argument lookup first; failing that, looks the name
    /// up as a field of the object bound under [`RECEIVER_KEY`], which
    /// supports instance-method validation against sibling attributes.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingDependency`] when neither path resolves.
    pub fn resolve(&self, name: &str) -> Result<&Value, ConfigError> {
        if let Some(value) = self.args.get(name) {
            return Ok(value);
        }
        self.args
            .get(RECEIVER_KEY)
            .and_then(Value::as_object)
            .and_then(|receiver| receiver.get(name))
            .ok_or_else(|| ConfigError::MissingDependency(name.to_string()))
    }

    /// Iterates bindings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.args.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of bound arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Returns true when no arguments are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for BoundArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (name, value) in iter {
            args.insert(name, value);
        }
        args
    }
}

// ============================================================================
// CONTEXT-AWARE VALIDATION
// ============================================================================

/// Validation that needs the whole call's bound arguments.
///
/// The map arrives as an explicit call parameter; validators never stash
/// it in instance state between binding and invocation, so an instance
/// can serve concurrent calls.
pub trait ValidateWithArgs {
    /// Validates `value` for the argument `name`, with the full call
    /// context available for dependency resolution.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for rule violations,
    /// [`Error::Config`] for unresolvable dependencies and misuse.
    fn validate_with_args(&self, value: &Value, name: &str, args: &BoundArgs)
    -> Result<(), Error>;
}

impl<V: ValidateWithArgs + ?Sized> ValidateWithArgs for Box<V> {
    fn validate_with_args(
        &self,
        value: &Value,
        name: &str,
        args: &BoundArgs,
    ) -> Result<(), Error> {
        (**self).validate_with_args(value, name, args)
    }
}

/// A boxed validator over dynamically bound values.
pub type DynArgValidator = Box<dyn Validate<Input = Value> + Send + Sync>;

/// A boxed context-aware validator.
pub type DynContextValidator = Box<dyn ValidateWithArgs + Send + Sync>;

// ============================================================================
// ARG RULES
// ============================================================================

/// One validator attached to one parameter.
///
/// `new` adapts any statically typed validator whose input is projectable
/// from a `Value`; `contextual` wraps a dependency-aware validator.
pub enum ArgRule {
    /// A plain validator over the argument's own value.
    Plain(DynArgValidator),
    /// A validator that also sees the whole call's bound arguments.
    Contextual(DynContextValidator),
}

impl ArgRule {
    /// Adapts a typed validator to dynamically bound arguments.
    pub fn new<V>(validator: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
        V::Input: FromValue,
    {
        ArgRule::Plain(Box::new(Projected(validator)))
    }

    /// Wraps a context-aware validator.
    pub fn contextual<V>(validator: V) -> Self
    where
        V: ValidateWithArgs + Send + Sync + 'static,
    {
        ArgRule::Contextual(Box::new(validator))
    }

    /// Applies the rule.
    ///
    /// # Errors
    ///
    /// Whatever the underlying validator reports.
    pub fn check(&self, value: &Value, name: &str, args: &BoundArgs) -> Result<(), Error> {
        match self {
            ArgRule::Plain(v) => v.validate(value, name),
            ArgRule::Contextual(v) => v.validate_with_args(value, name, args),
        }
    }
}

impl std::fmt::Debug for ArgRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgRule::Plain(_) => f.write_str("ArgRule::Plain(..)"),
            ArgRule::Contextual(_) => f.write_str("ArgRule::Contextual(..)"),
        }
    }
}

/// Adapter running a typed validator against a projected `Value`.
struct Projected<V>(V);

impl<V> Validate for Projected<V>
where
    V: Validate,
    V::Input: FromValue,
{
    type Input = Value;

    fn validate(&self, value: &Self::Input, name: &str) -> Result<(), Error> {
        use std::borrow::Borrow;

        let view = <V::Input as FromValue>::from_value(value)?;
        self.0.validate(view.borrow(), name)
    }
}

// ============================================================================
// PARAMS AND CALL VALIDATION
// ============================================================================

/// One parameter of a call: its name, its bound value, and the rules
/// attached to it.
#[derive(Debug)]
pub struct Param {
    name: String,
    value: Value,
    rules: Vec<ArgRule>,
}

impl Param {
    /// Creates a parameter record with no rules.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            rules: Vec::new(),
        }
    }

    /// Attaches a typed validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<V>(mut self, validator: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
        V::Input: FromValue,
    {
        self.rules.push(ArgRule::new(validator));
        self
    }

    /// Attaches a context-aware validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn contextual_rule<V>(mut self, validator: V) -> Self
    where
        V: ValidateWithArgs + Send + Sync + 'static,
    {
        self.rules.push(ArgRule::contextual(validator));
        self
    }

    /// The parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Validates one call.
///
/// Builds the bound-argument map from every parameter, then applies each
/// parameter's rules in declaration order. The first failure — validation
/// or configuration — aborts the rest, per the fail-fast policy.
///
/// ```
/// use func_validator::bind::{Param, validate_call};
/// use func_validator::validators::{DependsOn, must_be_positive};
/// use serde_json::json;
///
/// let params = [
///     Param::new("a", json!(3)).rule(must_be_positive::<f64>()).contextual_rule(DependsOn::new(["b"])),
///     Param::new("b", json!(5)),
/// ];
/// assert!(validate_call(&params).is_ok()); // 3 > 0 and 3 < 5
/// ```
///
/// # Errors
///
/// The first [`Error`] any rule reports.
pub fn validate_call(params: &[Param]) -> Result<(), Error> {
    let bound: BoundArgs = params
        .iter()
        .map(|p| (p.name.clone(), p.value.clone()))
        .collect();

    for param in params {
        trace!(arg = %param.name, rules = param.rules.len(), "validating argument");
        for rule in &param.rules {
            if let Err(error) = rule.check(&param.value, &param.name, &bound) {
                debug!(arg = %param.name, %error, "argument validation failed");
                return Err(error);
            }
        }
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{must_be_greater_than, must_be_positive, must_match_regex, MatchMode};
    use serde_json::json;

    #[test]
    fn bound_args_preserve_declaration_order() {
        let args: BoundArgs = [("b", json!(1)), ("a", json!(2))].into_iter().collect();
        let names: Vec<&str> = args.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn resolve_prefers_direct_bindings() {
        let args = crate::bound_args! {
            "width" => json!(3),
            "self" => json!({"width": 99}),
        };
        assert_eq!(args.resolve("width").unwrap(), &json!(3));
    }

    #[test]
    fn resolve_falls_back_to_receiver_fields() {
        let args = crate::bound_args! {
            "self" => json!({"limit": 10}),
            "n" => json!(5),
        };
        assert_eq!(args.resolve("limit").unwrap(), &json!(10));
    }

    #[test]
    fn resolve_reports_missing_dependency() {
        let args = crate::bound_args! { "n" => json!(5) };
        let err = args.resolve("ghost").unwrap_err();
        assert!(matches!(err, ConfigError::MissingDependency(ref name) if name == "ghost"));
    }

    #[test]
    fn typed_rules_project_from_values() {
        let rule = ArgRule::new(must_be_greater_than(2.0));
        let args = BoundArgs::new();
        assert!(rule.check(&json!(3), "n", &args).is_ok());
        assert!(rule.check(&json!(1), "n", &args).is_err());
    }

    #[test]
    fn projection_mismatch_is_config_not_validation() {
        let rule = ArgRule::new(must_match_regex(r"\d+", MatchMode::FullMatch).unwrap());
        let args = BoundArgs::new();
        let err = rule.check(&json!(42), "code", &args).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn validate_call_is_fail_fast() {
        let params = [
            Param::new("first", json!(-1)).rule(must_be_positive::<f64>()),
            Param::new("second", json!(-2)).rule(must_be_positive::<f64>()),
        ];
        let err = validate_call(&params).unwrap_err();
        let message = &err.as_validation().unwrap().message;
        assert!(message.starts_with("first"), "unexpected message: {message}");
    }

    #[test]
    fn validate_call_passes_clean_calls() {
        let params = [
            Param::new("a", json!(1)).rule(must_be_positive::<f64>()),
            Param::new("b", json!("unvalidated")),
        ];
        assert!(validate_call(&params).is_ok());
    }
}
