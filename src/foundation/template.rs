//! Templated error messages
//!
//! Every validator renders its failure message from an [`ErrorTemplate`]
//! with named `${placeholder}` substitutions. Rendering is safe: a
//! placeholder with no matching argument passes through verbatim instead
//! of failing, so a validator can omit optional context (or a custom
//! template can mention placeholders a different strategy fills in).
//!
//! [`MessageArgs`] keeps substitutions as ordered key→value pairs with a
//! first-entry-wins lookup, which is what guarantees caller-supplied
//! extras never override the placeholders a validator fills itself.

use std::borrow::Cow;
use std::sync::LazyLock;

use smallvec::SmallVec;

use crate::foundation::error::ValidationError;

static PLACEHOLDER: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

// ============================================================================
// MESSAGE ARGS
// ============================================================================

/// Ordered key→value substitution arguments for a message template.
///
/// Most messages carry 3-4 params, so the pairs live inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageArgs {
    entries: SmallVec<[(Cow<'static, str>, String); 4]>,
}

impl MessageArgs {
    /// Creates an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a key→value pair.
    ///
    /// The value is captured via `ToString`, so any `Display` type works.
    pub fn push(&mut self, key: impl Into<Cow<'static, str>>, value: impl ToString) {
        self.entries.push((key.into(), value.to_string()));
    }

    /// Builder-style [`push`](Self::push).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<Cow<'static, str>>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Looks up the first value stored under `key`.
    ///
    /// First entry wins: later duplicates are additive context only and
    /// never shadow what a validator filled in first.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_str())
    }

    /// Appends every entry of `other`.
    pub fn extend_from(&mut self, other: &MessageArgs) {
        self.entries.extend(other.entries.iter().cloned());
    }

    /// Iterates the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &String)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v))
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<Cow<'static, str>>, V: ToString> FromIterator<(K, V)> for MessageArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (k, v) in iter {
            args.push(k, v);
        }
        args
    }
}

// ============================================================================
// ERROR TEMPLATE
// ============================================================================

/// A message template with named `${placeholder}` substitutions.
///
/// # Examples
///
/// ```rust,ignore
/// use func_validator::foundation::{ErrorTemplate, MessageArgs};
///
/// let tpl = ErrorTemplate::borrowed("${arg_name}: ${arg_value} must be ${fn_symbol} ${to}.");
/// let args = MessageArgs::new()
///     .with("arg_name", "age")
///     .with("arg_value", 17)
///     .with("fn_symbol", ">=")
///     .with("to", 18);
/// assert_eq!(tpl.render(&args), "age: 17 must be >= 18.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorTemplate(Cow<'static, str>);

impl ErrorTemplate {
    /// Wraps a static template string without allocating.
    #[must_use]
    pub const fn borrowed(template: &'static str) -> Self {
        Self(Cow::Borrowed(template))
    }

    /// Creates a template from any string-like value.
    pub fn new(template: impl Into<Cow<'static, str>>) -> Self {
        Self(template.into())
    }

    /// The raw template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders the template, substituting every `${name}` placeholder that
    /// has a matching argument. Unresolved placeholders are left verbatim.
    #[must_use]
    pub fn render(&self, args: &MessageArgs) -> String {
        PLACEHOLDER
            .replace_all(&self.0, |caps: &regex::Captures<'_>| {
                args.get(&caps[1])
                    .map_or_else(|| caps[0].to_string(), str::to_string)
            })
            .into_owned()
    }

    /// The placeholder names this template mentions, in order of first
    /// appearance.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&str> {
        PLACEHOLDER
            .captures_iter(&self.0)
            .map(|caps| caps.get(1).unwrap().as_str())
            .collect()
    }
}

impl From<&'static str> for ErrorTemplate {
    fn from(template: &'static str) -> Self {
        Self::borrowed(template)
    }
}

impl From<String> for ErrorTemplate {
    fn from(template: String) -> Self {
        Self(Cow::Owned(template))
    }
}

// ============================================================================
// MESSAGE SPEC
// ============================================================================

/// Per-validator message configuration: the optional template override
/// plus caller-supplied extra substitution arguments.
///
/// Every built-in validator holds one of these; strategy factories (see
/// `DependsOn`) receive one pre-populated with the dependency context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSpec {
    /// Replaces the validator's `DEFAULT_ERROR_MSG` when set.
    pub template: Option<ErrorTemplate>,
    /// Extra placeholder values merged in at render time, additively.
    pub extra: MessageArgs,
}

impl MessageSpec {
    /// Creates an empty spec (default template, no extras).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders a [`ValidationError`] from this spec.
    ///
    /// `required` holds the placeholders the validator guarantees to fill;
    /// extras are appended after, so they can never shadow required keys.
    #[must_use]
    pub fn fail(&self, code: &'static str, default: &'static str, mut required: MessageArgs) -> ValidationError {
        required.extend_from(&self.extra);
        let template = self
            .template
            .clone()
            .unwrap_or(ErrorTemplate::borrowed(default));
        let message = template.render(&required);
        ValidationError::new(code, message).with_params(required)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_known_placeholder() {
        let tpl = ErrorTemplate::borrowed("${arg_name}: ${arg_value} must be ${fn_symbol} ${to}.");
        let args = MessageArgs::new()
            .with("arg_name", "x")
            .with("arg_value", 4)
            .with("fn_symbol", ">")
            .with("to", 5);
        assert_eq!(tpl.render(&args), "x: 4 must be > 5.");
    }

    #[test]
    fn unresolved_placeholders_pass_through_verbatim() {
        let tpl = ErrorTemplate::borrowed("${arg_name} needs ${mystery}");
        let args = MessageArgs::new().with("arg_name", "x");
        assert_eq!(tpl.render(&args), "x needs ${mystery}");
    }

    #[test]
    fn malformed_placeholders_are_plain_text() {
        let tpl = ErrorTemplate::borrowed("cost is ${ not a placeholder } or $5");
        assert_eq!(tpl.render(&MessageArgs::new()), "cost is ${ not a placeholder } or $5");
    }

    #[test]
    fn first_entry_wins_on_duplicate_keys() {
        let mut args = MessageArgs::new();
        args.push("to", "5");
        args.push("to", "override attempt");
        assert_eq!(args.get("to"), Some("5"));

        let tpl = ErrorTemplate::borrowed("${to}");
        assert_eq!(tpl.render(&args), "5");
    }

    #[test]
    fn placeholders_are_listed_in_order() {
        let tpl = ErrorTemplate::borrowed("${arg_name}: ${arg_value} vs ${to}");
        assert_eq!(tpl.placeholders(), vec!["arg_name", "arg_value", "to"]);
    }

    #[test]
    fn spec_extras_are_additive_only() {
        let spec = MessageSpec {
            template: Some(ErrorTemplate::borrowed("${arg_name} ${hint}")),
            extra: MessageArgs::new()
                .with("hint", "try harder")
                .with("arg_name", "shadow attempt"),
        };
        let required = MessageArgs::new().with("arg_name", "x");
        let err = spec.fail("code", "unused", required);
        assert_eq!(err.message, "x try harder");
    }

    #[test]
    fn spec_falls_back_to_default_template() {
        let spec = MessageSpec::new();
        let err = spec.fail(
            "code",
            "${arg_name} broke",
            MessageArgs::new().with("arg_name", "x"),
        );
        assert_eq!(err.message, "x broke");
        assert_eq!(err.code, "code");
    }
}
