//! Text validators
//!
//! Regex matching with three distinct evaluation modes: anchored-prefix
//! match, whole-string match, and unanchored substring search. The mode
//! is fixed at construction, where the pattern is compiled once — an
//! invalid pattern or mode never survives to call time.

use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};

use crate::foundation::{ConfigError, Error, MessageArgs, MessageSpec, Validate};
use crate::macros::message_options;

/// Template for pattern-match failures.
pub const TEXT_VALIDATOR_ERR_MSG: &str = "${arg_name}: ${arg_value} does not match ${to}";

// ============================================================================
// MATCH MODE
// ============================================================================

/// How a pattern is evaluated against the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// The pattern must match at the start of the input.
    #[default]
    Match,
    /// The pattern must match the entire input.
    FullMatch,
    /// The pattern may match anywhere in the input.
    Search,
}

impl MatchMode {
    /// Wraps a pattern with the anchors this mode requires.
    fn anchor(self, pattern: &str) -> String {
        match self {
            MatchMode::Match => format!(r"\A(?:{pattern})"),
            MatchMode::FullMatch => format!(r"\A(?:{pattern})\z"),
            MatchMode::Search => pattern.to_string(),
        }
    }
}

impl FromStr for MatchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "match" => Ok(MatchMode::Match),
            "fullmatch" => Ok(MatchMode::FullMatch),
            "search" => Ok(MatchMode::Search),
            other => Err(ConfigError::InvalidMatchMode(other.to_string())),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchMode::Match => "match",
            MatchMode::FullMatch => "fullmatch",
            MatchMode::Search => "search",
        };
        f.write_str(name)
    }
}

// ============================================================================
// REGEX FLAGS
// ============================================================================

/// Flags passed through to the regex compiler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegexFlags {
    /// Letters match case-insensitively.
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `.` also matches `\n`.
    pub dot_matches_new_line: bool,
    /// Whitespace in the pattern is ignored, `#` starts a comment.
    pub ignore_whitespace: bool,
}

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

/// Validates that a string matches a pattern under the configured mode.
///
/// ```
/// use func_validator::validators::{MatchMode, MustMatchRegex};
/// use func_validator::foundation::Validate;
///
/// let full = MustMatchRegex::new(r"\d+", MatchMode::FullMatch).unwrap();
/// assert!(full.validate("456", "code").is_ok());
/// assert!(full.validate("456abc", "code").is_err());
///
/// // prefix match accepts what fullmatch rejects
/// let prefix = MustMatchRegex::new(r"\d+", MatchMode::Match).unwrap();
/// assert!(prefix.validate("456abc", "code").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct MustMatchRegex {
    regex: Regex,
    pattern: Box<str>,
    mode: MatchMode,
    msg: MessageSpec,
}

impl MustMatchRegex {
    message_options!(TEXT_VALIDATOR_ERR_MSG);

    /// Compiles `pattern` for the given mode.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPattern`] when the pattern does not compile.
    pub fn new(pattern: &str, mode: MatchMode) -> Result<Self, ConfigError> {
        let regex = Regex::new(&mode.anchor(pattern))?;
        Ok(Self {
            regex,
            pattern: pattern.into(),
            mode,
            msg: MessageSpec::new(),
        })
    }

    /// Compiles `pattern` with explicit flags.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPattern`] when the pattern does not compile.
    pub fn with_flags(
        pattern: &str,
        mode: MatchMode,
        flags: RegexFlags,
    ) -> Result<Self, ConfigError> {
        let regex = RegexBuilder::new(&mode.anchor(pattern))
            .case_insensitive(flags.case_insensitive)
            .multi_line(flags.multi_line)
            .dot_matches_new_line(flags.dot_matches_new_line)
            .ignore_whitespace(flags.ignore_whitespace)
            .build()?;
        Ok(Self {
            regex,
            pattern: pattern.into(),
            mode,
            msg: MessageSpec::new(),
        })
    }

    /// Reuses an already-compiled pattern.
    ///
    /// The pattern source is re-anchored for the given mode. Inline flags
    /// such as `(?i)` survive; flags set through a builder are not part of
    /// the pattern source and are dropped.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPattern`] when re-anchoring fails to compile.
    pub fn from_regex(regex: &Regex, mode: MatchMode) -> Result<Self, ConfigError> {
        Self::new(regex.as_str(), mode)
    }

    /// The configured match mode.
    #[must_use]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// The original, unanchored pattern source.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Validate for MustMatchRegex {
    type Input = str;

    fn validate(&self, value: &Self::Input, name: &str) -> Result<(), Error> {
        if self.regex.is_match(value) {
            return Ok(());
        }
        let required = MessageArgs::new()
            .with("arg_name", name)
            .with("arg_value", value)
            .with("to", &self.pattern);
        Err(self
            .msg
            .fail("must_match_regex", TEXT_VALIDATOR_ERR_MSG, required)
            .into())
    }
}

/// Creates a [`MustMatchRegex`] for the given mode.
pub fn must_match_regex(pattern: &str, mode: MatchMode) -> Result<MustMatchRegex, ConfigError> {
    MustMatchRegex::new(pattern, mode)
}

// ============================================================================
// TESTS
// ============================================================================
