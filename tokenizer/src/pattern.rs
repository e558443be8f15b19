// This file is part of tokenizer, a string splitting library.
// Copyright (C) 2026 The tokenizer authors

//! Splitting on regular expression matches
//!
//! A [`Pattern`] is a compiled regular expression used as a delimiter. The
//! text between successive non-overlapping matches makes the tokens; the
//! matched text itself is discarded.
//!
//! Patterns are compiled by the [`regex`] crate and use its syntax. Matching
//! takes time linear in the input length regardless of the pattern, and the
//! compiled size of a pattern is bounded by [`Config::size_limit`], so
//! untrusted patterns cannot cause catastrophic backtracking.
//!
//! ```
//! use tokenizer::Pattern;
//! let pattern = Pattern::new(r"\s*[,;]\s*").unwrap();
//! assert_eq!(pattern.split("a , b;c"), ["a", "b", "c"]);
//!
//! // A match spanning the whole input leaves an empty token on each side:
//! let pattern = Pattern::new("abc").unwrap();
//! assert_eq!(pattern.split("abc"), ["", ""]);
//! ```

use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use std::str::FromStr;
use tracing::{debug, trace};

/// Options for compiling a [`Pattern`]
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    /// Whether letters match regardless of case
    pub case_insensitive: bool,
    /// Whether `^` and `$` match at line boundaries as well as at the ends of
    /// the input
    pub multi_line: bool,
    /// Approximate upper bound in bytes for the size of the compiled pattern
    pub size_limit: usize,
    /// Upper bound for the nesting depth of the pattern syntax
    pub nest_limit: u32,
}

impl Config {
    /// Default value of [`size_limit`](Self::size_limit): 1 MiB
    pub const DEFAULT_SIZE_LIMIT: usize = 1 << 20;

    /// Default value of [`nest_limit`](Self::nest_limit)
    pub const DEFAULT_NEST_LIMIT: u32 = 250;
}

impl Default for Config {
    fn default() -> Self {
        Config {
            case_insensitive: false,
            multi_line: false,
            size_limit: Self::DEFAULT_SIZE_LIMIT,
            nest_limit: Self::DEFAULT_NEST_LIMIT,
        }
    }
}

/// Compiled regular expression used as a delimiter
#[derive(Clone, Debug)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles a pattern with the default configuration.
    #[inline]
    pub fn new(pattern: &str) -> Result<Self> {
        Self::with_config(pattern, &Config::default())
    }

    /// Compiles a pattern with the given configuration.
    ///
    /// Returns [`Error::Pattern`] if the pattern is not a valid regular
    /// expression or exceeds the limits of the configuration.
    pub fn with_config(pattern: &str, config: &Config) -> Result<Self> {
        let result = RegexBuilder::new(pattern)
            .case_insensitive(config.case_insensitive)
            .multi_line(config.multi_line)
            .size_limit(config.size_limit)
            .nest_limit(config.nest_limit)
            .build();
        match result {
            Ok(regex) => {
                trace!(pattern, "compiled delimiter pattern");
                Ok(Pattern { regex })
            }
            Err(error) => {
                debug!(pattern, %error, "invalid delimiter pattern");
                Err(Error::Pattern(error))
            }
        }
    }

    /// Returns the source text of the pattern.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns the compiled regular expression.
    #[inline]
    #[must_use]
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    /// Splits the input at every match of the pattern.
    ///
    /// If the pattern does not match anywhere, the result is the whole input
    /// as a single token.
    #[must_use]
    pub fn split<'h>(&self, input: &'h str) -> Vec<&'h str> {
        self.split_iter(input).collect()
    }

    /// Returns an iterator over the tokens [`split`](Self::split) would
    /// return.
    #[inline]
    pub fn split_iter<'r, 'h>(&'r self, input: &'h str) -> regex::Split<'r, 'h> {
        self.regex.split(input)
    }

    /// Splits the input and appends the tokens to a collection.
    pub fn split_into<'h, R>(&self, input: &'h str, results: &mut R)
    where
        R: Extend<&'h str>,
    {
        results.extend(self.split_iter(input))
    }
}

/// The `==` operator compares [`self.as_str()`](Self::as_str).
///
/// That means two patterns that match the same strings compare unequal if
/// they are spelled differently.
impl PartialEq for Pattern {
    #[inline]
    fn eq(&self, other: &Pattern) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl FromStr for Pattern {
    type Err = Error;
    #[inline]
    fn from_str(s: &str) -> Result<Self> {
        Pattern::new(s)
    }
}

/// Compiles the pattern and splits the input at every match.
///
/// This is a shorthand for [`Pattern::new`] followed by [`Pattern::split`].
/// Prefer compiling a [`Pattern`] once when splitting many inputs.
///
/// ```
/// # use tokenizer::split_by_regex;
/// assert_eq!(split_by_regex("a1b22c", "[0-9]+").unwrap(), ["a", "b", "c"]);
/// assert!(split_by_regex("abc", "(").is_err());
/// ```
pub fn split_by_regex<'h>(input: &'h str, pattern: &str) -> Result<Vec<&'h str>> {
    Ok(Pattern::new(pattern)?.split(input))
}
