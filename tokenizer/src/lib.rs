// This file is part of tokenizer, a string splitting library.
// Copyright (C) 2026 The tokenizer authors

//! This crate provides functions that split a string into tokens.
//!
//! A token is a substring of the input between two delimiter occurrences. The
//! delimiter may be:
//!
//! - a single character ([`split_by_char`]),
//! - any character of a set ([`split_by_chars`], [`split_by_any`]),
//! - a substring ([`split_by_str`]), or
//! - a match of a regular expression ([`split_by_regex`], [`Pattern`]).
//!
//! All the splitters share the same rules:
//!
//! - The delimiter itself is not included in the tokens.
//! - Tokens are returned in the order they appear in the input, and they
//!   borrow from the input.
//! - Two adjacent delimiters produce an empty token between them, and a
//!   delimiter at either end of the input produces an empty token at that end.
//! - If the delimiter does not occur, the whole input is the only token. The
//!   empty input therefore yields one empty token.
//!
//! For the literal delimiters, this means there is always one more token than
//! there are delimiter occurrences, and joining the tokens with the delimiter
//! gives back the original input.
//!
//! [`split_terminated`] is a variant that regards the delimiter as a token
//! terminator, as in reading lines: no empty token is produced after the last
//! delimiter.
//!
//! # Examples
//!
//! ```
//! use tokenizer::{CharSet, split_by_char, split_by_chars, split_by_regex, split_by_str};
//!
//! assert_eq!(split_by_char("41 42 43", ' '), ["41", "42", "43"]);
//! assert_eq!(split_by_char("a,,b", ','), ["a", "", "b"]);
//! assert_eq!(split_by_chars("k=v+w", &CharSet::new("+=")), ["k", "v", "w"]);
//! assert_eq!(split_by_str("1<>2<>3", "<>"), ["1", "2", "3"]);
//! assert_eq!(split_by_regex("1 +  2", r"\s*\+\s*").unwrap(), ["1", "2"]);
//! ```
//!
//! Each splitter also comes in a lazy form that returns an iterator, such as
//! [`split_by_char_iter`]. The [`delimit`] module contains the [`Delimit`]
//! trait the literal splitters are built on, which can be implemented to
//! split on other kinds of delimiters.
//!
//! # Errors
//!
//! Splitting never fails. Only constructing a delimiter can: an invalid
//! regular expression yields [`Error::Pattern`], and the strict constructors
//! [`CharSet::try_new`] and [`Substring::try_new`] reject empty delimiters
//! with [`Error::EmptyDelimiter`]. The lenient functions treat an empty
//! delimiter as one that never occurs.

pub mod delimit;
mod error;
mod pattern;
mod set;
mod single;
mod substring;

pub use self::delimit::{Delimit, Split, Terminated};
pub use self::error::{Error, Result};
pub use self::pattern::{Config, Pattern, split_by_regex};
pub use self::set::{CharSet, split_by_any, split_by_chars, split_by_chars_iter};
pub use self::single::{split_by_char, split_by_char_iter, split_terminated};
pub use self::substring::{Substring, split_by_str, split_by_str_iter};

/// Delimiter of any kind
///
/// This enum lets the kind of delimiter be chosen at run time. Constructing a
/// `Delimiter` is the only fallible step; splitting with it always succeeds.
///
/// ```
/// # use tokenizer::{Delimiter, Pattern};
/// let comma = Delimiter::from(',');
/// let arrow = Delimiter::from("->");
/// let digits = Delimiter::from(Pattern::new("[0-9]+").unwrap());
/// assert_eq!(comma.split("a,b"), ["a", "b"]);
/// assert_eq!(arrow.split("a->b"), ["a", "b"]);
/// assert_eq!(digits.split("a42b"), ["a", "b"]);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Delimiter<'d> {
    /// Single character
    Char(char),
    /// Any character of a set
    Chars(CharSet),
    /// Substring
    Str(&'d str),
    /// Regular expression match
    Pattern(Pattern),
}

impl Delimiter<'_> {
    /// Splits the input at every occurrence of this delimiter.
    #[must_use]
    pub fn split<'a>(&self, input: &'a str) -> Vec<&'a str> {
        let mut tokens = Vec::new();
        self.split_into(input, &mut tokens);
        tokens
    }

    /// Splits the input and appends the tokens to a collection.
    pub fn split_into<'a, R>(&self, input: &'a str, results: &mut R)
    where
        R: Extend<&'a str>,
    {
        match self {
            Delimiter::Char(c) => delimit::split_into(input, *c, results),
            Delimiter::Chars(set) => delimit::split_into(input, set, results),
            Delimiter::Str(s) => delimit::split_into(input, *s, results),
            Delimiter::Pattern(pattern) => pattern.split_into(input, results),
        }
    }
}

impl From<char> for Delimiter<'_> {
    #[inline]
    fn from(c: char) -> Self {
        Delimiter::Char(c)
    }
}

impl From<CharSet> for Delimiter<'_> {
    #[inline]
    fn from(set: CharSet) -> Self {
        Delimiter::Chars(set)
    }
}

impl<'d> From<&'d str> for Delimiter<'d> {
    #[inline]
    fn from(s: &'d str) -> Self {
        Delimiter::Str(s)
    }
}

impl<'d> From<Substring<'d>> for Delimiter<'d> {
    #[inline]
    fn from(s: Substring<'d>) -> Self {
        Delimiter::Str(s.as_str())
    }
}

impl From<Pattern> for Delimiter<'_> {
    #[inline]
    fn from(pattern: Pattern) -> Self {
        Delimiter::Pattern(pattern)
    }
}
