// This file is part of tokenizer, a string splitting library.
// Copyright (C) 2026 The tokenizer authors

//! Splitting on a separator substring
//!
//! The separator is matched as a whole. After a match, the search resumes
//! just after the matched span, so matches never overlap:
//!
//! ```
//! use tokenizer::split_by_str;
//! assert_eq!(split_by_str("aXXbXXc", "XX"), ["a", "b", "c"]);
//! assert_eq!(split_by_str("aXXXb", "XX"), ["a", "Xb"]);
//! assert_eq!(split_by_str("aaaa", "aa"), ["", "", ""]);
//! ```
//!
//! # The empty separator
//!
//! An empty separator has no well-defined place to cut the input, so it is
//! treated as a separator that never occurs: the whole input is returned as
//! one token. Use [`Substring::try_new`] to reject an empty separator
//! instead.
//!
//! ```
//! # use tokenizer::split_by_str;
//! assert_eq!(split_by_str("aXXbXXc", ""), ["aXXbXXc"]);
//! ```

use crate::delimit::{Delimit, Split};
use crate::error::{Error, Result};
use std::ops::Range;

impl Delimit for str {
    fn find_in(&self, haystack: &str) -> Option<Range<usize>> {
        if self.is_empty() {
            return None;
        }
        haystack.find(self).map(|i| i..i + self.len())
    }
}

/// Non-empty separator substring
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Substring<'d>(&'d str);

impl<'d> Substring<'d> {
    /// Wraps the separator.
    ///
    /// Returns [`Error::EmptyDelimiter`] if the separator is empty.
    pub fn try_new(separator: &'d str) -> Result<Self> {
        if separator.is_empty() {
            Err(Error::EmptyDelimiter)
        } else {
            Ok(Substring(separator))
        }
    }

    /// Returns the separator.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'d str {
        self.0
    }
}

impl<'d> TryFrom<&'d str> for Substring<'d> {
    type Error = Error;
    #[inline]
    fn try_from(separator: &'d str) -> Result<Self> {
        Substring::try_new(separator)
    }
}

impl Delimit for Substring<'_> {
    #[inline]
    fn find_in(&self, haystack: &str) -> Option<Range<usize>> {
        self.0.find_in(haystack)
    }
}

/// Splits the input at every non-overlapping occurrence of the separator.
///
/// If the separator does not occur or is empty, the result is the whole input
/// as a single token.
#[must_use]
pub fn split_by_str<'a>(input: &'a str, separator: &str) -> Vec<&'a str> {
    split_by_str_iter(input, separator).collect()
}

/// Returns an iterator over the tokens [`split_by_str`] would return.
#[inline]
pub fn split_by_str_iter<'a, 'd>(input: &'a str, separator: &'d str) -> Split<'a, &'d str> {
    Split::new(input, separator)
}
