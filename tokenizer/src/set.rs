// This file is part of tokenizer, a string splitting library.
// Copyright (C) 2026 The tokenizer authors

//! Splitting on any of a set of characters
//!
//! [`CharSet`] is a collection of delimiter characters. Any member of the set
//! delimits a token wherever it occurs in the input; the order in which the
//! members were given does not matter.
//!
//! ```
//! use tokenizer::{CharSet, split_by_chars};
//! let delimiters = CharSet::new("+=");
//! let tokens = split_by_chars("To+jest=prosty=test+raz=dwa", &delimiters);
//! assert_eq!(tokens, ["To", "jest", "prosty", "test", "raz", "dwa"]);
//!
//! // Adjacent delimiters of different kinds still produce an empty token:
//! assert_eq!(split_by_chars("a+=b", &delimiters), ["a", "", "b"]);
//! ```

use crate::delimit::{Delimit, Split};
use crate::error::{Error, Result};
use std::ops::Range;

/// Set of delimiter characters
///
/// ASCII members are kept in a bitmap so that testing an ASCII character is a
/// single bit operation. Other members are kept in a sorted vector.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct CharSet {
    ascii: u128,
    non_ascii: Vec<char>,
}

impl CharSet {
    /// Creates a set containing the characters of the given string.
    ///
    /// Duplicate characters are ignored. An empty string makes an empty set,
    /// which splits nothing.
    #[must_use]
    pub fn new(chars: &str) -> Self {
        chars.chars().collect()
    }

    /// Creates a non-empty set containing the characters of the given string.
    ///
    /// Returns [`Error::EmptyDelimiter`] if `chars` is empty.
    ///
    /// ```
    /// # use assert_matches::assert_matches;
    /// # use tokenizer::{CharSet, Error};
    /// assert!(CharSet::try_new(",;").is_ok());
    /// assert_matches!(CharSet::try_new(""), Err(Error::EmptyDelimiter));
    /// ```
    pub fn try_new(chars: &str) -> Result<Self> {
        let set = Self::new(chars);
        if set.is_empty() {
            Err(Error::EmptyDelimiter)
        } else {
            Ok(set)
        }
    }

    /// Creates a set containing no characters.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds a character to the set.
    ///
    /// Returns `true` if the character was not in the set before.
    pub fn insert(&mut self, c: char) -> bool {
        if c.is_ascii() {
            let bit = 1u128 << u32::from(c);
            let added = self.ascii & bit == 0;
            self.ascii |= bit;
            added
        } else {
            match self.non_ascii.binary_search(&c) {
                Ok(_) => false,
                Err(index) => {
                    self.non_ascii.insert(index, c);
                    true
                }
            }
        }
    }

    /// Tests if the given character is a member of this set.
    ///
    /// ```
    /// # use tokenizer::CharSet;
    /// let set = CharSet::new(",|");
    /// assert!(set.contains(','));
    /// assert!(set.contains('|'));
    /// assert!(!set.contains('a'));
    /// ```
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        if c.is_ascii() {
            self.ascii & (1u128 << u32::from(c)) != 0
        } else {
            self.non_ascii.binary_search(&c).is_ok()
        }
    }

    /// Returns the number of characters in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ascii.count_ones() as usize + self.non_ascii.len()
    }

    /// Tests if the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ascii == 0 && self.non_ascii.is_empty()
    }

    /// Returns an iterator over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        (0..128u8)
            .filter(|&b| self.ascii & (1u128 << b) != 0)
            .map(char::from)
            .chain(self.non_ascii.iter().copied())
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = CharSet::empty();
        set.extend(iter);
        set
    }
}

impl Extend<char> for CharSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.insert(c);
        }
    }
}

impl From<&str> for CharSet {
    #[inline]
    fn from(chars: &str) -> Self {
        CharSet::new(chars)
    }
}

impl From<&[char]> for CharSet {
    fn from(chars: &[char]) -> Self {
        chars.iter().copied().collect()
    }
}

impl Delimit for CharSet {
    fn find_in(&self, haystack: &str) -> Option<Range<usize>> {
        if self.non_ascii.is_empty() {
            // No byte of a multi-byte character is ASCII, so a hit always
            // covers a whole character.
            haystack
                .bytes()
                .position(|b| b.is_ascii() && self.ascii & (1u128 << b) != 0)
                .map(|i| i..i + 1)
        } else {
            haystack
                .char_indices()
                .find(|&(_, c)| self.contains(c))
                .map(|(i, c)| i..i + c.len_utf8())
        }
    }
}

/// Splits the input at every occurrence of any character in the set.
///
/// Each delimiter character cuts the input independently, so two delimiters
/// in a row produce an empty token regardless of which members they are. If
/// no character of the input is in the set, or the set is empty, the result
/// is the whole input as a single token.
#[must_use]
pub fn split_by_chars<'a>(input: &'a str, delimiters: &CharSet) -> Vec<&'a str> {
    split_by_chars_iter(input, delimiters).collect()
}

/// Returns an iterator over the tokens [`split_by_chars`] would return.
#[inline]
pub fn split_by_chars_iter<'a, 's>(
    input: &'a str,
    delimiters: &'s CharSet,
) -> Split<'a, &'s CharSet> {
    Split::new(input, delimiters)
}

/// Splits the input at every occurrence of any of the given characters.
///
/// This is a shorthand for building a [`CharSet`] and calling
/// [`split_by_chars`].
///
/// ```
/// # use tokenizer::split_by_any;
/// let tokens = split_by_any("Hello,world|open|close", &[',', '|']);
/// assert_eq!(tokens, ["Hello", "world", "open", "close"]);
/// ```
#[must_use]
pub fn split_by_any<'a>(input: &'a str, delimiters: &[char]) -> Vec<&'a str> {
    split_by_chars(input, &CharSet::from(delimiters))
}
