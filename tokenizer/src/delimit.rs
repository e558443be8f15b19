// This file is part of tokenizer, a string splitting library.
// Copyright (C) 2026 The tokenizer authors

//! Delimiter search and the splitting iterators
//!
//! A splitter needs only one primitive: finding the next delimiter occurrence
//! in the rest of the input. The [`Delimit`] trait provides it, and the
//! [`Split`] iterator turns it into a sequence of tokens. [`char`], `&str`,
//! [`CharSet`](crate::CharSet), and [`Substring`](crate::Substring) implement
//! `Delimit`, so the same iterator serves all the literal delimiter kinds.
//!
//! [`Split`] yields the tokens between delimiter occurrences, so there is
//! always one more token than there are delimiters. [`Terminated`] treats each
//! delimiter as the end of a token instead, so an empty last token is dropped.
//!
//! ```
//! use tokenizer::delimit::{split, split_terminated};
//! assert_eq!(split("a,b,", ','), ["a", "b", ""]);
//! assert_eq!(split_terminated("a,b,", ','), ["a", "b"]);
//! ```

use std::iter::FusedIterator;
use std::ops::Range;

/// Search for delimiter occurrences
pub trait Delimit {
    /// Returns the byte range of the first delimiter occurrence in
    /// `haystack`.
    ///
    /// The range must lie on char boundaries of `haystack`. An empty range is
    /// treated the same as `None`, as a delimiter that consumes no characters
    /// admits no way to make progress.
    fn find_in(&self, haystack: &str) -> Option<Range<usize>>;
}

impl<D: Delimit + ?Sized> Delimit for &D {
    #[inline]
    fn find_in(&self, haystack: &str) -> Option<Range<usize>> {
        (**self).find_in(haystack)
    }
}

impl Delimit for char {
    #[inline]
    fn find_in(&self, haystack: &str) -> Option<Range<usize>> {
        haystack.find(*self).map(|i| i..i + self.len_utf8())
    }
}

/// Iterator that yields tokens separated by a delimiter
///
/// This iterator can be created with [`Split::new`] and is used by all the
/// literal splitting functions of this crate. Matches are found greedily from
/// the left, and the search resumes after the end of each match, so matches
/// never overlap.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Split<'a, D> {
    remainder: Option<&'a str>,
    delimiter: D,
}

impl<'a, D: Delimit> Split<'a, D> {
    /// Creates a splitting iterator.
    pub fn new(input: &'a str, delimiter: D) -> Self {
        Split {
            remainder: Some(input),
            delimiter,
        }
    }

    /// Returns the part of the input that has not been yielded yet.
    ///
    /// Returns `None` after the last token has been yielded.
    #[inline]
    #[must_use]
    pub fn remainder(&self) -> Option<&'a str> {
        self.remainder
    }
}

impl<'a, D: Delimit> Iterator for Split<'a, D> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.remainder?;
        match self.delimiter.find_in(rest) {
            Some(range) if !range.is_empty() => {
                self.remainder = Some(&rest[range.end..]);
                Some(&rest[..range.start])
            }
            _ => {
                self.remainder = None;
                Some(rest)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remainder {
            // Every delimiter occupies at least one byte.
            Some(rest) => (1, Some(rest.len() + 1)),
            None => (0, Some(0)),
        }
    }
}

impl<D: Delimit> FusedIterator for Split<'_, D> {}

/// Iterator that yields tokens terminated by a delimiter
///
/// This works like [`Split`] except that an empty token after the last
/// delimiter is not yielded. The empty input yields no tokens at all.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Terminated<'a, D> {
    inner: Split<'a, D>,
}

impl<'a, D: Delimit> Terminated<'a, D> {
    /// Creates a splitting iterator.
    pub fn new(input: &'a str, delimiter: D) -> Self {
        Terminated {
            inner: Split::new(input, delimiter),
        }
    }
}

impl<'a, D: Delimit> Iterator for Terminated<'a, D> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let token = self.inner.next()?;
        if token.is_empty() && self.inner.remainder().is_none() {
            None
        } else {
            Some(token)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<D: Delimit> FusedIterator for Terminated<'_, D> {}

/// Splits the input and appends the tokens to a collection.
///
/// See also [`split`], which returns the tokens in a new vector.
pub fn split_into<'a, D, R>(input: &'a str, delimiter: D, results: &mut R)
where
    D: Delimit,
    R: Extend<&'a str>,
{
    results.extend(Split::new(input, delimiter))
}

/// Splits the input and returns the tokens in a new vector.
///
/// The result always has one more token than the number of delimiter
/// occurrences in the input.
#[must_use]
pub fn split<D: Delimit>(input: &str, delimiter: D) -> Vec<&str> {
    Split::new(input, delimiter).collect()
}

/// Splits the input at terminating delimiters.
///
/// Unlike [`split`], text following the last delimiter makes a token only if
/// it is not empty.
#[must_use]
pub fn split_terminated<D: Delimit>(input: &str, delimiter: D) -> Vec<&str> {
    Terminated::new(input, delimiter).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Delimiter that never consumes anything
    struct EmptyMatch;

    impl Delimit for EmptyMatch {
        fn find_in(&self, _haystack: &str) -> Option<Range<usize>> {
            Some(0..0)
        }
    }

    #[test]
    fn char_delimiter_range() {
        assert_eq!(','.find_in("a,b"), Some(1..2));
        assert_eq!(','.find_in("ab"), None);
        assert_eq!('é'.find_in("caé!"), Some(2..4));
    }

    #[test]
    fn empty_match_stops_splitting() {
        let tokens = split("abc", EmptyMatch);
        assert_eq!(tokens, ["abc"]);
    }

    #[test]
    fn remainder_shrinks_as_tokens_are_yielded() {
        let mut i = Split::new("a-b-c", '-');
        assert_eq!(i.remainder(), Some("a-b-c"));
        assert_eq!(i.next(), Some("a"));
        assert_eq!(i.remainder(), Some("b-c"));
        assert_eq!(i.next(), Some("b"));
        assert_eq!(i.next(), Some("c"));
        assert_eq!(i.remainder(), None);
        assert_eq!(i.next(), None);
        assert_eq!(i.next(), None);
    }

    #[test]
    fn size_hint_bounds() {
        let mut i = Split::new("a,b", ',');
        assert_eq!(i.size_hint(), (1, Some(4)));
        i.next();
        assert_eq!(i.size_hint(), (1, Some(2)));
        i.next();
        assert_eq!(i.size_hint(), (0, Some(0)));

        let i = Terminated::new("", ',');
        assert_eq!(i.size_hint(), (0, Some(1)));
    }

    #[test]
    fn split_into_extends_existing_collection() {
        let mut tokens = vec!["x"];
        split_into("a:b", ':', &mut tokens);
        assert_eq!(tokens, ["x", "a", "b"]);
    }

    #[test]
    fn delimiter_by_reference() {
        let c = ';';
        assert_eq!(split("1;2", &c), ["1", "2"]);
    }

    #[test]
    fn terminated_tokens() {
        assert_eq!(split_terminated("", ','), [] as [&str; 0]);
        assert_eq!(split_terminated(",", ','), [""]);
        assert_eq!(split_terminated(",,", ','), ["", ""]);
        assert_eq!(split_terminated("a", ','), ["a"]);
        assert_eq!(split_terminated("a,", ','), ["a"]);
        assert_eq!(split_terminated("a,,b", ','), ["a", "", "b"]);
        assert_eq!(split_terminated("a,b,,", ','), ["a", "b", ""]);
        assert_eq!(split_terminated(",a", ','), ["", "a"]);
    }
}
