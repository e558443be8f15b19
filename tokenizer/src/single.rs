// This file is part of tokenizer, a string splitting library.
// Copyright (C) 2026 The tokenizer authors

//! Splitting on a single character

use crate::delimit::{Split, Terminated};

/// Splits the input at every occurrence of the delimiter character.
///
/// The delimiter is not included in the tokens. Consecutive delimiters produce
/// an empty token between them, and a delimiter at either end produces an
/// empty token at that end. If the delimiter does not occur, the result is
/// the whole input as a single token, which means the empty input yields one
/// empty token.
///
/// ```
/// # use tokenizer::split_by_char;
/// assert_eq!(split_by_char("Hello,world", ','), ["Hello", "world"]);
/// assert_eq!(split_by_char("a,,b", ','), ["a", "", "b"]);
/// assert_eq!(split_by_char(",a,", ','), ["", "a", ""]);
/// assert_eq!(split_by_char("plain", ','), ["plain"]);
/// assert_eq!(split_by_char("", ','), [""]);
/// ```
#[must_use]
pub fn split_by_char(input: &str, delimiter: char) -> Vec<&str> {
    split_by_char_iter(input, delimiter).collect()
}

/// Returns an iterator over the tokens [`split_by_char`] would return.
#[inline]
pub fn split_by_char_iter(input: &str, delimiter: char) -> Split<'_, char> {
    Split::new(input, delimiter)
}

/// Splits the input into tokens each terminated by the character.
///
/// This is the line-reading style of splitting: the terminator ends the
/// current token, and trailing text after the last terminator forms a token
/// only if it is not empty.
///
/// ```
/// # use tokenizer::split_terminated;
/// assert_eq!(split_terminated("one\ntwo\n", '\n'), ["one", "two"]);
/// assert_eq!(split_terminated("one\n\ntwo", '\n'), ["one", "", "two"]);
/// assert_eq!(split_terminated("", '\n'), [] as [&str; 0]);
/// ```
#[must_use]
pub fn split_terminated(input: &str, terminator: char) -> Vec<&str> {
    Terminated::new(input, terminator).collect()
}
