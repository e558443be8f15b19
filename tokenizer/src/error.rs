// This file is part of tokenizer, a string splitting library.
// Copyright (C) 2026 The tokenizer authors

//! Errors

use thiserror::Error;

/// Error in constructing a delimiter
///
/// Splitting itself never fails. An error can only arise when a delimiter is
/// built from an argument that cannot serve as one.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The delimiter substring or character set is empty.
    #[error("empty delimiter")]
    EmptyDelimiter,

    /// The pattern is not a valid regular expression.
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

/// Result type with [`Error`] as the error type
pub type Result<T> = std::result::Result<T, Error>;
