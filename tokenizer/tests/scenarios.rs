// This file is part of tokenizer, a string splitting library.
// Copyright (C) 2026 The tokenizer authors

use assert_matches::assert_matches;
use tokenizer::{
    CharSet, Delimiter, Error, Pattern, Substring, split_by_any, split_by_char, split_by_chars,
    split_by_regex, split_by_str, split_terminated,
};

mod by_char {
    use super::*;

    #[test]
    fn hex_byte_listing() {
        let input = "41 42 43 54 46 7B 34 35 43 31 31 5F 31 35 5F 55 35 33 46 55 4C 7D";
        let tokens = split_by_char(input, ' ');
        assert_eq!(
            tokens,
            [
                "41", "42", "43", "54", "46", "7B", "34", "35", "43", "31", "31", "5F", "31",
                "35", "5F", "55", "35", "33", "46", "55", "4C", "7D",
            ]
        );
        assert_eq!(tokens.len(), 22);
    }

    #[test]
    fn comma_separated_pair() {
        assert_eq!(split_by_char("Hello,world", ','), ["Hello", "world"]);
    }

    #[test]
    fn delimiter_absent() {
        assert_eq!(split_by_char("plain", ','), ["plain"]);
    }

    #[test]
    fn consecutive_delimiters() {
        assert_eq!(split_by_char("a,,b", ','), ["a", "", "b"]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(split_by_char("", ','), [""]);
    }
}

mod by_chars {
    use super::*;

    #[test]
    fn plus_and_equals() {
        let delimiters = CharSet::new("+=");
        assert_eq!(
            split_by_chars("To+jest=prosty=test+raz=dwa", &delimiters),
            ["To", "jest", "prosty", "test", "raz", "dwa"]
        );
    }

    #[test]
    fn comma_and_bar() {
        assert_eq!(
            split_by_any("Hello,world|open|close", &[',', '|']),
            ["Hello", "world", "open", "close"]
        );
    }

    #[test]
    fn order_of_delimiters_is_irrelevant() {
        let input = "Hello,world|open|close";
        assert_eq!(
            split_by_any(input, &[',', '|']),
            split_by_any(input, &['|', ','])
        );
    }

    #[test]
    fn empty_set_is_no_op() {
        assert_eq!(split_by_any("a,b", &[]), ["a,b"]);
        assert_matches!(CharSet::try_new(""), Err(Error::EmptyDelimiter));
    }
}

mod by_str {
    use super::*;

    #[test]
    fn double_x_separator() {
        assert_eq!(split_by_str("aXXbXXc", "XX"), ["a", "b", "c"]);
    }

    #[test]
    fn empty_separator_is_no_op() {
        assert_eq!(split_by_str("aXXbXXc", ""), ["aXXbXXc"]);
        assert_matches!(Substring::try_new(""), Err(Error::EmptyDelimiter));
    }
}

mod by_regex {
    use super::*;

    #[test]
    fn whitespace_runs() {
        assert_eq!(
            split_by_regex("one  two\tthree", r"\s+").unwrap(),
            ["one", "two", "three"]
        );
    }

    #[test]
    fn match_of_whole_input() {
        assert_eq!(split_by_regex("abc", "[a-z]+").unwrap(), ["", ""]);
    }

    #[test]
    fn no_match() {
        assert_eq!(split_by_regex("abc", "[0-9]").unwrap(), ["abc"]);
    }

    #[test]
    fn invalid_pattern() {
        let error = split_by_regex("abc", "a)").unwrap_err();
        assert_matches!(error, Error::Pattern(regex::Error::Syntax(_)));
        assert!(!error.to_string().is_empty());
    }
}

mod terminated {
    use super::*;

    #[test]
    fn lines() {
        assert_eq!(split_terminated("a\nb\n", '\n'), ["a", "b"]);
        assert_eq!(split_terminated("a\n\nb", '\n'), ["a", "", "b"]);
        assert_eq!(split_terminated("", '\n'), [] as [&str; 0]);
    }
}

#[test]
fn delimiter_kinds_agree_on_single_characters() {
    let input = ",a,,b,";
    let expected = ["", "a", "", "b", ""];
    let delimiters = [
        Delimiter::from(','),
        Delimiter::from(CharSet::new(",")),
        Delimiter::from(","),
        Delimiter::from(Pattern::new(",").unwrap()),
    ];
    for delimiter in &delimiters {
        assert_eq!(delimiter.split(input), expected, "{delimiter:?}");
    }
}
