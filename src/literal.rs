use crate::error::ParseError;
use crate::parser::{ParseOutcome, Parser};
use std::borrow::Cow;

/// Parser that matches a fixed literal prefix of the input
///
/// On success the produced value is the literal itself and the remainder
/// starts right after it. On mismatch the error reports the literal as
/// expected and a diagnostic slice of the input as found, no longer than
/// the literal and never reaching past the end of the input.
///
/// Example:
/// ```
/// use textcomb::literal;
/// use textcomb::Parser;
///
/// let (value, remaining) = literal("let ").parse("let x = 1;").unwrap();
/// assert_eq!(value, "let ");
/// assert_eq!(remaining, "x = 1;");
/// ```
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Literal {
            expected: expected.into(),
        }
    }
}

impl<'text> Parser<'text> for Literal {
    type Output = Cow<'static, str>;

    fn parse(&self, input: &'text str) -> ParseOutcome<'text, Self::Output> {
        match input.strip_prefix(self.expected.as_ref()) {
            // Clone is cheap for the common &'static str case
            Some(remaining) => Ok((self.expected.clone(), remaining)),
            None => Err(ParseError::literal_mismatch(
                self.expected.clone(),
                prefix_chars(input, self.expected.chars().count()),
            )),
        }
    }
}

/// Longest prefix of `input` holding at most `count` characters
///
/// Cuts on a character boundary so multi-byte input cannot cause an
/// out-of-range slice.
fn prefix_chars(input: &str, count: usize) -> &str {
    match input.char_indices().nth(count) {
        Some((end, _)) => &input[..end],
        None => input,
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let parser = literal("hello");

        let (value, remaining) = parser.parse("hello").unwrap();
        assert_eq!(value, "hello");
        assert_eq!(remaining, "");
    }

    #[test]
    fn test_match_with_remaining() {
        let parser = literal("hello");

        let (value, remaining) = parser.parse("hello world").unwrap();
        assert_eq!(value, "hello");
        assert_eq!(remaining, " world");
    }

    #[test]
    fn test_unicode_literal() {
        let parser = literal("こんにちは");

        let (value, remaining) = parser.parse("こんにちは世界").unwrap();
        assert_eq!(value, "こんにちは");
        assert_eq!(remaining, "世界");
    }

    #[test]
    fn test_empty_literal_consumes_nothing() {
        let parser = literal("");

        let (value, remaining) = parser.parse("hello").unwrap();
        assert_eq!(value, "");
        assert_eq!(remaining, "hello");
    }

    #[test]
    fn test_empty_literal_on_empty_input() {
        let parser = literal("");

        let (value, remaining) = parser.parse("").unwrap();
        assert_eq!(value, "");
        assert_eq!(remaining, "");
    }

    #[test]
    fn test_mismatch_reports_expected_and_found() {
        let parser = literal("hello");

        let error = parser.parse("help me").unwrap_err();
        assert_eq!(error.expected(), "hello");
        assert_eq!(error.found(), "help ");
        assert_eq!(error.to_string(), "Expected: \"hello\" got: \"help \"");
    }

    #[test]
    fn test_found_no_longer_than_literal() {
        let parser = literal("abc");

        let error = parser.parse("xyzabcdef").unwrap_err();
        assert_eq!(error.found(), "xyz");
    }

    #[test]
    fn test_input_shorter_than_literal() {
        let parser = literal("hello");

        let error = parser.parse("hel").unwrap_err();
        assert_eq!(error.expected(), "hello");
        assert_eq!(error.found(), "hel");
    }

    #[test]
    fn test_empty_input() {
        let parser = literal("x");

        let error = parser.parse("").unwrap_err();
        assert_eq!(error.found(), "");
    }

    #[test]
    fn test_case_sensitive() {
        let parser = literal("hello");

        let error = parser.parse("Hello").unwrap_err();
        assert_eq!(error.found(), "Hello");
    }

    #[test]
    fn test_found_respects_char_boundaries() {
        // Literal is five characters; the input holds multi-byte
        // characters, so the diagnostic slice must cut between chars,
        // not between bytes.
        let parser = literal("hello");

        let error = parser.parse("héllo again").unwrap_err();
        assert_eq!(error.found(), "héllo");
    }

    #[test]
    fn test_multibyte_input_shorter_than_literal() {
        let parser = literal("hello");

        let error = parser.parse("日本").unwrap_err();
        assert_eq!(error.found(), "日本");
    }

    #[test]
    fn test_operators_and_symbols() {
        let test_cases = ["->", "==", "::", "&&", "||"];

        for symbol in test_cases {
            let parser = literal(symbol);

            let (value, _) = parser.parse(symbol).unwrap();
            assert_eq!(value, symbol, "Failed for symbol: {}", symbol);
        }
    }

    #[test]
    fn test_parser_is_reusable() {
        let parser = literal("ab");

        assert!(parser.parse("abc").is_ok());
        assert!(parser.parse("xyz").is_err());
        // A failed attempt must not affect later ones
        let (value, remaining) = parser.parse("abab").unwrap();
        assert_eq!(value, "ab");
        assert_eq!(remaining, "ab");
    }
}
