use crate::error::ParseError;

/// Core parser trait for parser combinators
///
/// A parser is an immutable description of how to consume a prefix of a
/// text input and produce a typed value. Parsers hold no mutable state,
/// so the same parser value can be applied to any number of inputs and
/// the same sub-parser can appear in several composed trees.
pub trait Parser<'text>: Sized {
    type Output;

    /// Attempt to parse a prefix of the given input
    ///
    /// Returns Ok with the parsed value and the unconsumed remainder on
    /// success, or Err with the failure. A failed parse carries no
    /// remainder and claims no consumption.
    fn parse(&self, input: &'text str) -> ParseOutcome<'text, Self::Output>;
}

/// Result of a single parse attempt
///
/// Success carries the produced value together with the suffix of the
/// input starting immediately after the consumed portion. Failure
/// carries the [`ParseError`] by value; errors travel through combinator
/// composition as data, never as panics.
pub type ParseOutcome<'text, T> = Result<(T, &'text str), ParseError>;
