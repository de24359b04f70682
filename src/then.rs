use crate::parser::{ParseOutcome, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// The left parser runs first; the right parser runs on whatever the left
/// one did not consume. If either side fails, its error is returned as-is
/// and the sequence reports no consumption at all, so a caller always has
/// the original input as the stable context for the failure. The right
/// parser is never invoked once the left one has failed.
///
/// Note: chaining multiple `.then()` calls produces nested tuples like
/// `((a, b), c)` rather than flat tuples. This is due to Rust's lack of
/// variadic generics; the nested shape is general and the destructuring
/// pattern makes the parsing order explicit.
///
/// Example:
/// ```
/// use textcomb::literal;
/// use textcomb::parser::Parser;
/// use textcomb::then::ThenExt;
///
/// let parser = literal("let ").then(literal("x"));
/// let ((keyword, name), remaining) = parser.parse("let x = 1;").unwrap();
/// assert_eq!(keyword, "let ");
/// assert_eq!(name, "x");
/// assert_eq!(remaining, " = 1;");
/// ```
pub struct Then<P1, P2> {
    left: P1,
    right: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(left: P1, right: P2) -> Self {
        Then { left, right }
    }
}

impl<'text, P1, P2> Parser<'text> for Then<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, input: &'text str) -> ParseOutcome<'text, Self::Output> {
        let (left_value, remaining) = self.left.parse(input)?;
        let (right_value, remaining) = self.right.parse(remaining)?;
        Ok(((left_value, right_value), remaining))
    }
}

/// Convenience function to create a Then parser
pub fn then<'text, P1, P2>(left: P1, right: P2) -> Then<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    Then::new(left, right)
}

/// Extension trait to add .then() method support for parsers
pub trait ThenExt<'text>: Parser<'text> + Sized {
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'text>,
    {
        Then::new(self, other)
    }
}

/// Implement ThenExt for all parsers
impl<'text, P> ThenExt<'text> for P where P: Parser<'text> {}
