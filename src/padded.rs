use crate::parser::{ParseOutcome, Parser};

/// Parser combinator that discards whitespace around its inner parser
///
/// Leading Unicode whitespace is stripped before the inner parser runs,
/// and whitespace after the matched token is stripped from the remainder,
/// up to the next non-whitespace character or the end of input. Nothing
/// else in the input is touched. A failure of the inner parser passes
/// through unchanged.
///
/// Whitespace is whatever `char::is_whitespace` accepts, the same class
/// `str::trim_start` uses.
///
/// Example:
/// ```
/// use textcomb::literal;
/// use textcomb::padded::PaddedExt;
/// use textcomb::parser::Parser;
///
/// let parser = literal("world!").padded();
/// let (value, remaining) = parser.parse("  world!  done").unwrap();
/// assert_eq!(value, "world!");
/// assert_eq!(remaining, "done");
/// ```
pub struct Padded<P> {
    inner: P,
}

impl<P> Padded<P> {
    pub fn new(inner: P) -> Self {
        Padded { inner }
    }
}

impl<'text, P> Parser<'text> for Padded<P>
where
    P: Parser<'text>,
{
    type Output = P::Output;

    fn parse(&self, input: &'text str) -> ParseOutcome<'text, Self::Output> {
        let (value, remaining) = self.inner.parse(input.trim_start())?;
        Ok((value, remaining.trim_start()))
    }
}

/// Convenience function to create a Padded parser
pub fn padded<'text, P>(inner: P) -> Padded<P>
where
    P: Parser<'text>,
{
    Padded::new(inner)
}

/// Extension trait to add .padded() method support for parsers
pub trait PaddedExt<'text>: Parser<'text> + Sized {
    fn padded(self) -> Padded<Self> {
        Padded::new(self)
    }
}

/// Implement PaddedExt for all parsers
impl<'text, P> PaddedExt<'text> for P where P: Parser<'text> {}
