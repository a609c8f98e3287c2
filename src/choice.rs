use crate::cursor::Cursor;
use crate::parser::{Alternatives, Parser};

/// Parser combinator that tries every parser in a list at the same position
///
/// Equivalent to folding `or` over the list from the right with `empty()`
/// as the base: the alternatives of every parser are concatenated in list
/// order. This is not "first success wins"; use `biased_or` for that.
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Choice { parsers }
    }
}

impl<'code, P> Parser<'code> for Choice<P>
where
    P: Parser<'code>,
{
    type Symbol = P::Symbol;
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Symbol>,
    ) -> Alternatives<'code, Self::Symbol, Self::Output> {
        self.parsers
            .iter()
            .flat_map(|parser| parser.parse(cursor))
            .collect()
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'code, P>(parsers: Vec<P>) -> Choice<P>
where
    P: Parser<'code>,
{
    Choice::new(parsers)
}
