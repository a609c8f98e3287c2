use crate::cursor::Cursor;
use crate::parser::{Alternatives, Parser};

/// Parser combinator that tries both parsers at the same position and keeps every result
///
/// Alternatives of the first parser come before those of the second.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Symbol = P1::Symbol, Output = P1::Output>,
{
    type Symbol = P1::Symbol;
    type Output = P1::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Symbol>,
    ) -> Alternatives<'code, Self::Symbol, Self::Output> {
        let mut results = self.parser1.parse(cursor);
        results.extend(self.parser2.parse(cursor));
        results
    }
}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Symbol = P1::Symbol, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}

/// Parser combinator that only tries the second parser if the first one yields nothing
pub struct BiasedOr<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> BiasedOr<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        BiasedOr { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for BiasedOr<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Symbol = P1::Symbol, Output = P1::Output>,
{
    type Symbol = P1::Symbol;
    type Output = P1::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Symbol>,
    ) -> Alternatives<'code, Self::Symbol, Self::Output> {
        let results = self.parser1.parse(cursor);
        if results.is_empty() {
            self.parser2.parse(cursor)
        } else {
            results
        }
    }
}

/// Convenience function to create a BiasedOr parser
pub fn biased_or<'code, P1, P2>(parser1: P1, parser2: P2) -> BiasedOr<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Symbol = P1::Symbol, Output = P1::Output>,
{
    BiasedOr::new(parser1, parser2)
}

/// Extension trait to add .or() and .biased_or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Symbol = Self::Symbol, Output = Self::Output>,
    {
        Or::new(self, other)
    }

    fn biased_or<P>(self, other: P) -> BiasedOr<Self, P>
    where
        P: Parser<'code, Symbol = Self::Symbol, Output = Self::Output>,
    {
        BiasedOr::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}
