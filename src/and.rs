use crate::cursor::Cursor;
use crate::parser::{Alternatives, Parser};

/// Parser combinator that applies parsed functions to parsed arguments
///
/// Every function alternative is applied to every argument alternative
/// reachable from that function's cursor, so the result count is the sum of
/// the argument counts per function alternative rather than a fixed product.
pub struct Ap<PF, PA> {
    functions: PF,
    arguments: PA,
}

impl<PF, PA> Ap<PF, PA> {
    pub fn new(functions: PF, arguments: PA) -> Self {
        Ap {
            functions,
            arguments,
        }
    }
}

impl<'code, PF, PA, B> Parser<'code> for Ap<PF, PA>
where
    PF: Parser<'code>,
    PA: Parser<'code, Symbol = PF::Symbol>,
    PF::Output: Fn(PA::Output) -> B,
{
    type Symbol = PF::Symbol;
    type Output = B;

    fn parse(&self, cursor: Cursor<'code, Self::Symbol>) -> Alternatives<'code, Self::Symbol, B> {
        let mut results = Vec::new();
        for (function, cursor) in self.functions.parse(cursor) {
            for (argument, cursor) in self.arguments.parse(cursor) {
                results.push((function(argument), cursor));
            }
        }
        results
    }
}

/// Convenience function to create an Ap parser
pub fn ap<'code, PF, PA, B>(functions: PF, arguments: PA) -> Ap<PF, PA>
where
    PF: Parser<'code>,
    PA: Parser<'code, Symbol = PF::Symbol>,
    PF::Output: Fn(PA::Output) -> B,
{
    Ap::new(functions, arguments)
}

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`.
///
/// The first result is cloned once per alternative of the second parser.
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P1::Output: Clone,
    P2: Parser<'code, Symbol = P1::Symbol>,
{
    type Symbol = P1::Symbol;
    type Output = (P1::Output, P2::Output);

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Symbol>,
    ) -> Alternatives<'code, Self::Symbol, Self::Output> {
        let mut results = Vec::new();
        for (first, cursor) in self.parser1.parse(cursor) {
            for (second, cursor) in self.parser2.parse(cursor) {
                results.push(((first.clone(), second), cursor));
            }
        }
        results
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P1::Output: Clone,
    P2: Parser<'code, Symbol = P1::Symbol>,
{
    And::new(parser1, parser2)
}

/// Parser combinator that sequences two parsers and keeps only the first result
///
/// The first result is cloned once per alternative of the second parser.
pub struct AndL<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> AndL<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        AndL { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for AndL<P1, P2>
where
    P1: Parser<'code>,
    P1::Output: Clone,
    P2: Parser<'code, Symbol = P1::Symbol>,
{
    type Symbol = P1::Symbol;
    type Output = P1::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Symbol>,
    ) -> Alternatives<'code, Self::Symbol, Self::Output> {
        let mut results = Vec::new();
        for (first, cursor) in self.parser1.parse(cursor) {
            for (_, cursor) in self.parser2.parse(cursor) {
                results.push((first.clone(), cursor));
            }
        }
        results
    }
}

/// Convenience function to create an AndL parser
pub fn and_l<'code, P1, P2>(parser1: P1, parser2: P2) -> AndL<P1, P2>
where
    P1: Parser<'code>,
    P1::Output: Clone,
    P2: Parser<'code, Symbol = P1::Symbol>,
{
    AndL::new(parser1, parser2)
}

/// Parser combinator that sequences two parsers and keeps only the second result
pub struct AndR<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> AndR<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        AndR { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for AndR<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Symbol = P1::Symbol>,
{
    type Symbol = P1::Symbol;
    type Output = P2::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Symbol>,
    ) -> Alternatives<'code, Self::Symbol, Self::Output> {
        let mut results = Vec::new();
        for (_, cursor) in self.parser1.parse(cursor) {
            results.extend(self.parser2.parse(cursor));
        }
        results
    }
}

/// Convenience function to create an AndR parser
pub fn and_r<'code, P1, P2>(parser1: P1, parser2: P2) -> AndR<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Symbol = P1::Symbol>,
{
    AndR::new(parser1, parser2)
}

/// Extension trait to add sequencing method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self::Output: Clone,
        P: Parser<'code, Symbol = Self::Symbol>,
    {
        And::new(self, other)
    }

    fn ap<P, B>(self, arguments: P) -> Ap<Self, P>
    where
        P: Parser<'code, Symbol = Self::Symbol>,
        Self::Output: Fn(P::Output) -> B,
    {
        Ap::new(self, arguments)
    }

    fn and_l<P>(self, other: P) -> AndL<Self, P>
    where
        Self::Output: Clone,
        P: Parser<'code, Symbol = Self::Symbol>,
    {
        AndL::new(self, other)
    }

    fn and_r<P>(self, other: P) -> AndR<Self, P>
    where
        P: Parser<'code, Symbol = Self::Symbol>,
    {
        AndR::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
