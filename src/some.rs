use crate::cursor::Cursor;
use crate::many::{Emit, enumerate, push_extensions};
use crate::parser::{Alternatives, Parser};

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Emits every repetition of length one or more, like [`Many`](crate::many::Many)
/// without the empty repetition. Fails when the inner parser fails at the
/// starting cursor.
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
    P::Output: Clone,
{
    type Symbol = P::Symbol;
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Symbol>,
    ) -> Alternatives<'code, Self::Symbol, Self::Output> {
        seeded(&self.parser, cursor, Emit::Prefixes)
    }
}

/// Parser combinator that matches one or more occurrences, keeping only maximal runs
pub struct Greedy1<P> {
    parser: P,
}

impl<P> Greedy1<P> {
    pub fn new(parser: P) -> Self {
        Greedy1 { parser }
    }
}

impl<'code, P> Parser<'code> for Greedy1<P>
where
    P: Parser<'code>,
    P::Output: Clone,
{
    type Symbol = P::Symbol;
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Symbol>,
    ) -> Alternatives<'code, Self::Symbol, Self::Output> {
        seeded(&self.parser, cursor, Emit::Maximal)
    }
}

fn seeded<'code, P>(
    parser: &P,
    cursor: Cursor<'code, P::Symbol>,
    emit: Emit,
) -> Alternatives<'code, P::Symbol, Vec<P::Output>>
where
    P: Parser<'code>,
    P::Output: Clone,
{
    // First parse must succeed
    let first = parser.parse(cursor);
    if first.is_empty() {
        return Vec::new();
    }

    let mut stack = Vec::new();
    push_extensions(&mut stack, Vec::new(), cursor, first);
    enumerate(parser, stack, emit)
}

/// Convenience function to create a Many1 parser
pub fn some<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
    P::Output: Clone,
{
    Many1::new(parser)
}

/// Convenience function to create a Greedy1 parser
pub fn greedy1<'code, P>(parser: P) -> Greedy1<P>
where
    P: Parser<'code>,
    P::Output: Clone,
{
    Greedy1::new(parser)
}
