use crate::cursor::Cursor;
use crate::parser::{Alternatives, Parser};

/// Parser combinator that transforms the output of every alternative using a mapping function
///
/// Cursors are left untouched.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Symbol = P::Symbol;
    type Output = U;

    fn parse(&self, cursor: Cursor<'code, Self::Symbol>) -> Alternatives<'code, Self::Symbol, U> {
        self.parser
            .parse(cursor)
            .into_iter()
            .map(|(value, cursor)| ((self.mapper)(value), cursor))
            .collect()
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Replace every result of `parser` with a constant
pub fn apply_l<'code, P, V>(
    value: V,
    parser: P,
) -> Map<P, impl Fn(P::Output) -> V>
where
    P: Parser<'code>,
    V: Clone,
{
    Map::new(parser, move |_| value.clone())
}

/// Extension trait to add .map() and .to() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn to<V>(self, value: V) -> Map<Self, impl Fn(Self::Output) -> V>
    where
        V: Clone,
    {
        apply_l(value, self)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
