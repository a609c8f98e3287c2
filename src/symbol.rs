use crate::cursor::Cursor;
use crate::parser::{Alternatives, Parser};
use std::marker::PhantomData;

/// Parser that consumes and returns any single symbol
pub struct AnySymbol<T> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T> AnySymbol<T> {
    pub fn new() -> Self {
        AnySymbol {
            _phantom: PhantomData,
        }
    }
}

impl<'code, T> Parser<'code> for AnySymbol<T>
where
    T: Clone + 'code,
{
    type Symbol = T;
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, T>) -> Alternatives<'code, T, T> {
        match cursor.value() {
            Some(symbol) => vec![(symbol.clone(), cursor.next())],
            None => Vec::new(),
        }
    }
}

/// Convenience function to create an AnySymbol parser
pub fn any_symbol<T>() -> AnySymbol<T> {
    AnySymbol::new()
}

/// Parser that consumes a single symbol only if it passes a predicate
pub struct Satisfy<T, F> {
    predicate: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, F> Satisfy<T, F> {
    pub fn new(predicate: F) -> Self {
        Satisfy {
            predicate,
            _phantom: PhantomData,
        }
    }
}

impl<'code, T, F> Parser<'code> for Satisfy<T, F>
where
    T: Clone + 'code,
    F: Fn(&T) -> bool,
{
    type Symbol = T;
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, T>) -> Alternatives<'code, T, T> {
        match cursor.value() {
            Some(symbol) if (self.predicate)(symbol) => vec![(symbol.clone(), cursor.next())],
            _ => Vec::new(),
        }
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<T, F>(predicate: F) -> Satisfy<T, F>
where
    F: Fn(&T) -> bool,
{
    Satisfy::new(predicate)
}

/// Parser that matches one specific symbol
pub fn symbol<T>(expected: T) -> Satisfy<T, impl Fn(&T) -> bool>
where
    T: PartialEq,
{
    satisfy(move |symbol: &T| *symbol == expected)
}
