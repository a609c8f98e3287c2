use crate::cursor::Cursor;
use crate::parser::{Alternatives, Parser};
use std::marker::PhantomData;

/// Parser that always succeeds with a fixed value without consuming input
pub struct Succeed<T, O> {
    value: O,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, O> Succeed<T, O> {
    pub fn new(value: O) -> Self {
        Succeed {
            value,
            _phantom: PhantomData,
        }
    }
}

impl<'code, T, O> Parser<'code> for Succeed<T, O>
where
    T: 'code,
    O: Clone,
{
    type Symbol = T;
    type Output = O;

    fn parse(&self, cursor: Cursor<'code, T>) -> Alternatives<'code, T, O> {
        vec![(self.value.clone(), cursor)]
    }
}

/// Convenience function to create a Succeed parser
pub fn succeed<T, O>(value: O) -> Succeed<T, O> {
    Succeed::new(value)
}

/// Alias of [`succeed`]
pub fn pure<T, O>(value: O) -> Succeed<T, O> {
    Succeed::new(value)
}

/// Parser that never succeeds
pub struct Empty<T, O> {
    _phantom: PhantomData<fn(&T) -> O>,
}

impl<T, O> Empty<T, O> {
    pub fn new() -> Self {
        Empty {
            _phantom: PhantomData,
        }
    }
}

impl<'code, T, O> Parser<'code> for Empty<T, O>
where
    T: 'code,
{
    type Symbol = T;
    type Output = O;

    fn parse(&self, _cursor: Cursor<'code, T>) -> Alternatives<'code, T, O> {
        Vec::new()
    }
}

/// Convenience function to create an Empty parser
pub fn empty<T, O>() -> Empty<T, O> {
    Empty::new()
}
