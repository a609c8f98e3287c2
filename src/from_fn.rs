use crate::cursor::Cursor;
use crate::parser::{Alternatives, Parser};
use std::marker::PhantomData;

/// A parser backed by a plain function from cursor to alternatives
pub struct FromFn<T, F> {
    function: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, F> FromFn<T, F> {
    pub fn new(function: F) -> Self {
        FromFn {
            function,
            _phantom: PhantomData,
        }
    }
}

impl<'code, T, O, F> Parser<'code> for FromFn<T, F>
where
    T: 'code,
    F: Fn(Cursor<'code, T>) -> Alternatives<'code, T, O>,
{
    type Symbol = T;
    type Output = O;

    fn parse(&self, cursor: Cursor<'code, T>) -> Alternatives<'code, T, O> {
        (self.function)(cursor)
    }
}

/// Wrap a function as a parser
///
/// The function must behave like any other parser: pure, and never
/// returning a cursor before the one it was given.
pub fn from_fn<'code, T, O, F>(function: F) -> FromFn<T, F>
where
    T: 'code,
    F: Fn(Cursor<'code, T>) -> Alternatives<'code, T, O>,
{
    FromFn::new(function)
}
