use crate::cursor::Cursor;
use crate::parser::{Alternatives, Parser};
use std::marker::PhantomData;

/// Parser that returns the unconsumed input without advancing
pub struct Look<T> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Look<T> {
    pub fn new() -> Self {
        Look {
            _phantom: PhantomData,
        }
    }
}

impl<'code, T> Parser<'code> for Look<T>
where
    T: 'code,
{
    type Symbol = T;
    type Output = &'code [T];

    fn parse(&self, cursor: Cursor<'code, T>) -> Alternatives<'code, T, &'code [T]> {
        vec![(cursor.remaining(), cursor)]
    }
}

/// Convenience function to create a Look parser
pub fn look<T>() -> Look<T> {
    Look::new()
}
