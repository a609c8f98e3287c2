use crate::cursor::Cursor;
use crate::parser::{Alternatives, Parser};
use std::rc::Rc;

/// A type-erased parser that is cheap to clone
///
/// Lets parsers of different concrete types share one type, as needed for
/// the lists given to `sequence` and `choice` and for recursive grammars.
pub struct BoxedParser<'code, T: 'code, O> {
    function: Rc<dyn Fn(Cursor<'code, T>) -> Alternatives<'code, T, O> + 'code>,
}

impl<'code, T: 'code, O> BoxedParser<'code, T, O> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Symbol = T, Output = O> + 'code,
    {
        let function: Rc<dyn Fn(Cursor<'code, T>) -> Alternatives<'code, T, O> + 'code> =
            Rc::new(move |cursor| parser.parse(cursor));
        BoxedParser { function }
    }
}

impl<'code, T: 'code, O> Clone for BoxedParser<'code, T, O> {
    fn clone(&self) -> Self {
        BoxedParser {
            function: Rc::clone(&self.function),
        }
    }
}

impl<'code, T, O> Parser<'code> for BoxedParser<'code, T, O>
where
    T: 'code,
{
    type Symbol = T;
    type Output = O;

    fn parse(&self, cursor: Cursor<'code, T>) -> Alternatives<'code, T, O> {
        (self.function)(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Symbol, Self::Output> {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}
