use crate::cursor::Cursor;
use crate::or::Or;
use crate::parser::{Alternatives, Parser};
use crate::succeed::{Succeed, succeed};

/// Parser that also succeeds with `default` without consuming input
///
/// The default is an additional alternative, placed after those of
/// `parser`; it does not replace them.
pub fn option<'code, P>(parser: P, default: P::Output) -> Or<P, Succeed<P::Symbol, P::Output>>
where
    P: Parser<'code>,
    P::Output: Clone,
{
    Or::new(parser, succeed(default))
}

/// Parser combinator that makes a parser optional
///
/// If the inner parser fails, yields exactly one `None` alternative at the
/// starting cursor. Otherwise every alternative is passed through as `Some`.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Symbol = P::Symbol;
    type Output = Option<P::Output>;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Symbol>,
    ) -> Alternatives<'code, Self::Symbol, Self::Output> {
        let results = self.parser.parse(cursor);
        if results.is_empty() {
            return vec![(None, cursor)];
        }
        results
            .into_iter()
            .map(|(value, cursor)| (Some(value), cursor))
            .collect()
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
