use crate::cursor::Cursor;
use crate::parser::{Alternatives, Parser};

/// Parser combinator that chooses the next parser from the previous result
///
/// For every alternative of the first parser, the continuation builds a
/// parser that runs from that alternative's cursor. All of their
/// alternatives are concatenated in order.
pub struct Bind<P, F> {
    parser: P,
    continuation: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, continuation: F) -> Self {
        Bind {
            parser,
            continuation,
        }
    }
}

impl<'code, P, F, Q> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code, Symbol = P::Symbol>,
{
    type Symbol = P::Symbol;
    type Output = Q::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Symbol>,
    ) -> Alternatives<'code, Self::Symbol, Self::Output> {
        self.parser
            .parse(cursor)
            .into_iter()
            .flat_map(|(value, cursor)| (self.continuation)(value).parse(cursor))
            .collect()
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, Q>(parser: P, continuation: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code, Symbol = P::Symbol>,
{
    Bind::new(parser, continuation)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, Q>(self, continuation: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code, Symbol = Self::Symbol>,
    {
        Bind::new(self, continuation)
    }
}

/// Implement BindExt for all parsers
impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::many::greedy;
    use crate::or::OrExt;
    use crate::sequence::sequence;
    use crate::succeed::succeed;
    use crate::symbol::{any_symbol, symbol};

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_bind_with_succeed() {
        let data = chars("abc");
        let parser = bind(symbol('a'), |c| succeed(c));
        assert_eq!(parser.parse_at(&data, 0), vec![('a', 1)]);
    }

    #[test]
    fn test_bind_result_dependent_continuation() {
        // Parse a symbol, then require the same symbol again
        let data = chars("aab");
        let parser = any_symbol().bind(|c| symbol(c));

        assert_eq!(parser.parse_at(&data, 0), vec![('a', 2)]);
        assert!(parser.parse_at(&data, 1).is_empty());
    }

    #[test]
    fn test_bind_length_prefixed() {
        let data = vec![3u8, 7, 8, 9, 1];
        let parser = any_symbol().bind(|count: u8| {
            sequence((0..count).map(|_| any_symbol()).collect())
        });

        assert_eq!(parser.parse_at(&data, 0), vec![(vec![7, 8, 9], 4)]);
    }

    #[test]
    fn test_bind_runs_continuation_per_alternative() {
        let data = chars("xyz");
        let first = succeed(1usize).or(succeed(2usize));
        let parser = first.bind(|skip| {
            greedy(any_symbol()).bind(move |rest: Vec<char>| succeed(rest.len() + skip))
        });

        assert_eq!(parser.parse_at(&data, 0), vec![(4, 3), (5, 3)]);
    }

    #[test]
    fn test_bind_first_fails() {
        let data = chars("abc");
        let parser = symbol('z').bind(|_| any_symbol());
        assert!(parser.parse_at(&data, 0).is_empty());
    }
}
