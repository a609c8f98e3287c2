use crate::cursor::Cursor;
use crate::parser::{Alternatives, Parser};

/// A repetition in progress: the values collected so far and where to continue
pub(crate) struct Partial<'code, T, O> {
    values: Vec<O>,
    cursor: Cursor<'code, T>,
    /// Set when the last step consumed nothing; such a partial is never extended again
    stalled: bool,
}

impl<'code, T, O> Partial<'code, T, O> {
    pub(crate) fn new(values: Vec<O>, cursor: Cursor<'code, T>) -> Self {
        Partial {
            values,
            cursor,
            stalled: false,
        }
    }

    pub(crate) fn cursor(&self) -> Cursor<'code, T> {
        self.cursor
    }

    pub(crate) fn is_stalled(&self) -> bool {
        self.stalled
    }

    pub(crate) fn finish(self) -> (Vec<O>, Cursor<'code, T>) {
        (self.values, self.cursor)
    }
}

/// Push one new partial per alternative, each extending `values` by that alternative's value
///
/// Alternatives are pushed in order, so the last one is explored first.
/// An alternative that ends where `from` started is kept but marked stalled.
pub(crate) fn push_extensions<'code, T, O>(
    stack: &mut Vec<Partial<'code, T, O>>,
    mut values: Vec<O>,
    from: Cursor<'code, T>,
    alternatives: Alternatives<'code, T, O>,
) where
    O: Clone,
{
    let mut alternatives = alternatives.into_iter().peekable();
    while let Some((value, cursor)) = alternatives.next() {
        let mut extended = if alternatives.peek().is_some() {
            values.clone()
        } else {
            std::mem::take(&mut values)
        };
        extended.push(value);
        let stalled = cursor.position() == from.position();
        if stalled {
            log::trace!("zero-width repetition at position {}", from.position());
        }
        stack.push(Partial {
            values: extended,
            cursor,
            stalled,
        });
    }
}

/// Which partial results a repetition reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Emit {
    /// Every repetition reached along each path, shortest first
    Prefixes,
    /// Only repetitions the inner parser cannot continue
    Maximal,
}

/// Work-list enumeration shared by the repetition combinators
///
/// Pops a partial, tries to extend it with `parser`, and emits it according
/// to `emit`. Runs without recursion regardless of how many repetitions the
/// input holds.
pub(crate) fn enumerate<'code, P>(
    parser: &P,
    mut stack: Vec<Partial<'code, P::Symbol, P::Output>>,
    emit: Emit,
) -> Alternatives<'code, P::Symbol, Vec<P::Output>>
where
    P: Parser<'code>,
    P::Output: Clone,
{
    let mut results = Vec::new();
    let mut steps = 0usize;

    while let Some(partial) = stack.pop() {
        steps += 1;
        if partial.is_stalled() {
            results.push(partial.finish());
            continue;
        }
        let alternatives = parser.parse(partial.cursor());
        if alternatives.is_empty() {
            results.push(partial.finish());
            continue;
        }
        let from = partial.cursor();
        let (values, _) = partial.finish();
        if emit == Emit::Prefixes {
            results.push((values.clone(), from));
        }
        push_extensions(&mut stack, values, from, alternatives);
    }

    log::trace!(
        "repetition explored {} partial results, {} emitted",
        steps,
        results.len()
    );
    results
}

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Every repetition is reported, starting with the zero-repetition result at
/// the starting cursor, so this never fails. Along each path shorter
/// repetitions come before longer ones. When the inner parser is ambiguous,
/// the most recently found continuation is explored first.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
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
        let stack = vec![Partial::new(Vec::new(), cursor)];
        enumerate(&self.parser, stack, Emit::Prefixes)
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
    P::Output: Clone,
{
    Many::new(parser)
}

/// Parser combinator that matches as many occurrences of the given parser as possible
///
/// Only maximal repetitions are produced: a repetition is emitted when the
/// inner parser can no longer continue it. Shorter results only appear when
/// an ambiguous inner parser leaves some paths unable to continue. The
/// zero-repetition result appears exactly when the inner parser fails at the
/// start, so this never fails.
pub struct Greedy<P> {
    parser: P,
}

impl<P> Greedy<P> {
    pub fn new(parser: P) -> Self {
        Greedy { parser }
    }
}

impl<'code, P> Parser<'code> for Greedy<P>
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
        let stack = vec![Partial::new(Vec::new(), cursor)];
        enumerate(&self.parser, stack, Emit::Maximal)
    }
}

/// Convenience function to create a Greedy parser
pub fn greedy<'code, P>(parser: P) -> Greedy<P>
where
    P: Parser<'code>,
    P::Output: Clone,
{
    Greedy::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_fn::from_fn;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::succeed::succeed;
    use crate::symbol::{any_symbol, symbol};
    use crate::token::token;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_many_zero_matches() {
        let data = chars("xyz");
        let parser = many(symbol('a'));
        assert_eq!(parser.parse_at(&data, 0), vec![(Vec::new(), 0)]);
    }

    #[test]
    fn test_many_reports_every_prefix() {
        let data = chars("aaa");
        let parser = many(any_symbol());

        assert_eq!(
            parser.parse_at(&data, 0),
            vec![
                (Vec::new(), 0),
                (chars("a"), 1),
                (chars("aa"), 2),
                (chars("aaa"), 3),
            ]
        );
    }

    #[test]
    fn test_many_stops_at_other_input() {
        let data = chars("aab");
        let parser = many(symbol('a'));
        assert_eq!(
            parser.parse_at(&data, 0),
            vec![(Vec::new(), 0), (chars("a"), 1), (chars("aa"), 2)]
        );
    }

    #[test]
    fn test_many_and_greedy_differ() {
        let data = chars("aa");
        let prefixes = many(any_symbol()).parse_at(&data, 0);
        let longest = greedy(any_symbol()).parse_at(&data, 0);

        assert_eq!(prefixes.len(), 3);
        assert_eq!(longest, vec![(chars("aa"), 2)]);
        assert_eq!(prefixes.last(), longest.first());
    }

    #[test]
    fn test_many_ambiguous_lengths() {
        let data = chars("ab");
        let step = token(&chars("ab"))
            .map(|s: &[char]| s.len())
            .or(symbol('a').map(|_| 1));
        let parser = many(step);

        assert_eq!(
            parser.parse_at(&data, 0),
            vec![(Vec::new(), 0), (vec![1], 1), (vec![2], 2)]
        );
    }

    #[test]
    fn test_greedy_consumes_everything() {
        let data = chars("aaa");
        let parser = greedy(any_symbol());
        assert_eq!(parser.parse_at(&data, 0), vec![(chars("aaa"), 3)]);
    }

    #[test]
    fn test_greedy_empty_input() {
        let data = chars("");
        let parser = greedy(any_symbol::<char>());
        assert_eq!(parser.parse_at(&data, 0), vec![(Vec::new(), 0)]);
    }

    #[test]
    fn test_greedy_ambiguous_parser_enumerates_every_path() {
        let data = chars("aaa");
        let parser = greedy(any_symbol().or(any_symbol()));
        let results = parser.parse_at(&data, 0);

        assert_eq!(results.len(), 8);
        assert!(results.iter().all(|result| *result == (chars("aaa"), 3)));
    }

    #[test]
    fn test_greedy_order_is_last_alternative_first() {
        let data = chars("ab");
        let parser = greedy(any_symbol().or(any_symbol().map(|c: char| c.to_ascii_uppercase())));

        assert_eq!(
            parser.parse_at(&data, 0),
            vec![
                (chars("AB"), 2),
                (chars("Ab"), 2),
                (chars("aB"), 2),
                (chars("ab"), 2),
            ]
        );
    }

    #[test]
    fn test_greedy_ambiguous_lengths_emit_shorter_terminals() {
        // "a" or "ab" at each step; a path ending on 'b' cannot continue
        let data = chars("ab");
        let step = token(&chars("ab"))
            .map(|s: &[char]| s.len())
            .or(symbol('a').map(|_| 1));
        let parser = greedy(step);

        assert_eq!(parser.parse_at(&data, 0), vec![(vec![1], 1), (vec![2], 2)]);
    }

    #[test]
    fn test_greedy_zero_width_parser_terminates() {
        let data = chars("abc");
        let parser = greedy(succeed::<char, _>(7));
        assert_eq!(parser.parse_at(&data, 0), vec![(vec![7], 0)]);
    }

    #[test]
    fn test_many_zero_width_parser_terminates() {
        let data = chars("abc");
        let parser = many(succeed::<char, _>(7));
        assert_eq!(parser.parse_at(&data, 0), vec![(Vec::new(), 0), (vec![7], 0)]);
    }

    #[test]
    fn test_greedy_mixed_zero_width_alternative() {
        let data = chars("aa");
        let parser = greedy(symbol('a').or(succeed('-')));

        assert_eq!(
            parser.parse_at(&data, 0),
            vec![
                (chars("-"), 0),
                (chars("a-"), 1),
                (chars("aa-"), 2),
            ]
        );
    }

    #[test]
    fn test_many_mixed_zero_width_alternative() {
        let data = chars("aa");
        let parser = many(symbol('a').or(succeed('-')));

        assert_eq!(
            parser.parse_at(&data, 0),
            vec![
                (Vec::new(), 0),
                (chars("-"), 0),
                (chars("a"), 1),
                (chars("a-"), 1),
                (chars("aa"), 2),
                (chars("aa-"), 2),
            ]
        );
    }

    #[test]
    fn test_greedy_long_input_does_not_recurse() {
        let data = vec![b'x'; 200_000];
        let parser = greedy(symbol(b'x'));
        let results = parser.parse_at(&data, 0);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0.len(), 200_000);
        assert_eq!(results[0].1, 200_000);
    }

    #[test]
    fn test_greedy_from_later_position() {
        let data = chars("xaab");
        let parser = greedy(symbol('a'));
        assert_eq!(parser.parse_at(&data, 1), vec![(chars("aa"), 3)]);
    }

    fn below_three(cursor: Cursor<'_, u8>) -> Alternatives<'_, u8, u8> {
        match cursor.value() {
            Some(&value) if value < 3 => vec![(value * 10, cursor.next())],
            _ => Vec::new(),
        }
    }

    #[test]
    fn test_many_inner_parser_sees_each_cursor() {
        let data = [1u8, 2, 3];
        let parser = many(from_fn(below_three));
        assert_eq!(
            parser.parse_at(&data, 0),
            vec![(Vec::new(), 0), (vec![10], 1), (vec![10, 20], 2)]
        );
    }
}
