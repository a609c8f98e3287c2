use crate::cursor::Cursor;
use crate::parser::{Alternatives, Parser};

/// Parser combinator that runs a list of parsers one after another
///
/// Every intermediate alternative is carried to the next stage, so an
/// ambiguous stage multiplies the candidates instead of committing to its
/// first result. Fails as soon as a stage leaves no candidates.
pub struct Sequence<P> {
    parsers: Vec<P>,
}

impl<P> Sequence<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Sequence { parsers }
    }
}

impl<'code, P> Parser<'code> for Sequence<P>
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
        let mut candidates = vec![(Vec::with_capacity(self.parsers.len()), cursor)];

        for parser in &self.parsers {
            let mut next_candidates = Vec::new();
            for (mut values, cursor) in candidates {
                let mut alternatives = parser.parse(cursor).into_iter().peekable();
                while let Some((value, cursor)) = alternatives.next() {
                    // The last alternative takes the accumulated values without a copy
                    let mut extended = if alternatives.peek().is_some() {
                        values.clone()
                    } else {
                        std::mem::take(&mut values)
                    };
                    extended.push(value);
                    next_candidates.push((extended, cursor));
                }
            }
            if next_candidates.is_empty() {
                return Vec::new();
            }
            candidates = next_candidates;
        }

        candidates
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<'code, P>(parsers: Vec<P>) -> Sequence<P>
where
    P: Parser<'code>,
    P::Output: Clone,
{
    Sequence::new(parsers)
}
