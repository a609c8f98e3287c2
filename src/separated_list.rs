use crate::cursor::Cursor;
use crate::many::{Partial, push_extensions};
use crate::parser::{Alternatives, Parser};

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item), and returns the items.
///
/// Every ambiguous parse of both the items and the separators is kept. A
/// list is emitted when no separator follows it, or when an item fails
/// after a separator; in the latter case the separator is left unconsumed.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
/// - `"1;2;"` with separator `;` → `vec!['1', '2']`, stopping before the trailing `;`
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    P::Output: Clone,
    PS: Parser<'code, Symbol = P::Symbol>,
{
    type Symbol = P::Symbol;
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Symbol>,
    ) -> Alternatives<'code, Self::Symbol, Self::Output> {
        let mut results = Vec::new();

        // Each way of parsing the first item is enumerated to completion in turn
        for (first, cursor) in self.parser.parse(cursor) {
            let mut stack = vec![Partial::new(vec![first], cursor)];

            while let Some(partial) = stack.pop() {
                if partial.is_stalled() {
                    results.push(partial.finish());
                    continue;
                }

                let from = partial.cursor();
                let separators = self.separator.parse(from);
                if separators.is_empty() {
                    results.push(partial.finish());
                    continue;
                }

                let (mut values, _) = partial.finish();
                let mut separators = separators.into_iter().peekable();
                while let Some((_, after_separator)) = separators.next() {
                    let values = if separators.peek().is_some() {
                        values.clone()
                    } else {
                        std::mem::take(&mut values)
                    };
                    let items = self.parser.parse(after_separator);
                    if items.is_empty() {
                        results.push((values, from));
                    } else {
                        push_extensions(&mut stack, values, from, items);
                    }
                }
            }
        }

        log::trace!("separated list produced {} alternatives", results.len());
        results
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn separated_list<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    P::Output: Clone,
    PS: Parser<'code, Symbol = P::Symbol>,
{
    SeparatedList::new(parser, separator)
}
