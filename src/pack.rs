use crate::cursor::Cursor;
use crate::parser::{Alternatives, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// This parses `open + content + close` and returns just the `content`
/// value with the delimiters discarded. Ambiguity in any of the three parts
/// carries through: the content is cloned once per closing alternative.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Pack<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Pack<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Pack {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Pack<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code, Symbol = P1::Symbol>,
    P2::Output: Clone,
    P3: Parser<'code, Symbol = P1::Symbol>,
{
    type Symbol = P1::Symbol;
    type Output = P2::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Symbol>,
    ) -> Alternatives<'code, Self::Symbol, Self::Output> {
        let mut results = Vec::new();
        for (_, cursor) in self.open.parse(cursor) {
            for (content, cursor) in self.content.parse(cursor) {
                for (_, cursor) in self.close.parse(cursor) {
                    results.push((content.clone(), cursor));
                }
            }
        }
        results
    }
}

/// Convenience function to create a Pack parser
pub fn pack<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Pack<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code, Symbol = P1::Symbol>,
    P2::Output: Clone,
    P3: Parser<'code, Symbol = P1::Symbol>,
{
    Pack::new(open, content, close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxed::BoxedExt;
    use crate::many::greedy;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::symbol::{satisfy, symbol};
    use crate::token::token;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_pack_brackets() {
        let data = chars("[abc]");
        let parser = pack(
            symbol('['),
            greedy(satisfy(|c: &char| c.is_alphabetic())),
            symbol(']'),
        );
        assert_eq!(parser.parse_at(&data, 0), vec![(chars("abc"), 5)]);
    }

    #[test]
    fn test_pack_missing_close() {
        let data = chars("(x");
        let parser = pack(symbol('('), symbol('x'), symbol(')'));
        assert!(parser.parse_at(&data, 0).is_empty());
    }

    #[test]
    fn test_pack_missing_open() {
        let data = chars("x)");
        let parser = pack(symbol('('), symbol('x'), symbol(')'));
        assert!(parser.parse_at(&data, 0).is_empty());
    }

    #[test]
    fn test_pack_keeps_ambiguous_content() {
        let data = chars("<a>");
        let content = symbol('a').or(symbol('a').map(|c: char| c.to_ascii_uppercase()));
        let parser = pack(symbol('<'), content, symbol('>'));
        assert_eq!(parser.parse_at(&data, 0), vec![('a', 3), ('A', 3)]);
    }

    #[test]
    fn test_pack_every_delimiter_alternative() {
        // Two ways to open, content at either cursor, two ways to close
        let data = chars("((a))");
        let open = symbol('(').or(token(&chars("((")).map(|_| '('));
        let content = greedy(satisfy(|c: &char| *c == '(' || c.is_alphabetic()));
        let close = symbol(')').or(token(&chars("))")).map(|_| ')'));
        let parser = pack(open, content, close);

        assert_eq!(
            parser.parse_at(&data, 0),
            vec![
                (chars("(a"), 4),
                (chars("(a"), 5),
                (chars("a"), 4),
                (chars("a"), 5),
            ]
        );
    }

    #[test]
    fn test_pack_nested_many_levels() {
        let data = chars("[[[[[[[[x]]]]]]]]");
        let mut parser = symbol('x').boxed();
        for _ in 0..8 {
            parser = pack(symbol('['), parser, symbol(']')).boxed();
        }
        assert_eq!(parser.parse_at(&data, 0), vec![('x', 17)]);
    }
}
