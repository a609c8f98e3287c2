use crate::pack::pack;
use crate::parser::Parser;
use crate::separated_list::separated_list;
use crate::symbol::symbol;

/// Parser for `parser` between `(` and `)`
pub fn parenthesised<'code, P>(parser: P) -> impl Parser<'code, Symbol = char, Output = P::Output>
where
    P: Parser<'code, Symbol = char>,
    P::Output: Clone,
{
    pack(symbol('('), parser, symbol(')'))
}

/// Parser for `parser` between `[` and `]`
pub fn bracketed<'code, P>(parser: P) -> impl Parser<'code, Symbol = char, Output = P::Output>
where
    P: Parser<'code, Symbol = char>,
    P::Output: Clone,
{
    pack(symbol('['), parser, symbol(']'))
}

/// Parser for `parser` between `{` and `}`
pub fn braced<'code, P>(parser: P) -> impl Parser<'code, Symbol = char, Output = P::Output>
where
    P: Parser<'code, Symbol = char>,
    P::Output: Clone,
{
    pack(symbol('{'), parser, symbol('}'))
}

/// One or more `parser` matches separated by `,`
pub fn comma_list<'code, P>(parser: P) -> impl Parser<'code, Symbol = char, Output = Vec<P::Output>>
where
    P: Parser<'code, Symbol = char>,
    P::Output: Clone,
{
    separated_list(parser, symbol(','))
}

/// One or more `parser` matches separated by `;`
pub fn semi_list<'code, P>(parser: P) -> impl Parser<'code, Symbol = char, Output = Vec<P::Output>>
where
    P: Parser<'code, Symbol = char>,
    P::Output: Clone,
{
    separated_list(parser, symbol(';'))
}
