use crate::many::{Greedy, greedy};
use crate::pack::{Pack, pack};
use crate::parser::Parser;
use crate::symbol::{Satisfy, satisfy};

/// Parser for a possibly empty run of whitespace
pub type Whitespace = Greedy<Satisfy<char, fn(&char) -> bool>>;

fn is_whitespace(c: &char) -> bool {
    c.is_whitespace()
}

/// Parser that matches a run of Unicode whitespace, possibly empty
pub fn whitespace() -> Whitespace {
    greedy(satisfy(is_whitespace as fn(&char) -> bool))
}

/// Surround a parser with optional whitespace on both sides
pub fn whitespaced<'code, P>(parser: P) -> Pack<Whitespace, P, Whitespace>
where
    P: Parser<'code, Symbol = char>,
    P::Output: Clone,
{
    pack(whitespace(), parser, whitespace())
}
