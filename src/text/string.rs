use crate::and::AndExt;
use crate::choice::choice;
use crate::many::greedy;
use crate::map::MapExt;
use crate::or::OrExt;
use crate::pack::pack;
use crate::parser::Parser;
use crate::symbol::{satisfy, symbol};

/// Escape codes recognised after a backslash, with the character each stands for
const ESCAPES: [(char, char); 8] = [
    ('"', '"'),
    ('\\', '\\'),
    ('/', '/'),
    ('n', '\n'),
    ('t', '\t'),
    ('r', '\r'),
    ('b', '\u{8}'),
    ('f', '\u{c}'),
];

/// Parser for a double-quoted string with backslash escapes
///
/// Returns the unescaped contents. An unknown escape fails the parse.
pub fn escaped_string<'code>() -> impl Parser<'code, Symbol = char, Output = String> {
    let plain = satisfy(|c: &char| *c != '"' && *c != '\\');
    let escape = choice(
        ESCAPES
            .iter()
            .map(|&(code, value)| symbol(code).to(value))
            .collect(),
    );
    let character = plain.or(symbol('\\').and_r(escape));

    pack(symbol('"'), greedy(character), symbol('"'))
        .map(|contents: Vec<char>| contents.into_iter().collect::<String>())
}
