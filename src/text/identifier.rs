use crate::and::AndExt;
use crate::many::greedy;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::symbol::satisfy;

/// Parser for a letter followed by any number of letters or digits
///
/// Letters and digits are judged by Unicode, so `ñame1` is an identifier.
pub fn identifier<'code>() -> impl Parser<'code, Symbol = char, Output = String> {
    satisfy(|c: &char| c.is_alphabetic())
        .and(greedy(satisfy(|c: &char| c.is_alphanumeric())))
        .map(|(first, rest): (char, Vec<char>)| {
            std::iter::once(first).chain(rest).collect::<String>()
        })
}
