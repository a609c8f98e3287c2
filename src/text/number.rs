use crate::and::AndExt;
use crate::map::MapExt;
use crate::option::optional;
use crate::parser::Parser;
use crate::some::greedy1;
use crate::symbol::{satisfy, symbol};

/// Parser that matches one ASCII digit and returns its value
pub fn digit<'code>() -> impl Parser<'code, Symbol = char, Output = u32> {
    satisfy(|c: &char| c.is_ascii_digit()).map(|c: char| c as u32 - '0' as u32)
}

/// Parser that matches one or more ASCII digits and returns them as a u64
///
/// All digits are consumed. Values past `u64::MAX` saturate.
pub fn natural<'code>() -> impl Parser<'code, Symbol = char, Output = u64> {
    greedy1(digit()).map(|digits: Vec<u32>| {
        digits.into_iter().fold(0u64, |value, digit| {
            value.saturating_mul(10).saturating_add(u64::from(digit))
        })
    })
}

/// Parser for a natural number with an optional leading `-`
pub fn integer<'code>() -> impl Parser<'code, Symbol = char, Output = i64> {
    optional(symbol('-'))
        .map(|sign: Option<char>| {
            move |magnitude: u64| {
                let magnitude = i64::try_from(magnitude).unwrap_or(i64::MAX);
                if sign.is_some() { -magnitude } else { magnitude }
            }
        })
        .ap(natural())
}
