use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Repeatedly apply a parser from the start of `source`, collecting each value
///
/// Only the first alternative of each application is kept. Stops at the end
/// of the input or when the parser fails; it does not report whether the
/// whole input was consumed. A zero-width first alternative is recorded once
/// and then ends the run.
///
/// # Example
/// ```
/// use ambicomb::{driver::parse, symbol::any_symbol};
///
/// let data: Vec<char> = "abc".chars().collect();
/// assert_eq!(parse(&any_symbol(), &data), vec!['a', 'b', 'c']);
/// ```
pub fn parse<'code, P>(parser: &P, source: &'code [P::Symbol]) -> Vec<P::Output>
where
    P: Parser<'code>,
{
    let mut cursor = Cursor::new(source);
    let mut results = Vec::new();

    while !cursor.eos() {
        let Some((value, next_cursor)) = parser.parse(cursor).into_iter().next() else {
            log::trace!("driver stopped on failure at position {}", cursor.position());
            break;
        };
        results.push(value);
        if next_cursor.position() == cursor.position() {
            log::trace!(
                "driver stopped on zero-width match at position {}",
                cursor.position()
            );
            break;
        }
        cursor = next_cursor;
    }

    log::trace!("driver collected {} values", results.len());
    results
}

/// Run a parser once over all of `source` and return the first alternative that consumes it entirely
///
/// # Errors
/// - [`ParseError::NoParse`] if the parser yields no alternatives
/// - [`ParseError::Incomplete`] if no alternative reaches the end; `consumed`
///   is the furthest position any alternative reached
pub fn parse_complete<'code, P>(
    parser: &P,
    source: &'code [P::Symbol],
) -> Result<P::Output, ParseError>
where
    P: Parser<'code>,
{
    let alternatives = parser.parse(Cursor::new(source));
    log::trace!("complete parse found {} alternatives", alternatives.len());

    let mut consumed = None;
    for (value, cursor) in alternatives {
        if cursor.eos() {
            return Ok(value);
        }
        consumed = consumed.max(Some(cursor.position()));
    }

    match consumed {
        None => Err(ParseError::NoParse),
        Some(consumed) => Err(ParseError::Incomplete {
            consumed,
            length: source.len(),
        }),
    }
}
