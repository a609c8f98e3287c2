use thiserror::Error;

/// Why [`parse_complete`](crate::driver::parse_complete) could not produce a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The parser produced no alternatives at all, starting from the beginning of the input
    #[error("no parse")]
    NoParse,

    /// Alternatives exist, but none of them reaches the end of the input
    #[error("input not fully consumed: stopped at position {consumed} of {length}")]
    Incomplete { consumed: usize, length: usize },
}

impl ParseError {
    /// Returns the furthest position reached, if any alternative was found
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::NoParse => None,
            ParseError::Incomplete { consumed, .. } => Some(*consumed),
        }
    }
}
