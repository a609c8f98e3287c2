use crate::cursor::Cursor;
use crate::parser::{Alternatives, Parser};

/// Parser that matches a literal run of symbols
///
/// On success the output is the matched slice of the input, not a copy of
/// the literal.
pub struct Token<T> {
    literal: Vec<T>,
}

impl<T> Token<T> {
    pub fn new(literal: Vec<T>) -> Self {
        Token { literal }
    }
}

impl<'code, T> Parser<'code> for Token<T>
where
    T: PartialEq + 'code,
{
    type Symbol = T;
    type Output = &'code [T];

    fn parse(&self, cursor: Cursor<'code, T>) -> Alternatives<'code, T, &'code [T]> {
        let remaining = cursor.remaining();
        if remaining.starts_with(&self.literal) {
            let length = self.literal.len();
            vec![(&remaining[..length], cursor.advance(length))]
        } else {
            Vec::new()
        }
    }
}

/// Convenience function to create a Token parser
pub fn token<T>(literal: &[T]) -> Token<T>
where
    T: Clone,
{
    Token::new(literal.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_token_matches_prefix() {
        let data = chars("abcd");
        let parser = token(&chars("ab"));
        assert_eq!(parser.parse_at(&data, 0), vec![(&data[..2], 2)]);
    }

    #[test]
    fn test_token_mismatch() {
        let data = chars("ac");
        let parser = token(&chars("ab"));
        assert!(parser.parse_at(&data, 0).is_empty());
    }

    #[test]
    fn test_token_does_not_read_past_end() {
        let data = chars("xa");
        let parser = token(&chars("ab"));
        assert!(parser.parse_at(&data, 1).is_empty());
    }

    #[test]
    fn test_token_mid_sequence() {
        let data = b"let x";
        let parser = token(b"x");
        assert_eq!(parser.parse_at(&data[..], 4), vec![(&b"x"[..], 5)]);
    }

    #[test]
    fn test_empty_token_is_zero_width() {
        let data = chars("abc");
        let parser = token::<char>(&[]);
        let empty: &[char] = &[];
        assert_eq!(parser.parse_at(&data, 1), vec![(empty, 1)]);
    }
}
