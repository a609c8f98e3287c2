use std::fmt;

/// A read position over a borrowed symbol sequence
///
/// A cursor never owns or copies the sequence it points into. Advancing a
/// cursor produces a new cursor; the old one stays valid, which is what lets
/// every alternative of an ambiguous parse carry its own position.
pub struct Cursor<'code, T> {
    source: &'code [T],
    position: usize,
}

impl<'code, T> Cursor<'code, T> {
    /// Create a cursor at the start of `source`
    pub fn new(source: &'code [T]) -> Self {
        Cursor {
            source,
            position: 0,
        }
    }

    /// Create a cursor at `position`, clamped to the length of `source`
    pub fn at(source: &'code [T], position: usize) -> Self {
        Cursor {
            source,
            position: position.min(source.len()),
        }
    }

    /// Get the symbol at the current position, or `None` at the end of the sequence
    pub fn value(&self) -> Option<&'code T> {
        self.source.get(self.position)
    }

    /// Advance by one symbol
    ///
    /// If already at the end, returns a cursor still positioned at the end
    pub fn next(self) -> Self {
        self.advance(1)
    }

    /// Advance by `count` symbols, stopping at the end of the sequence
    pub fn advance(self, count: usize) -> Self {
        Cursor {
            source: self.source,
            position: self.position.saturating_add(count).min(self.source.len()),
        }
    }

    /// Get the current position in the sequence
    pub fn position(&self) -> usize {
        self.position
    }

    /// Check if the cursor is at the end of the sequence
    pub fn eos(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Get the whole underlying sequence
    pub fn source(&self) -> &'code [T] {
        self.source
    }

    /// Get the unconsumed suffix of the sequence
    pub fn remaining(&self) -> &'code [T] {
        &self.source[self.position..]
    }

    /// Consume the cursor and return its sequence and position
    pub fn inner(self) -> (&'code [T], usize) {
        (self.source, self.position)
    }
}

// Manual impls: the symbols themselves need not be `Copy` or `Clone`.
impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.source, other.source) && self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.source.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations_chars() {
        let data: Vec<char> = "hello".chars().collect();
        let cursor = Cursor::new(&data);

        assert_eq!(cursor.value(), Some(&'h'));

        let cursor = cursor.next();
        assert_eq!(cursor.value(), Some(&'e'));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_eos() {
        let data = b"ab";
        let mut cursor = Cursor::new(&data[..]);

        assert_eq!(cursor.value(), Some(&b'a'));
        cursor = cursor.next();
        assert_eq!(cursor.value(), Some(&b'b'));

        cursor = cursor.next();
        assert!(cursor.eos());
        assert_eq!(cursor.value(), None);

        // Advancing past the end stays at the end
        cursor = cursor.next();
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_empty_data() {
        let data: [u32; 0] = [];
        let cursor = Cursor::new(&data[..]);

        assert!(cursor.eos());
        assert!(cursor.value().is_none());
        assert!(cursor.remaining().is_empty());
    }

    #[test]
    fn test_at_clamps_position() {
        let data = [1u32, 2, 3];
        let cursor = Cursor::at(&data[..], 10);
        assert_eq!(cursor.position(), 3);
        assert!(cursor.eos());
    }

    #[test]
    fn test_advance_saturates() {
        let data = [1u32, 2, 3];
        let cursor = Cursor::new(&data[..]).advance(2);
        assert_eq!(cursor.value(), Some(&3));
        assert_eq!(cursor.advance(usize::MAX).position(), 3);
    }

    #[test]
    fn test_copy_independence() {
        let data = [5u32, 10, 15, 20];
        let cursor = Cursor::new(&data[..]);

        let saved_at_5 = cursor;
        let cursor = cursor.next();
        assert_eq!(cursor.value(), Some(&10));
        assert_eq!(saved_at_5.value(), Some(&5));

        let saved_at_10 = cursor;
        let cursor = cursor.next();
        assert_eq!(cursor.value(), Some(&15));
        assert_eq!(saved_at_10.value(), Some(&10));

        assert_eq!(saved_at_5.next(), saved_at_10);
    }

    #[test]
    fn test_remaining_and_inner() {
        let data = [99u32, 88, 77];
        let cursor = Cursor::new(&data[..]).next();

        assert_eq!(cursor.remaining(), &[88, 77]);
        assert_eq!(cursor.source(), &[99, 88, 77]);

        let (source, pos) = cursor.inner();
        assert_eq!(source, &[99, 88, 77]);
        assert_eq!(pos, 1);
    }

    #[test]
    fn test_equality_requires_same_sequence() {
        let first = [1u32, 2];
        let second = [1u32, 2];
        assert_ne!(Cursor::new(&first[..]), Cursor::new(&second[..]));
        assert_eq!(Cursor::new(&first[..]), Cursor::at(&first[..], 0));
    }
}
