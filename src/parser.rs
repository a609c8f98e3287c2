use crate::cursor::Cursor;

/// Every way a parser could match at one position, in order
///
/// Each entry pairs a parsed value with the cursor just past what it
/// consumed. An empty list is a failed parse.
pub type Alternatives<'code, T, O> = Vec<(O, Cursor<'code, T>)>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    /// The type of elements in the input sequence
    type Symbol: 'code;
    type Output;

    /// Enumerate every alternative parse starting at the given cursor
    ///
    /// Implementations must be pure: the same cursor always yields the same
    /// alternatives in the same order, and no returned cursor lies before
    /// the one given.
    fn parse(
        &self,
        cursor: Cursor<'code, Self::Symbol>,
    ) -> Alternatives<'code, Self::Symbol, Self::Output>;

    /// Parse `source` from `position`, reporting plain offsets instead of cursors
    fn parse_at(
        &self,
        source: &'code [Self::Symbol],
        position: usize,
    ) -> Vec<(Self::Output, usize)> {
        self.parse(Cursor::at(source, position))
            .into_iter()
            .map(|(value, cursor)| (value, cursor.position()))
            .collect()
    }
}
