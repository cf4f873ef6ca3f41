use std::fmt;

/// A cell value, or a sentinel returned by the engine.
///
/// `Invalid` is only ever returned to callers (out-of-bounds reads, drops into
/// a nonexistent column, outcome queries before the board is full). It is
/// never stored on a [`Board`](super::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Blank,
    X,
    O,
    Invalid,
}

impl Piece {
    /// Canonical one-character glyph.
    pub fn symbol(self) -> char {
        match self {
            Piece::Blank => ' ',
            Piece::X => 'X',
            Piece::O => 'O',
            Piece::Invalid => '?',
        }
    }

    /// True for the two player pieces.
    pub fn is_player(self) -> bool {
        matches!(self, Piece::X | Piece::O)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
