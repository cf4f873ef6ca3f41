use super::piece::Piece;

/// Whose turn it is. `X` always moves first after a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to the piece it drops
    pub fn to_piece(self) -> Piece {
        match self {
            Player::X => Piece::X,
            Player::O => Piece::O,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::X.other(), Player::O);
        assert_eq!(Player::O.other(), Player::X);
    }

    #[test]
    fn test_to_piece() {
        assert_eq!(Player::X.to_piece(), Piece::X);
        assert_eq!(Player::O.to_piece(), Piece::O);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::X.name(), "X");
        assert_eq!(Player::O.name(), "O");
    }
}
