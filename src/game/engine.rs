use log::debug;

use super::board::{Board, DropError, COLS, ROWS};
use super::piece::Piece;
use super::player::Player;

/// Rules engine for one game: the board plus whose turn it is.
///
/// Nothing here fails. Every unusual situation is reported as a [`Piece`]
/// sentinel:
///
/// - `piece_at` out of range returns `Invalid`
/// - `drop_piece` into a nonexistent column returns `Invalid`
/// - `drop_piece` into a full column returns `Blank`
/// - `game_state` before the board is full returns `Invalid`
///
/// Every `drop_piece` call passes the turn, including the ones that place
/// nothing, so a player who picks a full column loses that turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    turn: Player,
}

impl GameEngine {
    /// Empty board, X to move
    pub fn new() -> Self {
        GameEngine {
            board: Board::new(),
            turn: Player::X,
        }
    }

    /// Discard all moves: every cell blank, X to move
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Player::X;
        debug!("board reset");
    }

    /// Piece at `(row, column)`, with row 0 at the bottom. Out-of-range
    /// coordinates return `Invalid`.
    pub fn piece_at(&self, row: i32, column: i32) -> Piece {
        match (usize::try_from(row), usize::try_from(column)) {
            (Ok(row), Ok(column)) => self.board.get(row, column).unwrap_or(Piece::Invalid),
            _ => Piece::Invalid,
        }
    }

    /// Drop the current player's piece into `column` and pass the turn.
    ///
    /// Returns the placed piece, `Invalid` for a nonexistent column, or
    /// `Blank` when the column is already full.
    pub fn drop_piece(&mut self, column: i32) -> Piece {
        let player = self.turn;
        let piece = player.to_piece();

        let placed = match usize::try_from(column) {
            Ok(col) => self.board.drop_piece(col, piece),
            Err(_) => Err(DropError::InvalidColumn),
        };

        let result = match placed {
            Ok(row) => {
                debug!("{} dropped into column {} at row {}", player.name(), column, row);
                piece
            }
            Err(DropError::InvalidColumn) => {
                debug!("{} lost the turn: column {} does not exist", player.name(), column);
                Piece::Invalid
            }
            Err(DropError::ColumnFull) => {
                debug!("{} lost the turn: column {} is full", player.name(), column);
                Piece::Blank
            }
            Err(DropError::NotAPlayerPiece) => Piece::Invalid,
        };

        self.turn = player.other();
        result
    }

    /// Outcome of the game.
    ///
    /// `Invalid` while any cell is blank, even if one side already has an
    /// unbeatable run. On a full board the player with the strictly longer
    /// row or column run wins; equal runs are a draw, reported as `Blank`.
    pub fn game_state(&self) -> Piece {
        if !self.board.is_full() {
            return Piece::Invalid;
        }

        let x_run = self.board.longest_run(Piece::X);
        let o_run = self.board.longest_run(Piece::O);
        debug!("longest runs: X={} O={}", x_run, o_run);

        match x_run.cmp(&o_run) {
            std::cmp::Ordering::Greater => Piece::X,
            std::cmp::Ordering::Less => Piece::O,
            std::cmp::Ordering::Equal => Piece::Blank,
        }
    }

    /// Player whose piece the next `drop_piece` call will use
    pub fn current_player(&self) -> Player {
        self.turn
    }

    /// Read-only view of the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Columns that still have room
    pub fn legal_columns(&self) -> Vec<i32> {
        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .map(|col| col as i32)
            .collect()
    }

    /// Number of rows, as a signed coordinate bound
    pub const fn rows() -> i32 {
        ROWS as i32
    }

    /// Number of columns, as a signed coordinate bound
    pub const fn columns() -> i32 {
        COLS as i32
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
