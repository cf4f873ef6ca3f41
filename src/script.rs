//! Fixed move sequences: parse a list of columns and play it against an engine.

use crate::error::ScriptError;
use crate::game::{GameEngine, Piece, Player};

/// One `drop_piece` call and what it returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub column: i32,
    /// Player whose turn the call used up
    pub player: Player,
    pub result: Piece,
}

impl MoveRecord {
    /// True when a piece actually landed on the board.
    pub fn placed(&self) -> bool {
        self.result.is_player()
    }
}

/// Parse columns separated by commas and/or whitespace, e.g. `"0, 1 2,-1"`.
/// Negative and too-large columns are accepted here; the engine reports them.
pub fn parse_moves(input: &str) -> Result<Vec<i32>, ScriptError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token.parse::<i32>().map_err(|_| ScriptError::BadColumn {
                token: token.to_string(),
                position: i + 1,
            })
        })
        .collect()
}

/// Apply `moves` in order and record every result.
pub fn play_moves(engine: &mut GameEngine, moves: &[i32]) -> Vec<MoveRecord> {
    moves
        .iter()
        .map(|&column| {
            let player = engine.current_player();
            let result = engine.drop_piece(column);
            MoveRecord {
                column,
                player,
                result,
            }
        })
        .collect()
}
