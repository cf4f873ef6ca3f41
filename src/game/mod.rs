//! Core Piezas rules: board representation, pieces and turns, and the game
//! engine that places pieces under gravity and scores a full board.

mod board;
mod engine;
mod piece;
mod player;

pub use board::{longest_run, Board, DropError, COLS, ROWS};
pub use engine::GameEngine;
pub use piece::Piece;
pub use player::Player;
