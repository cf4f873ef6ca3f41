//! # Piezas
//!
//! Rules engine for a two-player gravity-drop game on a 3x4 board, loosely
//! based on Connect Four. The game only ends when every cell is filled; the
//! player with the longest horizontal or vertical run then wins.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: pieces, board, turn toggle, engine
//! - [`render`]: Text rendering of pieces and boards
//! - [`script`]: Parsing and playing fixed move sequences
//! - [`random`]: Random player and batch simulation
//! - [`ui`]: Terminal UI for interactive play
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod random;
pub mod render;
pub mod script;
pub mod ui;
