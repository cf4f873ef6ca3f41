//! Plain-text rendering of pieces and boards.

use crate::game::{GameEngine, Piece, COLS, ROWS};

/// One display character per piece variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Glyphs {
    pub blank: char,
    pub x: char,
    pub o: char,
    pub invalid: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs {
            blank: Piece::Blank.symbol(),
            x: Piece::X.symbol(),
            o: Piece::O.symbol(),
            invalid: Piece::Invalid.symbol(),
        }
    }
}

impl Glyphs {
    pub fn glyph(&self, piece: Piece) -> char {
        match piece {
            Piece::Blank => self.blank,
            Piece::X => self.x,
            Piece::O => self.o,
            Piece::Invalid => self.invalid,
        }
    }
}

/// Render the board top row first, each row labelled with its index and a
/// column index footer underneath:
///
/// ```text
/// 2 [ | | | ]
/// 1 [O| | | ]
/// 0 [X|X| | ]
///    0 1 2 3
/// ```
pub fn render_board(engine: &GameEngine, glyphs: &Glyphs) -> String {
    let mut out = String::new();

    for row in (0..ROWS).rev() {
        let cells: Vec<String> = (0..COLS)
            .map(|col| glyphs.glyph(engine.piece_at(row as i32, col as i32)).to_string())
            .collect();
        out.push_str(&format!("{} [{}]\n", row, cells.join("|")));
    }

    let footer: Vec<String> = (0..COLS).map(|col| col.to_string()).collect();
    out.push_str(&format!("   {}\n", footer.join(" ")));
    out
}

/// Human-readable outcome for a `game_state` result.
pub fn describe_outcome(outcome: Piece) -> String {
    match outcome {
        Piece::X | Piece::O => format!("{} wins", outcome.symbol()),
        Piece::Blank => "draw".to_string(),
        Piece::Invalid => "game not over".to_string(),
    }
}
