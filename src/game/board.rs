use super::piece::Piece;

pub const ROWS: usize = 3;
pub const COLS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Piece; COLS]; ROWS],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropError {
    ColumnFull,
    InvalidColumn,
    NotAPlayerPiece,
}

/// Length of the longest stretch of consecutive `true` values.
pub fn longest_run<I>(marks: I) -> usize
where
    I: IntoIterator<Item = bool>,
{
    let mut best = 0;
    let mut current = 0;
    for marked in marks {
        if marked {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Piece::Blank; COLS]; ROWS],
        }
    }

    /// Set every cell back to `Blank`
    pub fn clear(&mut self) {
        self.cells = [[Piece::Blank; COLS]; ROWS];
    }

    /// Get the cell at a specific position, `None` when out of range.
    /// Row 0 is the bottom, row 2 is the top
    pub fn get(&self, row: usize, col: usize) -> Option<Piece> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Check if a column is full. Nonexistent columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[ROWS - 1][col] != Piece::Blank
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, piece: Piece) -> Result<usize, DropError> {
        if !piece.is_player() {
            return Err(DropError::NotAPlayerPiece);
        }

        if col >= COLS {
            return Err(DropError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(DropError::ColumnFull);
        }

        // Pieces stack from row 0, so the first blank is the landing row
        let row = (0..ROWS)
            .find(|&row| self.cells[row][col] == Piece::Blank)
            .ok_or(DropError::ColumnFull)?;
        self.cells[row][col] = piece;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|&cell| cell != Piece::Blank)
    }

    /// Longest run of `piece` along any single row or column. Diagonals are
    /// not considered.
    pub fn longest_run(&self, piece: Piece) -> usize {
        let rows = self
            .cells
            .iter()
            .map(|row| longest_run(row.iter().map(|&cell| cell == piece)));
        let cols = (0..COLS)
            .map(|col| longest_run((0..ROWS).map(|row| self.cells[row][col] == piece)));

        rows.chain(cols).max().unwrap_or(0)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
