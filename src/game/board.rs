use crate::error::MoveError;

use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Number of pieces on a completely filled board.
pub const CAPACITY: usize = ROWS * COLS;
pub const CENTER_COLUMN: usize = COLS / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

/// A placed (or to-be-placed) piece. The row is always derived by gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub column: usize,
}

impl Move {
    pub fn new(row: usize, column: usize) -> Self {
        Move { row, column }
    }
}

/// 6x7 grid, row 0 at the top and row 5 at the bottom.
///
/// Pieces only enter through [`Board::drop_piece`] (or the search primitives
/// [`Board::place`]/[`Board::clear`], which must preserve the same shape), so a
/// column never has an empty cell below an occupied one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Set every cell back to empty.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Lowest empty row of a column, if any.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a piece in a column and return the move with the row it landed on.
    ///
    /// A full column is rejected with [`MoveError::ColumnFull`] and the board is
    /// left untouched.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<Move, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        let row = self.landing_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = player.to_cell();
        Ok(Move::new(row, col))
    }

    /// Put a piece directly on `(row, col)`.
    ///
    /// Search primitive: the caller supplies the gravity row itself. Placing on
    /// an occupied cell is a logic error and panics.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        assert_eq!(
            self.cells[row][col],
            Cell::Empty,
            "place on occupied cell ({row}, {col})"
        );
        debug_assert!(
            row == ROWS - 1 || self.cells[row + 1][col] != Cell::Empty,
            "place would float above an empty cell ({row}, {col})"
        );
        self.cells[row][col] = player.to_cell();
    }

    /// Remove the piece on `(row, col)`, undoing a [`Board::place`].
    ///
    /// Clearing an empty cell is a logic error and panics.
    pub fn clear(&mut self, row: usize, col: usize) {
        assert_ne!(
            self.cells[row][col],
            Cell::Empty,
            "clear on empty cell ({row}, {col})"
        );
        debug_assert!(
            row == 0 || self.cells[row - 1][col] == Cell::Empty,
            "clear would leave a floating piece above ({row}, {col})"
        );
        self.cells[row][col] = Cell::Empty;
    }

    /// Check if the board is completely full.
    ///
    /// Looking at the top row is enough since columns have no gaps.
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|&cell| cell != Cell::Empty)
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn valid_columns(&self) -> ValidColumns {
        let mask = (0..COLS)
            .filter(|&col| self.cells[0][col] == Cell::Empty)
            .fold(0u8, |mask, col| mask | (1u8 << col));
        ValidColumns { mask }
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of the non-full columns of a board.
///
/// Owns its data, so the board can be mutated while iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidColumns {
    mask: u8,
}

impl ValidColumns {
    pub fn contains(&self, col: usize) -> bool {
        col < COLS && self.mask & (1u8 << col) != 0
    }
}

impl Iterator for ValidColumns {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.mask == 0 {
            return None;
        }
        let col = self.mask.trailing_zeros() as usize;
        self.mask &= self.mask - 1;
        Some(col)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.mask.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for ValidColumns {}
