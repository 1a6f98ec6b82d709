use super::board::Cell;

/// One of the two sides. `One` plays Red and always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::Player1,
            Player::Two => Cell::Player2,
        }
    }

    /// Owner of an occupied cell, `None` for an empty one.
    pub fn from_cell(cell: Cell) -> Option<Player> {
        match cell {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::One),
            Cell::Player2 => Some(Player::Two),
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player 1 (Red)",
            Player::Two => "Player 2 (Yellow)",
        }
    }
}
