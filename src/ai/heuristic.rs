use crate::game::{Board, Cell, Player, CENTER_COLUMN, COLS, ROWS};
use crate::game::rules::WIN_LENGTH;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Default heuristic that scans all 4-cell windows and scores threats.
pub struct WindowHeuristic;

impl WindowHeuristic {
    pub const WIN: i32 = 100;
    pub const THREE: i32 = 5;
    pub const TWO: i32 = 2;
    pub const OPPONENT_WIN: i32 = -100;
    pub const OPPONENT_THREE: i32 = -4;
    pub const CENTER_PIECE: i32 = 3;

    /// Score one window from its piece counts. Windows holding pieces of both
    /// players can never be completed and score nothing.
    pub fn score_window(own: usize, opp: usize, empty: usize) -> i32 {
        match (own, opp, empty) {
            (4, 0, 0) => Self::WIN,
            (3, 0, 1) => Self::THREE,
            (2, 0, 2) => Self::TWO,
            (0, 4, 0) => Self::OPPONENT_WIN,
            (0, 3, 1) => Self::OPPONENT_THREE,
            _ => 0,
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let mut score = 0;

        for_each_window(board, |window| {
            let mut own = 0;
            let mut opp = 0;
            let mut empty = 0;
            for cell in window {
                match cell {
                    c if c == own_cell => own += 1,
                    c if c == opp_cell => opp += 1,
                    _ => empty += 1,
                }
            }
            score += Self::score_window(own, opp, empty);
        });

        // Center column bonus
        for row in 0..ROWS {
            if board.get(row, CENTER_COLUMN) == own_cell {
                score += Self::CENTER_PIECE;
            }
        }

        score
    }
}

/// Score `board` for `player` with the default [`WindowHeuristic`].
pub fn evaluate(board: &Board, player: Player) -> i32 {
    WindowHeuristic.evaluate(board, player)
}

/// Call `f` with every run of four cells that fits on the board, along rows,
/// columns and both diagonals.
pub fn for_each_window(board: &Board, mut f: impl FnMut([Cell; WIN_LENGTH])) {
    const SPAN: usize = WIN_LENGTH - 1;

    // Horizontal
    for row in 0..ROWS {
        for col in 0..COLS - SPAN {
            f(std::array::from_fn(|i| board.get(row, col + i)));
        }
    }

    // Vertical
    for col in 0..COLS {
        for row in 0..ROWS - SPAN {
            f(std::array::from_fn(|i| board.get(row + i, col)));
        }
    }

    // Diagonal (top-left to bottom-right)
    for row in 0..ROWS - SPAN {
        for col in 0..COLS - SPAN {
            f(std::array::from_fn(|i| board.get(row + i, col + i)));
        }
    }

    // Diagonal (bottom-left to top-right)
    for row in SPAN..ROWS {
        for col in 0..COLS - SPAN {
            f(std::array::from_fn(|i| board.get(row - i, col + i)));
        }
    }
}
