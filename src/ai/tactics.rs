//! One-ply tactics shared by the Medium and Hard opponents.

use tracing::trace;

use crate::game::{rules, Board, Move, Player};

/// First column (ascending) where dropping a `player` piece wins at once.
///
/// Each candidate is placed on its landing row, checked, and cleared again.
pub fn find_winning_move(board: &mut Board, player: Player) -> Option<Move> {
    for col in board.valid_columns() {
        let Some(row) = board.landing_row(col) else {
            continue;
        };
        board.place(row, col, player);
        let wins = rules::check_win(board, Move::new(row, col), player);
        board.clear(row, col);
        if wins {
            return Some(Move::new(row, col));
        }
    }
    None
}

/// Move `player` cannot pass on: its own immediate win, otherwise the cell
/// that stops the opponent's immediate win.
pub fn forced_move(board: &mut Board, player: Player) -> Option<Move> {
    if let Some(mv) = find_winning_move(board, player) {
        trace!(column = mv.column, "taking immediate win");
        return Some(mv);
    }
    if let Some(mv) = find_winning_move(board, player.other()) {
        trace!(column = mv.column, "blocking opponent win");
        return Some(mv);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::fixtures::board_from_rows;

    #[test]
    fn test_finds_horizontal_completion() {
        let mut board = board_from_rows([
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
            "O O O . . . .",
            "X X X . . . .",
        ]);
        let before = board;
        assert_eq!(find_winning_move(&mut board, Player::One), Some(Move::new(5, 3)));
        assert_eq!(find_winning_move(&mut board, Player::Two), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_no_win_on_empty_board() {
        let mut board = Board::new();
        assert_eq!(find_winning_move(&mut board, Player::One), None);
        assert_eq!(forced_move(&mut board, Player::One), None);
    }

    #[test]
    fn test_forced_move_prefers_win_over_block() {
        let mut board = board_from_rows([
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
            "O . . . . . .",
            "O . . . . . .",
            "O X X X . . .",
        ]);
        // Player One wins at column 4; Player Two threatens column 0.
        assert_eq!(forced_move(&mut board, Player::One), Some(Move::new(5, 4)));
        // Player Two wins first at column 0 rather than blocking.
        assert_eq!(forced_move(&mut board, Player::Two), Some(Move::new(2, 0)));
    }

    #[test]
    fn test_forced_move_blocks() {
        let mut board = board_from_rows([
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . O",
            ". X X X . . O",
        ]);
        // Player One threatens both ends; the first in column order is blocked.
        assert_eq!(forced_move(&mut board, Player::Two), Some(Move::new(5, 0)));
    }

    #[test]
    fn test_ignores_full_columns() {
        let mut board = board_from_rows([
            "X . . . . . .",
            "O . . . . . .",
            "X . . . . . .",
            "O . . . . . .",
            "X . . . . . .",
            "O . . . . . .",
        ]);
        assert_eq!(find_winning_move(&mut board, Player::One), None);
    }
}
