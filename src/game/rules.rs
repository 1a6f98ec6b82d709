//! Win and draw detection.
//!
//! [`check_win`] only looks at the four lines through the piece that was just
//! placed, since no other piece can have completed a line on that ply.
//! [`has_winner`] scans the whole board and is meant for positions without a
//! known last move, such as the inner nodes of a search.

use super::board::{Board, Cell, Move, COLS, ROWS};
use super::player::Player;

/// Pieces in a line needed to win.
pub const WIN_LENGTH: usize = 4;

/// Fewest plies after which a win is possible: four pieces for the first
/// player plus the three the second player has placed in between.
pub const MIN_PLIES_FOR_WIN: usize = 2 * WIN_LENGTH - 1;

/// Line axes as (row step, column step): vertical, horizontal, "/" and "\".
pub const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 1), (1, 1)];

/// Length of the run of `player` pieces through `last` along one axis,
/// counting the piece at `last` itself and extending both ways.
///
/// Counting is not capped at [`WIN_LENGTH`]; a run of five reports five.
pub fn run_length(board: &Board, last: Move, player: Player, axis: (isize, isize)) -> usize {
    let cell = player.to_cell();
    if board.get(last.row, last.column) != cell {
        return 0;
    }

    let (dr, dc) = axis;
    1 + count_direction(board, last, cell, dr, dc) + count_direction(board, last, cell, -dr, -dc)
}

fn count_direction(
    board: &Board,
    from: Move,
    cell: Cell,
    dr: isize,
    dc: isize,
) -> usize {
    let mut count = 0;
    let mut r = from.row as isize + dr;
    let mut c = from.column as isize + dc;
    while r >= 0
        && r < ROWS as isize
        && c >= 0
        && c < COLS as isize
        && board.get(r as usize, c as usize) == cell
    {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Check if the move at `last` completed four in a row for `player`.
pub fn check_win(board: &Board, last: Move, player: Player) -> bool {
    AXES.iter()
        .any(|&axis| run_length(board, last, player, axis) >= WIN_LENGTH)
}

/// Whole-board scan: does either player have four in a row anywhere?
pub fn has_winner(board: &Board) -> bool {
    (0..ROWS).any(|row| {
        (0..COLS).any(|col| match Player::from_cell(board.get(row, col)) {
            Some(owner) => check_win(board, Move::new(row, col), owner),
            None => false,
        })
    })
}

/// A position nobody can move in any more: someone has won, or the board is full.
pub fn is_finished(board: &Board) -> bool {
    has_winner(board) || board.is_full()
}

/// Full board with no four in a row.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !has_winner(board)
}
