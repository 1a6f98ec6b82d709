//! Shared board fixtures for unit tests.

use super::{Board, Move, Player, CAPACITY};

/// Fills the board without any line of four: columns are filled in pairs
/// (0-1, 2-3, 4-5) with a two-up two-down pattern, then column 6 alone.
pub const DRAW_SEQUENCE: [usize; CAPACITY] = [
    0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, //
    2, 3, 2, 3, 3, 2, 3, 2, 2, 3, 2, 3, //
    4, 5, 4, 5, 5, 4, 5, 4, 4, 5, 4, 5, //
    6, 6, 6, 6, 6, 6,
];

/// Drop the given columns alternately, Player One first.
pub fn play_columns(board: &mut Board, columns: &[usize]) -> Vec<Move> {
    let mut player = Player::One;
    columns
        .iter()
        .map(|&col| {
            let mv = board.drop_piece(col, player).unwrap();
            player = player.other();
            mv
        })
        .collect()
}

/// Build a board from a picture, top row first: `X` = Player One,
/// `O` = Player Two, `.` = empty. The picture must respect gravity.
pub fn board_from_rows(rows: [&str; 6]) -> Board {
    let mut board = Board::new();
    for (row, line) in rows.iter().enumerate().rev() {
        for (col, ch) in line.chars().filter(|c| !c.is_whitespace()).enumerate() {
            match ch {
                'X' => board.place(row, col, Player::One),
                'O' => board.place(row, col, Player::Two),
                _ => {}
            }
        }
    }
    board
}
