//! Core Connect Four game logic: board, players, win/draw detection and the
//! per-game session state machine.

mod board;
mod player;
pub mod rules;
mod session;

#[cfg(test)]
pub(crate) mod fixtures;

pub use board::{Board, Cell, Move, ValidColumns, CAPACITY, CENTER_COLUMN, COLS, ROWS};
pub use player::Player;
pub use session::{
    GameMode, GameSession, GameStatus, MoveInput, SessionEvent, SessionResult, COMPUTER_SEAT,
};
