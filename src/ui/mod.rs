//! Terminal UI: main menu, game screen against a human or the computer, and
//! the per-mode statistics table.

mod app;
pub mod board_widget;
mod game_view;
mod menu_view;
mod stats_view;

pub use app::{App, MenuItem, Screen};
