mod easy;
pub mod heuristic;
mod medium;
mod minimax;
mod strategy;
pub mod tactics;

pub use easy::EasyAi;
pub use heuristic::{evaluate, Heuristic, WindowHeuristic};
pub use medium::{best_strategic_move, threat_score, MediumAi};
pub use minimax::{HardAi, SearchResult, DEFAULT_DEPTH};
pub use strategy::{Difficulty, Strategy};
