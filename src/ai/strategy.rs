use std::str::FromStr;

use crate::config::AiConfig;
use crate::game::{Board, Move, Player};

use super::easy::EasyAi;
use super::medium::MediumAi;
use super::minimax::HardAi;

/// A computer opponent: picks where `player` should drop next.
///
/// Implementations may simulate moves on `board` but must hand it back
/// exactly as they received it. The board must have at least one open column.
pub trait Strategy {
    /// Choose a move for `player`. The returned row is the column's landing row.
    fn choose_move(&mut self, board: &mut Board, player: Player) -> Move;

    /// Return the strategy's display name.
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Build the opponent for this difficulty from the `[ai]` config section.
    pub fn build(self, config: &AiConfig) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => match config.seed {
                Some(seed) => Box::new(EasyAi::seeded(seed)),
                None => Box::new(EasyAi::new()),
            },
            Difficulty::Medium => match config.seed {
                Some(seed) => Box::new(MediumAi::seeded(config.medium_strategic_chance, seed)),
                None => Box::new(MediumAi::new(config.medium_strategic_chance)),
            },
            Difficulty::Hard => Box::new(HardAi::new(config.hard_depth).pruning(config.pruning)),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "normal" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}' (expected easy, medium or hard)")),
        }
    }
}
