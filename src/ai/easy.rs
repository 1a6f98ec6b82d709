use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Move, Player};

use super::strategy::Strategy;

/// Picks uniformly among the open columns.
pub struct EasyAi {
    rng: StdRng,
}

impl EasyAi {
    pub fn new() -> Self {
        EasyAi {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests and reproducible matches.
    pub fn seeded(seed: u64) -> Self {
        EasyAi {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EasyAi {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniformly random open column, `None` on a full board.
pub(crate) fn random_open_move(board: &Board, rng: &mut StdRng) -> Option<Move> {
    let columns: Vec<usize> = board.valid_columns().collect();
    if columns.is_empty() {
        return None;
    }
    let col = columns[rng.random_range(0..columns.len())];
    board.landing_row(col).map(|row| Move::new(row, col))
}

impl Strategy for EasyAi {
    fn choose_move(&mut self, board: &mut Board, _player: Player) -> Move {
        // Drawing from the open columns only, so a nearly full board cannot
        // make this loop or retry.
        match random_open_move(board, &mut self.rng) {
            Some(mv) => mv,
            None => panic!("No legal moves available"),
        }
    }

    fn name(&self) -> &str {
        "Easy"
    }
}
