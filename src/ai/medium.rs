use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use tracing::trace;

use crate::game::{rules, Board, Move, Player};

use super::easy::random_open_move;
use super::strategy::Strategy;
use super::tactics;

/// Column order tried by the random fallback before shuffling.
const CENTER_PREFERENCE: [usize; 7] = [3, 2, 4, 1, 5, 0, 6];

/// Positional bonus per column: centre 3, then 2 and 1 moving outwards.
const COLUMN_BONUS: [usize; 7] = [0, 1, 2, 3, 2, 1, 0];

/// Horizontal and vertical axes used by the threat count.
const THREAT_AXES: [(isize, isize); 2] = [(0, 1), (1, 0)];

/// Win, block, otherwise usually build on its own pieces.
///
/// Each turn runs the same priority chain: immediate win, block the
/// opponent's immediate win, then with probability `strategic_chance` the
/// cell with the best threat score, else a shuffled centre-first column.
pub struct MediumAi {
    rng: StdRng,
    strategic_chance: f64,
}

impl MediumAi {
    /// Panics unless `strategic_chance` is a probability in `[0, 1]`.
    pub fn new(strategic_chance: f64) -> Self {
        check_chance(strategic_chance);
        MediumAi {
            rng: StdRng::from_os_rng(),
            strategic_chance,
        }
    }

    pub fn seeded(strategic_chance: f64, seed: u64) -> Self {
        check_chance(strategic_chance);
        MediumAi {
            rng: StdRng::seed_from_u64(seed),
            strategic_chance,
        }
    }

    fn random_preferred(&mut self, board: &Board) -> Option<Move> {
        let mut order = CENTER_PREFERENCE;
        order.shuffle(&mut self.rng);
        order
            .into_iter()
            .find_map(|col| board.landing_row(col).map(|row| Move::new(row, col)))
    }
}

fn check_chance(strategic_chance: f64) {
    assert!(
        (0.0..=1.0).contains(&strategic_chance),
        "strategic chance must be in [0, 1], got {strategic_chance}"
    );
}

/// Threat score of dropping a `player` piece at `(row, col)`: the length of
/// every horizontal or vertical run of two or more it would be part of, plus
/// the column bonus.
pub fn threat_score(board: &mut Board, row: usize, col: usize, player: Player) -> usize {
    board.place(row, col, player);
    let connections: usize = THREAT_AXES
        .iter()
        .map(|&axis| rules::run_length(board, Move::new(row, col), player, axis))
        .filter(|&run| run >= 2)
        .sum();
    board.clear(row, col);
    connections + COLUMN_BONUS[col]
}

/// Highest threat score over all open columns; ties keep the lowest column.
pub fn best_strategic_move(board: &mut Board, player: Player) -> Option<(Move, usize)> {
    let mut best: Option<(Move, usize)> = None;
    for col in board.valid_columns() {
        let Some(row) = board.landing_row(col) else {
            continue;
        };
        let score = threat_score(board, row, col, player);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((Move::new(row, col), score));
        }
    }
    best
}

impl Strategy for MediumAi {
    fn choose_move(&mut self, board: &mut Board, player: Player) -> Move {
        assert!(board.valid_columns().len() > 0, "No legal moves available");

        if let Some(mv) = tactics::forced_move(board, player) {
            return mv;
        }

        if let Some((mv, score)) = best_strategic_move(board, player) {
            if score > 0 && self.rng.random_bool(self.strategic_chance) {
                trace!(column = mv.column, score, "strategic move");
                return mv;
            }
        }

        trace!("center-biased random move");
        self.random_preferred(board)
            .or_else(|| random_open_move(board, &mut self.rng))
            .expect("an open column exists")
    }

    fn name(&self) -> &str {
        "Medium"
    }
}
