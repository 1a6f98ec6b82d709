use tracing::debug;

use crate::game::{rules, Board, Move, Player};

use super::heuristic::{Heuristic, WindowHeuristic};
use super::strategy::Strategy;
use super::tactics;

/// Plies searched by the Hard opponent unless configured otherwise.
pub const DEFAULT_DEPTH: usize = 5;

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: usize,
    pub score: i32,
    /// Minimax frames visited below the root.
    pub nodes: u64,
}

/// Depth-limited minimax agent with alpha-beta pruning.
///
/// Leaves are scored from the searching player's side only, so the two
/// halves of the recursion are written out as max and min rather than
/// negated.
pub struct HardAi {
    depth: usize,
    pruning: bool,
    heuristic: Box<dyn Heuristic>,
}

impl HardAi {
    pub fn new(depth: usize) -> Self {
        HardAi {
            depth,
            pruning: true,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        HardAi {
            depth,
            pruning: true,
            heuristic,
        }
    }

    /// Turn alpha-beta cutoffs on or off. Results are identical either way.
    pub fn pruning(mut self, enabled: bool) -> Self {
        self.pruning = enabled;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Score every open column for `player` and return the best one, or
    /// `None` on a full board. Ties keep the lowest column.
    pub fn search(&self, board: &mut Board, player: Player) -> Option<SearchResult> {
        let mut search = Search {
            ai: player,
            pruning: self.pruning,
            heuristic: self.heuristic.as_ref(),
            nodes: 0,
        };
        let child_depth = self.depth.saturating_sub(1);
        let mut best: Option<(usize, i32)> = None;

        for col in board.valid_columns() {
            let Some(row) = board.landing_row(col) else {
                continue;
            };
            // The running best doubles as the root alpha. A child cut off
            // against it is worth no more than the current best, which a
            // strict comparison would reject anyway.
            let alpha = match best {
                Some((_, score)) if self.pruning => score,
                _ => i32::MIN,
            };
            board.place(row, col, player);
            let score = search.minimax(board, child_depth, alpha, i32::MAX, false);
            board.clear(row, col);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((col, score));
            }
        }

        best.map(|(column, score)| SearchResult {
            column,
            score,
            nodes: search.nodes,
        })
    }
}

impl Default for HardAi {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

struct Search<'a> {
    ai: Player,
    pruning: bool,
    heuristic: &'a dyn Heuristic,
    nodes: u64,
}

impl Search<'_> {
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 || rules::is_finished(board) {
            return self.heuristic.evaluate(board, self.ai);
        }

        let columns = board.valid_columns();
        if columns.len() == 0 {
            return 0;
        }

        let mover = if maximizing { self.ai } else { self.ai.other() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for col in columns {
            let Some(row) = board.landing_row(col) else {
                continue;
            };
            board.place(row, col, mover);
            let score = self.minimax(board, depth - 1, alpha, beta, !maximizing);
            board.clear(row, col);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if self.pruning && beta <= alpha {
                break;
            }
        }

        best
    }
}

impl Strategy for HardAi {
    fn choose_move(&mut self, board: &mut Board, player: Player) -> Move {
        if let Some(mv) = tactics::forced_move(board, player) {
            return mv;
        }

        let result = match self.search(board, player) {
            Some(result) => result,
            None => panic!("No legal moves available"),
        };
        debug!(
            column = result.column,
            score = result.score,
            nodes = result.nodes,
            depth = self.depth,
            "hard search finished"
        );

        match board.landing_row(result.column) {
            Some(row) => Move::new(row, result.column),
            None => unreachable!("search returned a full column"),
        }
    }

    fn name(&self) -> &str {
        "Hard"
    }
}
