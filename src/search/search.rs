//! Main search engine implementation.
//!
//! Depth-bounded, full-width minimax (no pruning) over the move enumerator,
//! with the material evaluator at the leaves. Ties keep the first child in
//! enumeration order, so a search at a fixed depth is a pure function of
//! the input board. The whole search runs under a wall-clock deadline; on
//! expiry, or when the result degenerates to the input board, the engine
//! falls back to a uniformly random legal board.

use log::debug;
use rand::Rng;

use super::params::SearchParams;
use super::stats::SearchStats;
use super::thread_mgr::ChildGenerator;
use crate::board::{Board, Color};
use crate::eval::evaluate;
use crate::movegen::child_boards;
use crate::time::Deadline;

/// Main search engine.
pub struct Search {
    params: SearchParams,
    stats: SearchStats,
    generator: ChildGenerator,
}

impl Search {
    /// Create a new search engine.
    pub fn new(params: SearchParams) -> Self {
        let generator = ChildGenerator::new(params.num_threads);
        Self {
            params,
            stats: SearchStats::new(),
            generator,
        }
    }

    /// Create a search engine with reasonable defaults.
    pub fn with_defaults() -> Self {
        Self::new(SearchParams::default())
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Statistics of the most recent `choose_move` call.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Choose the board to move to for the engine's color.
    ///
    /// Runs minimax to the configured depth under the configured time
    /// budget. When the deadline expires mid-search, or the search comes
    /// back with the input board unchanged (no line improved on the seed),
    /// picks uniformly at random among the legal resulting boards instead;
    /// with no legal board at all, returns the input unchanged. The result
    /// is always crowned before it is returned (idempotent).
    pub fn choose_move(&mut self, board: &Board) -> Board {
        self.stats.reset();
        self.stats.start_timing();
        let deadline = Deadline::new(self.params.time_limit_ms);
        let me = self.params.ai_color;

        let chosen = match self.search_root(board, &deadline) {
            Some((score, best)) if best != *board => {
                debug!("minimax picked a line scoring {:.2} for {}", score, me);
                best
            }
            searched => {
                if searched.is_none() {
                    self.stats.inc_abort();
                    debug!("search abandoned at the deadline");
                }
                self.random_fallback(board, me)
            }
        };
        self.stats.update_timing();
        chosen.crown_pieces()
    }

    /// Root ply. The fan-out here is where branching is widest, so child
    /// generation goes through the worker pool; inner levels generate
    /// sequentially.
    fn search_root(&mut self, board: &Board, deadline: &Deadline) -> Option<(f64, Board)> {
        let depth = self.params.max_depth;
        let me = self.params.ai_color;
        self.stats.inc_node();
        if depth == 0 {
            self.stats.inc_leaf();
            return Some((evaluate(board, me), *board));
        }

        let children = self.generator.generate(board, me, deadline)?;
        self.stats.add_boards(children.len());

        let mut best_score = f64::NEG_INFINITY;
        let mut best_board = *board;
        for child in children {
            let (score, _) = self.minimax(&child, depth - 1, false, deadline)?;
            if score > best_score {
                best_score = score;
                best_board = child;
            }
        }
        Some((best_score, best_board))
    }

    /// Depth-bounded minimax. `maximizing` selects whose turn it is: the
    /// engine's color maximizes, the opponent minimizes. Strictly-better
    /// comparisons keep the first board encountered on ties. Returns `None`
    /// when the deadline expires mid-search.
    ///
    /// A side with no children keeps the seed score and the unchanged
    /// board; at the root that surfaces as the degenerate result that
    /// triggers the fallback.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        deadline: &Deadline,
    ) -> Option<(f64, Board)> {
        if deadline.expired() {
            return None;
        }
        self.stats.inc_node();
        let me = self.params.ai_color;
        if depth == 0 {
            self.stats.inc_leaf();
            return Some((evaluate(board, me), *board));
        }

        let side = if maximizing { me } else { me.opponent() };
        let children = child_boards(board, side);
        self.stats.add_boards(children.len());

        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_board = *board;
        for child in children {
            let (score, _) = self.minimax(&child, depth - 1, !maximizing, deadline)?;
            let better = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if better {
                best_score = score;
                best_board = child;
            }
        }
        Some((best_score, best_board))
    }

    /// Uniformly random pick among the legal resulting boards for `color`,
    /// excluding the no-op. With nothing to pick from, the input board
    /// comes back unchanged.
    fn random_fallback(&mut self, board: &Board, color: Color) -> Board {
        self.stats.inc_fallback();
        let candidates: Vec<Board> = child_boards(board, color)
            .into_iter()
            .filter(|candidate| candidate != board)
            .collect();
        debug!("random fallback over {} candidate boards", candidates.len());
        if candidates.is_empty() {
            *board
        } else {
            let pick = rand::rng().random_range(0..candidates.len());
            candidates[pick]
        }
    }
}
