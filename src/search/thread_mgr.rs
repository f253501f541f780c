//! Parallel child-board generation.
//!
//! The per-piece expansion is embarrassingly parallel: every worker only
//! reads the shared parent board and produces independent new boards. Work
//! is fanned out across a bounded pool of scoped threads and joined in
//! piece order, so the result is identical to the sequential enumeration
//! and the engine's tie-break stays deterministic.
//!
//! Workers observe a shared stop flag. When the deadline trips, in-flight
//! chunks bail at the next piece boundary and the whole generation reports
//! `None` instead of a partial result.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crate::board::{Board, Color};
use crate::movegen::{child_boards, piece_child_boards};
use crate::time::Deadline;

/// Worker pool for child-board generation.
pub struct ChildGenerator {
    num_threads: usize,
}

impl ChildGenerator {
    /// A generator running on `num_threads` workers; 0 means one per
    /// available core.
    pub fn new(num_threads: usize) -> Self {
        let num_threads = if num_threads == 0 {
            thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
        } else {
            num_threads
        };
        ChildGenerator { num_threads }
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Every board reachable in one move by `color`, in enumeration order,
    /// or `None` when the deadline expired before the fan-out finished.
    pub fn generate(&self, board: &Board, color: Color, deadline: &Deadline) -> Option<Vec<Board>> {
        if deadline.expired() {
            return None;
        }
        let cords = board.pieces(color);
        if cords.is_empty() {
            return Some(Vec::new());
        }

        let workers = self.num_threads.min(cords.len());
        if workers <= 1 {
            return Some(child_boards(board, color));
        }

        let stop = AtomicBool::new(false);
        let chunk_size = cords.len().div_ceil(workers);
        let parts: Vec<Vec<Board>> = thread::scope(|scope| {
            let stop = &stop;
            let handles: Vec<_> = cords
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        let mut out = Vec::new();
                        for &cord in chunk {
                            if stop.load(Ordering::Relaxed) {
                                break;
                            }
                            if deadline.expired() {
                                stop.store(true, Ordering::Relaxed);
                                break;
                            }
                            out.extend(piece_child_boards(board, cord));
                        }
                        out
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_default())
                .collect()
        });

        if stop.load(Ordering::Relaxed) {
            return None;
        }
        Some(parts.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_matches_sequential_order() {
        let board = Board::new();
        let generator = ChildGenerator::new(4);
        let parallel = generator
            .generate(&board, Color::Red, &Deadline::unlimited())
            .expect("unlimited deadline cannot expire");
        assert_eq!(parallel, child_boards(&board, Color::Red));
    }

    #[test]
    fn expired_deadline_abandons_generation() {
        let board = Board::new();
        let generator = ChildGenerator::new(4);
        let deadline = Deadline::new(1);
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(generator.generate(&board, Color::Red, &deadline).is_none());
    }

    #[test]
    fn no_pieces_no_children() {
        let board = Board::empty();
        let generator = ChildGenerator::new(2);
        let children = generator
            .generate(&board, Color::Blue, &Deadline::unlimited())
            .expect("unlimited deadline cannot expire");
        assert!(children.is_empty());
    }
}
