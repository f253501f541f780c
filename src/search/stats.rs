//! Search statistics and performance metrics.

use std::time::{Duration, Instant};

/// Counters for one `choose_move` call.
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// Minimax nodes visited.
    pub nodes: u64,

    /// Leaf positions evaluated.
    pub leaves: u64,

    /// Child boards generated.
    pub boards_generated: u64,

    /// Times the random fallback was taken.
    pub fallbacks: u64,

    /// Searches abandoned at the deadline.
    pub aborts: u64,

    /// Search start time.
    pub start_time: Option<Instant>,

    /// Time spent searching.
    pub search_time: Duration,

    /// Nodes per second.
    pub nps: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing.
    pub fn start_timing(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Record elapsed time and derive the NPS rate.
    pub fn update_timing(&mut self) {
        if let Some(start) = self.start_time {
            self.search_time = start.elapsed();
            let elapsed_ms = self.search_time.as_millis() as u64;
            if elapsed_ms > 0 {
                self.nps = (self.nodes * 1000) / elapsed_ms;
            }
        }
    }

    pub fn inc_node(&mut self) {
        self.nodes += 1;
    }

    pub fn inc_leaf(&mut self) {
        self.leaves += 1;
    }

    pub fn add_boards(&mut self, count: usize) {
        self.boards_generated += count as u64;
    }

    pub fn inc_fallback(&mut self) {
        self.fallbacks += 1;
    }

    pub fn inc_abort(&mut self) {
        self.aborts += 1;
    }

    /// Reset all statistics.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Print formatted summary.
    pub fn print_summary(&self) {
        println!("=== Search Statistics ===");
        println!("Nodes visited: {}", self.nodes);
        println!("Leaves evaluated: {}", self.leaves);
        println!("Boards generated: {}", self.boards_generated);
        println!("Fallbacks: {}", self.fallbacks);
        println!("Aborts: {}", self.aborts);
        println!("Search time: {} ms", self.search_time.as_millis());
        println!("Nodes per second: {}", self.nps);
    }
}
