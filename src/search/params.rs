//! Search parameters and configuration.

use crate::board::Color;

/// Search parameters for the engine.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Maximum search depth in plies.
    pub max_depth: u8,

    /// Time budget per move in milliseconds (0 = unlimited).
    pub time_limit_ms: u64,

    /// Worker threads for child-board generation (0 = available cores).
    pub num_threads: usize,

    /// The side the engine plays and maximizes for.
    pub ai_color: Color,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_depth: 3,
            time_limit_ms: 5000,
            num_threads: 0,
            ai_color: Color::Red,
        }
    }
}

impl SearchParams {
    /// Create new search params with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum depth in plies.
    pub fn max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set time budget in milliseconds.
    pub fn time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Set worker thread count (0 = available cores).
    pub fn num_threads(mut self, threads: usize) -> Self {
        self.num_threads = threads;
        self
    }

    /// Set the side the engine plays.
    pub fn ai_color(mut self, color: Color) -> Self {
        self.ai_color = color;
        self
    }
}
