//! Move deadline for the search engine.

use std::time::{Duration, Instant};

/// Wall-clock budget for one `choose_move` call. A budget of 0 means
/// unlimited. The deadline is the only state the search shares with its
/// workers, and it is read-only for them.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    budget_ms: u64,
}

impl Deadline {
    /// Starts the clock now with a budget of `budget_ms` milliseconds.
    pub fn new(budget_ms: u64) -> Deadline {
        Deadline {
            start: Instant::now(),
            budget_ms,
        }
    }

    /// A deadline that never expires.
    pub fn unlimited() -> Deadline {
        Deadline::new(0)
    }

    pub fn expired(&self) -> bool {
        self.budget_ms > 0 && self.start.elapsed() > Duration::from_millis(self.budget_ms)
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
