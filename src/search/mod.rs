//! AI search engine: depth-bounded minimax over the move enumerator with a
//! material evaluator, a wall-clock deadline, and a random fallback.

pub mod params;
pub mod search;
pub mod stats;
pub mod thread_mgr;

pub use params::SearchParams;
pub use search::Search;
pub use stats::SearchStats;
pub use thread_mgr::ChildGenerator;
