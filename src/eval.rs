//! Static board evaluation.
//!
//! Plain material count: a man is worth 1.0, a crown adds 0.5, so a king
//! weighs 1.5x a man. The evaluator is color-parameterized - it scores from
//! `side`'s perspective - so the search's max/min roles and the score sign
//! cannot drift apart.

use crate::board::{Board, Color};

const MAN_VALUE: f64 = 1.0;
const KING_BONUS: f64 = 0.5;

/// Material balance from `side`'s perspective. Positive means `side` is
/// ahead. Antisymmetric: `evaluate(b, Red) == -evaluate(b, Blue)`.
pub fn evaluate(board: &Board, side: Color) -> f64 {
    side_material(board, side) - side_material(board, side.opponent())
}

fn side_material(board: &Board, color: Color) -> f64 {
    board.count(color) as f64 * MAN_VALUE + board.king_count(color) as f64 * KING_BONUS
}
