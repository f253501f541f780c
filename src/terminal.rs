//! Loss detection.

use crate::board::{Board, Color};
use crate::movegen::valid_moves;

/// True when `color` has lost: no pieces left on the board, or no legal
/// move (simple or jump) for any of its pieces.
///
/// Pure query, called for both sides after each applied move by the turn
/// controller; announcing the result is the caller's job.
pub fn is_lost(board: &Board, color: Color) -> bool {
    board.count(color) == 0 || valid_moves(board, color).is_empty()
}
