//! Legal move enumeration for a side or a single piece, shared by the
//! terminal detector and the search engine.
//!
//! Enumeration is deterministic by construction (row-major pieces, fixed
//! direction order, step before jump per direction), which is what makes
//! the search engine's first-encountered tie-break reproducible. Callers
//! should not rely on the order beyond that.

use crate::board::{Board, Color, Cord};
use crate::geometry::{diagonal, Direction};
use crate::rules::{apply_move, validate_placement};

/// One legal move: where from, where to, and the jumped-over cord when the
/// move is a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidMove {
    pub from: Cord,
    pub to: Cord,
    pub jumped: Option<Cord>,
}

/// All legal moves (simple and capture) for every piece of `color`.
pub fn valid_moves(board: &Board, color: Color) -> Vec<ValidMove> {
    let mut moves = Vec::new();
    for cord in board.pieces(color) {
        piece_moves_into(board, cord, &mut moves);
    }
    moves
}

/// Legal moves for the single piece at `from`. Empty when the cell is empty
/// or off the board.
pub fn piece_moves(board: &Board, from: Cord) -> Vec<ValidMove> {
    let mut moves = Vec::new();
    piece_moves_into(board, from, &mut moves);
    moves
}

fn piece_moves_into(board: &Board, from: Cord, moves: &mut Vec<ValidMove>) {
    let piece = match board.get(from) {
        Some(piece) => piece,
        None => return,
    };
    for &direction in Direction::allowed(piece) {
        let step = diagonal(from, direction, 1);
        if validate_placement(board, from, step).valid {
            moves.push(ValidMove {
                from,
                to: step,
                jumped: None,
            });
        }
        let landing = diagonal(from, direction, 2);
        let result = validate_placement(board, from, landing);
        if result.valid {
            moves.push(ValidMove {
                from,
                to: landing,
                jumped: result.removed,
            });
        }
    }
}

/// Applies `mv` to `board`, producing the follow-up position.
pub fn apply(board: &Board, mv: ValidMove) -> Board {
    apply_move(board, mv.from, mv.to, mv.jumped)
}

/// Every board reachable in one move by `color`, in enumeration order. The
/// dominant cost of the search: each child is an independent new value with
/// no aliasing back into `board`.
pub fn child_boards(board: &Board, color: Color) -> Vec<Board> {
    valid_moves(board, color)
        .into_iter()
        .map(|mv| apply(board, mv))
        .collect()
}

/// Boards reachable in one move by the single piece at `from`. The per-piece
/// unit of work for the parallel generator.
pub fn piece_child_boards(board: &Board, from: Cord) -> Vec<Board> {
    piece_moves(board, from)
        .into_iter()
        .map(|mv| apply(board, mv))
        .collect()
}
