//! Diagonal direction vocabulary and coordinate arithmetic shared by the
//! validator, the enumerator, and the search.

use crate::board::{Color, Cord, Piece};

/// One of the four diagonal directions. "Up" is toward row 0, "Down" toward
/// row 7. Non-diagonal deltas have no direction and are always illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

/// All four diagonals, the move set of a crowned piece.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::UpLeft,
    Direction::UpRight,
    Direction::DownLeft,
    Direction::DownRight,
];

/// Forward diagonals for an uncrowned Red piece (advancing toward row 7).
pub const RED_FORWARD: [Direction; 2] = [Direction::DownLeft, Direction::DownRight];

/// Forward diagonals for an uncrowned Blue piece (advancing toward row 0).
pub const BLUE_FORWARD: [Direction; 2] = [Direction::UpLeft, Direction::UpRight];

impl Direction {
    /// (row, col) step of this direction.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Direction of travel from `from` to `to`, derived from the sign of the
    /// row/column delta. `None` for zero or non-diagonal deltas. Distance is
    /// the caller's concern.
    pub fn between(from: Cord, to: Cord) -> Option<Direction> {
        let down = to.row - from.row;
        let right = to.col - from.col;
        match (down.signum(), right.signum()) {
            (-1, -1) => Some(Direction::UpLeft),
            (-1, 1) => Some(Direction::UpRight),
            (1, -1) => Some(Direction::DownLeft),
            (1, 1) => Some(Direction::DownRight),
            _ => None,
        }
    }

    /// The two forward diagonals of `color`.
    pub fn forward(color: Color) -> &'static [Direction] {
        match color {
            Color::Red => &RED_FORWARD,
            Color::Blue => &BLUE_FORWARD,
        }
    }

    /// Directions `piece` may move or capture along: the forward pair for a
    /// man, all four for a king, none for an empty cell.
    pub fn allowed(piece: Piece) -> &'static [Direction] {
        match piece.color() {
            None => &[],
            Some(_) if piece.is_crowned() => &ALL_DIRECTIONS,
            Some(color) => Direction::forward(color),
        }
    }
}

/// `from` shifted `distance` steps along `direction`. Not bounds-checked;
/// callers validate with [`Cord::on_board`] before indexing.
pub fn diagonal(from: Cord, direction: Direction, distance: i8) -> Cord {
    let (dr, dc) = direction.delta();
    Cord::new(from.row + dr * distance, from.col + dc * distance)
}
