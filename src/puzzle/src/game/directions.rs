use serde::{Deserialize, Serialize};

use super::path::Position;

/// Orientations a word may be placed along. Reverse readings are never generated.
pub const PLACEMENT_DIRECTIONS: [Direction; 4] = [
    Direction::Horizontal,        // (0, 1)
    Direction::Vertical,          // (1, 0)
    Direction::DiagonalDownRight, // (1, 1)
    Direction::DiagonalDownLeft,  // (1, -1)
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Unit step between cells on a shared straight line. Unlike [`Direction`]
/// this covers all eight compass directions, since a gesture may be dragged
/// either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    pub d_row: isize,
    pub d_col: isize,
}

impl Step {
    /// The unit step leading from `from` towards `to`, if the two cells share a
    /// row, a column or a 45° diagonal. Identical cells have no step.
    pub fn between(from: Position, to: Position) -> Option<Step> {
        let d_row = to.row as isize - from.row as isize;
        let d_col = to.col as isize - from.col as isize;
        if d_row == 0 && d_col == 0 {
            return None;
        }
        if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
            return None;
        }
        Some(Step {
            d_row: d_row.signum(),
            d_col: d_col.signum(),
        })
    }
}

impl From<Direction> for Step {
    fn from(direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Step { d_row, d_col }
    }
}
