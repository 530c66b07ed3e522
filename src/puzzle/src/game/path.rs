use serde::{Deserialize, Serialize};
use std::fmt;

use super::directions::Step;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn id(&self) -> String {
        format!("{}_{}", self.row, self.col)
    }

    /// max(|dRow|, |dCol|)
    pub fn chebyshev_distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// The cell one `step` away, or `None` when it would leave a `size`x`size` grid.
    pub fn offset(&self, step: Step, size: usize) -> Option<Position> {
        let row = self.row.checked_add_signed(step.d_row)?;
        let col = self.col.checked_add_signed(step.d_col)?;
        if row >= size || col >= size {
            return None;
        }
        Some(Position { row, col })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Cells `len` steps long starting at `start`, or `None` if any of them falls off the grid.
pub fn walk(start: Position, step: Step, len: usize, size: usize) -> Option<Vec<Position>> {
    if len == 0 || start.row >= size || start.col >= size {
        return None;
    }
    let mut cells = Vec::with_capacity(len);
    let mut current = start;
    cells.push(current);
    for _ in 1..len {
        current = current.offset(step, size)?;
        cells.push(current);
    }
    Some(cells)
}
