//! Highlight state derived from a grid, the gesture in progress and the
//! words found so far. Nothing here is stored; every view is recomputed.

use serde::{Deserialize, Serialize};

use super::found::FoundWords;
use super::grid::{Cell, Grid};
use super::path::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStatus {
    Plain,
    /// Part of the gesture in progress.
    Selected,
    /// Part of a found word. Takes precedence over `Selected`.
    Completed,
}

impl CellStatus {
    pub fn is_highlighted(self) -> bool {
        self != CellStatus::Plain
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellView {
    pub letter: char,
    pub row: usize,
    pub col: usize,
    pub status: CellStatus,
}

impl CellView {
    pub fn highlighted(&self) -> bool {
        self.status.is_highlighted()
    }
}

pub fn status_at(position: Position, selection: &[Position], found: &FoundWords) -> CellStatus {
    if found.covers(position) {
        CellStatus::Completed
    } else if selection.contains(&position) {
        CellStatus::Selected
    } else {
        CellStatus::Plain
    }
}

pub fn view_of(cell: &Cell, selection: &[Position], found: &FoundWords) -> CellView {
    CellView {
        letter: cell.letter,
        row: cell.row,
        col: cell.col,
        status: status_at(cell.position(), selection, found),
    }
}

/// Row-major views of every cell in `grid`.
pub fn project(grid: &Grid, selection: &[Position], found: &FoundWords) -> Vec<Vec<CellView>> {
    grid.rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|cell| view_of(cell, selection, found))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils;

    #[test]
    fn test_plain_grid() {
        let grid = test_utils::create_test_grid(test_utils::ANIMAL_GRID);
        let views = project(&grid, &[], &FoundWords::new());
        assert_eq!(views.len(), 5);
        assert!(views
            .iter()
            .flatten()
            .all(|view| view.status == CellStatus::Plain && !view.highlighted()));
        assert_eq!(views[1][1].letter, 'B');
    }

    #[test]
    fn test_selected_and_completed() {
        let grid = test_utils::create_test_grid(test_utils::ANIMAL_GRID);
        let mut found = FoundWords::new();
        found.record(
            "CAT",
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
        );
        let selection = [Position::new(0, 0), Position::new(1, 0)];

        let views = project(&grid, &selection, &found);
        // Completed wins over selected on the shared cell
        assert_eq!(views[0][0].status, CellStatus::Completed);
        assert_eq!(views[0][2].status, CellStatus::Completed);
        assert_eq!(views[1][0].status, CellStatus::Selected);
        assert_eq!(views[2][0].status, CellStatus::Plain);
        assert!(views[1][0].highlighted());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&CellStatus::Completed).unwrap(),
            "\"completed\""
        );
    }
}
