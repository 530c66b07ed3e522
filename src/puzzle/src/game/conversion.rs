use crate::game::error::GridError;
use crate::game::grid::Grid;
use crate::game::path::Position;
use crate::game::projection::CellStatus;
use crate::game::puzzle::Puzzle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableGrid {
    pub rows: Vec<SerializableRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableRow {
    pub cells: Vec<SerializableCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableCell {
    pub letter: String,
    pub row: usize,
    pub col: usize,
}

impl From<&Grid> for SerializableGrid {
    fn from(grid: &Grid) -> Self {
        Self {
            rows: grid.rows.iter().map(|row| SerializableRow {
                cells: row.cells.iter().map(|cell| SerializableCell {
                    letter: cell.letter.to_string(),
                    row: cell.row,
                    col: cell.col,
                }).collect()
            }).collect()
        }
    }
}

impl TryFrom<SerializableGrid> for Grid {
    type Error = GridError;

    fn try_from(grid: SerializableGrid) -> Result<Self, Self::Error> {
        let mut letters = Vec::with_capacity(grid.rows.len());
        for (row_idx, row) in grid.rows.into_iter().enumerate() {
            let mut row_letters = Vec::with_capacity(row.cells.len());
            for (col_idx, cell) in row.cells.into_iter().enumerate() {
                let mut chars = cell.letter.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) => row_letters.push(letter),
                    _ => {
                        return Err(GridError::InvalidLetter {
                            row: row_idx,
                            col: col_idx,
                            letter: cell.letter.chars().next().unwrap_or(' '),
                        })
                    }
                }
            }
            letters.push(row_letters);
        }
        Grid::from_letters(letters)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableWord {
    pub word: String,
    pub found: bool,
}

/// Everything a presentation layer needs to draw a puzzle at one moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleSnapshot {
    pub size: usize,
    pub letters: Vec<String>,
    pub statuses: Vec<Vec<CellStatus>>,
    pub selection: Vec<Position>,
    pub words: Vec<SerializableWord>,
    pub complete: bool,
}

impl From<&Puzzle> for PuzzleSnapshot {
    fn from(puzzle: &Puzzle) -> Self {
        let views = puzzle.cells();
        Self {
            size: puzzle.grid().size(),
            letters: views
                .iter()
                .map(|row| row.iter().map(|view| view.letter).collect())
                .collect(),
            statuses: views
                .iter()
                .map(|row| row.iter().map(|view| view.status).collect())
                .collect(),
            selection: puzzle.selection().to_vec(),
            words: puzzle
                .legend()
                .into_iter()
                .map(|entry| SerializableWord {
                    word: entry.word.to_string(),
                    found: entry.found,
                })
                .collect(),
            complete: puzzle.is_complete(),
        }
    }
}
