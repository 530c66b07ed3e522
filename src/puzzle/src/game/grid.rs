use core::fmt;

use super::directions::{Step, PLACEMENT_DIRECTIONS};
use super::error::GridError;
use super::path::{self, Position};

/// Square letter matrix. Letters never change once a grid is built; any
/// highlighting is projected separately (see `projection`).
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub letter: char,
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            for cell in &row.cells {
                write!(f, " {} ", cell.letter)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Grid {
    /// Builds a grid from rows of letters. Every row must be as long as there
    /// are rows, and every letter must be `A`-`Z`.
    pub fn from_letters(letters: Vec<Vec<char>>) -> Result<Self, GridError> {
        let size = letters.len();
        let mut rows = Vec::with_capacity(size);
        for (row_idx, row) in letters.into_iter().enumerate() {
            if row.len() != size {
                return Err(GridError::Ragged {
                    row: row_idx,
                    expected: size,
                    found: row.len(),
                });
            }
            let mut cells = Vec::with_capacity(size);
            for (col_idx, letter) in row.into_iter().enumerate() {
                if !letter.is_ascii_uppercase() {
                    return Err(GridError::InvalidLetter {
                        row: row_idx,
                        col: col_idx,
                        letter,
                    });
                }
                cells.push(Cell {
                    letter,
                    row: row_idx,
                    col: col_idx,
                });
            }
            rows.push(Row { cells });
        }
        Ok(Self { rows })
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.size() && position.col < self.size()
    }

    /// Validates a coordinate pair against the grid bounds.
    pub fn check_bounds(&self, row: usize, col: usize) -> Result<Position, GridError> {
        let position = Position::new(row, col);
        if self.contains(position) {
            Ok(position)
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size(),
            })
        }
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        let position = self.check_bounds(row, col)?;
        Ok(&self.rows[position.row].cells[position.col])
    }

    pub fn get_cell(&self, position: Position) -> Option<&Cell> {
        self.rows
            .get(position.row)
            .and_then(|row| row.cells.get(position.col))
    }

    /// Concatenates the letters under `cells` in order. Cells outside the grid
    /// contribute nothing.
    pub fn letters_along(&self, cells: &[Position]) -> String {
        cells
            .iter()
            .filter_map(|position| self.get_cell(*position))
            .map(|cell| cell.letter)
            .collect()
    }

    /// Every run of cells spelling `word` forwards along one of the placement
    /// directions.
    pub fn locate(&self, word: &str) -> Vec<Vec<Position>> {
        let len = word.chars().count();
        let mut result = vec![];
        if len == 0 {
            return result;
        }
        for row in 0..self.size() {
            for col in 0..self.size() {
                for direction in PLACEMENT_DIRECTIONS {
                    let cells =
                        match path::walk(Position::new(row, col), Step::from(direction), len, self.size()) {
                            Some(cells) => cells,
                            None => continue,
                        };
                    if self.letters_along(&cells) == word {
                        result.push(cells);
                    }
                }
            }
        }
        result
    }

    pub fn contains_word(&self, word: &str) -> bool {
        !self.locate(word).is_empty()
    }
}
