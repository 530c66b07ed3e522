//! Error types for grid generation, grid access and word list loading.

use std::io;

/// Failures while filling a grid with the puzzle's words.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("grid size must be at least 1, got {size}")]
    InvalidSize { size: usize },

    #[error("word \"{word}\" does not fit in a {size}x{size} grid")]
    WordTooLong { word: String, size: usize },

    #[error("could not place \"{word}\" after {attempts} attempts")]
    UnplaceableWord { word: String, attempts: usize },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Failures addressing or building a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {col}) holds '{letter}', expected an uppercase letter")]
    InvalidLetter { row: usize, col: usize, letter: char },
}

/// Failures building a word list.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("word list is empty")]
    Empty,

    #[error("\"{word}\" contains characters other than A-Z")]
    InvalidWord { word: String },

    #[error("\"{word}\" is shorter than two letters")]
    TooShort { word: String },

    #[error("\"{word}\" appears more than once")]
    Duplicate { word: String },

    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_word() {
        let err = GenerationError::UnplaceableWord {
            word: "KOTLIN".to_string(),
            attempts: 10_000,
        };
        assert_eq!(err.to_string(), "could not place \"KOTLIN\" after 10000 attempts");

        let err = GridError::OutOfBounds {
            row: 7,
            col: 0,
            size: 5,
        };
        assert_eq!(err.to_string(), "cell (7, 0) is outside the 5x5 grid");
    }
}
