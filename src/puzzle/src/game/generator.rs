use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use super::directions::{Direction, Step, PLACEMENT_DIRECTIONS};
use super::error::GenerationError;
use super::grid::Grid;
use super::path::{self, Position};
use super::word_list::WordList;

pub const DEFAULT_ATTEMPT_LIMIT: usize = 10_000;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Where a word landed. Only lives for the duration of a `generate` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub word: String,
    pub start: Position,
    pub direction: Direction,
}

/// Working surface while words are being laid down; `None` marks an empty cell.
type Letters = Vec<Vec<Option<char>>>;

#[derive(Debug, Clone)]
pub struct GridGenerator {
    attempt_limit: usize,
}

impl Default for GridGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GridGenerator {
    pub fn new() -> Self {
        Self {
            attempt_limit: DEFAULT_ATTEMPT_LIMIT,
        }
    }

    pub fn with_attempt_limit(attempt_limit: usize) -> Self {
        Self { attempt_limit }
    }

    /// Lays every word of `words` into a `size`x`size` grid, in list order,
    /// then fills the remaining cells with uniformly random letters.
    ///
    /// Each word gets at most `attempt_limit` random (direction, start) draws.
    /// Words may cross where they share the letter at the crossing cell.
    pub fn generate<R: Rng>(
        &self,
        size: usize,
        words: &WordList,
        rng: &mut R,
    ) -> Result<Grid, GenerationError> {
        if size == 0 {
            return Err(GenerationError::InvalidSize { size });
        }
        if let Some(word) = words.iter().find(|w| w.len() > size) {
            return Err(GenerationError::WordTooLong {
                word: word.to_string(),
                size,
            });
        }

        let mut letters: Letters = vec![vec![None; size]; size];
        for word in words.iter() {
            let placement = self.place_word(&mut letters, word, rng)?;
            debug!(
                "Placed {} at {} going {:?}",
                placement.word, placement.start, placement.direction
            );
        }

        let mut filled = Vec::with_capacity(size);
        for row in letters {
            let mut filled_row = Vec::with_capacity(size);
            for letter in row {
                filled_row.push(letter.unwrap_or_else(|| random_letter(rng)));
            }
            filled.push(filled_row);
        }

        Grid::from_letters(filled).map_err(GenerationError::from)
    }

    fn place_word<R: Rng>(
        &self,
        letters: &mut Letters,
        word: &str,
        rng: &mut R,
    ) -> Result<Placement, GenerationError> {
        let size = letters.len();
        for _ in 0..self.attempt_limit {
            let direction = *PLACEMENT_DIRECTIONS
                .choose(rng)
                .unwrap_or(&Direction::Horizontal);
            let start = Position::new(rng.gen_range(0..size), rng.gen_range(0..size));

            if let Some(cells) = can_place(letters, word, start, direction) {
                for (position, letter) in cells.iter().zip(word.chars()) {
                    letters[position.row][position.col] = Some(letter);
                }
                return Ok(Placement {
                    word: word.to_string(),
                    start,
                    direction,
                });
            }
        }

        warn!(
            "Giving up on {} after {} attempts in a {}x{} grid",
            word, self.attempt_limit, size, size
        );
        Err(GenerationError::UnplaceableWord {
            word: word.to_string(),
            attempts: self.attempt_limit,
        })
    }
}

/// Generates with the default attempt limit and the thread-local RNG.
pub fn generate(size: usize, words: &WordList) -> Result<Grid, GenerationError> {
    GridGenerator::new().generate(size, words, &mut rand::thread_rng())
}

/// The cells `word` would occupy from `start` along `direction`, or `None` if
/// it runs off the grid or meets a cell holding a different letter.
fn can_place(
    letters: &Letters,
    word: &str,
    start: Position,
    direction: Direction,
) -> Option<Vec<Position>> {
    let cells = path::walk(start, Step::from(direction), word.chars().count(), letters.len())?;
    let clear = cells
        .iter()
        .zip(word.chars())
        .all(|(position, letter)| match letters[position.row][position.col] {
            None => true,
            Some(existing) => existing == letter,
        });
    clear.then_some(cells)
}

fn random_letter<R: Rng>(rng: &mut R) -> char {
    ALPHABET[rng.gen_range(0..ALPHABET.len())] as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_WORDS;
    use crate::test_utils::test_utils;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn empty_letters(size: usize) -> Letters {
        vec![vec![None; size]; size]
    }

    #[test]
    fn test_can_place_on_empty_grid() {
        let letters = empty_letters(5);
        assert_eq!(
            can_place(&letters, "CAT", Position::new(2, 2), Direction::Vertical),
            Some(vec![Position::new(2, 2), Position::new(3, 2), Position::new(4, 2)])
        );
        assert_eq!(
            can_place(&letters, "CAT", Position::new(3, 2), Direction::Vertical),
            None
        );
        assert_eq!(
            can_place(&letters, "CAT", Position::new(0, 1), Direction::DiagonalDownLeft),
            None
        );
    }

    #[test]
    fn test_can_place_allows_matching_crossing() {
        let mut letters = empty_letters(5);
        letters[0][1] = Some('A');
        assert!(can_place(&letters, "CAT", Position::new(0, 0), Direction::Horizontal).is_some());
    }

    #[test]
    fn test_can_place_rejects_conflicting_letter() {
        let mut letters = empty_letters(5);
        letters[0][1] = Some('X');
        assert!(can_place(&letters, "CAT", Position::new(0, 0), Direction::Horizontal).is_none());
    }

    #[test]
    fn test_generate_places_every_word_forwards() {
        let words = test_utils::create_test_word_list(&DEFAULT_WORDS);
        let mut rng = StdRng::seed_from_u64(42);

        let grid = GridGenerator::new().generate(20, &words, &mut rng).unwrap();

        assert_eq!(grid.size(), 20);
        for word in words.iter() {
            assert!(grid.contains_word(word), "{} should be readable forwards", word);
        }
        for row in &grid.rows {
            for cell in &row.cells {
                assert!(cell.letter.is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn test_generate_small_grid() {
        let words = test_utils::create_test_word_list(&["CAT"]);
        let mut rng = StdRng::seed_from_u64(7);

        let grid = GridGenerator::new().generate(5, &words, &mut rng).unwrap();
        assert_eq!(grid.size(), 5);
        assert!(grid.contains_word("CAT"));
    }

    #[test]
    fn test_generate_is_reproducible_with_same_seed() {
        let words = test_utils::create_test_word_list(&["APPLE", "BANANA", "KIWI", "ORANGE"]);
        let generator = GridGenerator::new();

        let first = generator
            .generate(10, &words, &mut StdRng::seed_from_u64(99))
            .unwrap();
        let second = generator
            .generate(10, &words, &mut StdRng::seed_from_u64(99))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_rejects_word_longer_than_grid() {
        let words = test_utils::create_test_word_list(&["JAVASCRIPT"]);
        let result = GridGenerator::new().generate(5, &words, &mut StdRng::seed_from_u64(1));
        assert_eq!(
            result,
            Err(GenerationError::WordTooLong {
                word: "JAVASCRIPT".to_string(),
                size: 5
            })
        );
    }

    #[test]
    fn test_generate_rejects_empty_grid() {
        let words = test_utils::create_test_word_list(&["CAT"]);
        let result = GridGenerator::new().generate(0, &words, &mut StdRng::seed_from_u64(1));
        assert_eq!(result, Err(GenerationError::InvalidSize { size: 0 }));
    }

    #[test]
    fn test_generate_gives_up_when_words_cannot_fit() {
        // 12 letters with nothing in common cannot share 9 cells
        let words = test_utils::create_test_word_list(&["ABC", "DEF", "GHI", "JKL"]);
        let generator = GridGenerator::with_attempt_limit(500);

        let result = generator.generate(3, &words, &mut StdRng::seed_from_u64(3));
        assert!(matches!(
            result,
            Err(GenerationError::UnplaceableWord { attempts: 500, .. })
        ));
    }

    #[test]
    fn test_random_letter_is_uppercase() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            assert!(random_letter(&mut rng).is_ascii_uppercase());
        }
    }
}
