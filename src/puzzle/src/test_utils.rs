#[cfg(test)]
pub mod test_utils {
    use crate::config::PuzzleConfig;
    use crate::game::{Grid, Puzzle, WordList};

    /// 5x5 grid with known placements:
    ///
    /// ```text
    /// C A T S X      CAT  (0,0) horizontal
    /// O B I R D      BIRD (1,1) horizontal
    /// W E A P N      COW  (0,0) vertical
    /// L M O U S      FISH (4,0) horizontal
    /// F I S H E      OEO  (1,0) diagonal down-right
    /// ```
    pub const ANIMAL_GRID: &str = "CATSXOBIRDWEAPNLMOUSFISHE";

    pub const ANIMAL_WORDS: [&str; 4] = ["CAT", "COW", "BIRD", "FISH"];

    /// Builds a square grid from a string of `size * size` uppercase letters, row by row.
    pub fn create_test_grid(letters: &str) -> Grid {
        let chars: Vec<char> = letters.chars().collect();
        let size = (chars.len() as f64).sqrt() as usize;
        assert_eq!(size * size, chars.len(), "letters must form a square grid");
        let rows = chars.chunks(size).map(|row| row.to_vec()).collect();
        Grid::from_letters(rows).unwrap()
    }

    pub fn create_test_word_list(words: &[&str]) -> WordList {
        WordList::new(words.iter().map(|w| w.to_string()).collect()).unwrap()
    }

    /// A puzzle over [`ANIMAL_GRID`] looking for [`ANIMAL_WORDS`].
    pub fn create_test_puzzle() -> Puzzle {
        Puzzle::new(
            create_test_grid(ANIMAL_GRID),
            create_test_word_list(&ANIMAL_WORDS),
        )
    }

    pub fn create_test_config(size: usize, words: &[&str]) -> PuzzleConfig {
        PuzzleConfig {
            size,
            words: words.iter().map(|w| w.to_string()).collect(),
            ..PuzzleConfig::default()
        }
    }
}
