use std::env;
use std::path::PathBuf;

use crate::game::generator::DEFAULT_ATTEMPT_LIMIT;
use crate::game::{WordList, WordListError};

pub const DEFAULT_SIZE: usize = 20;

pub const DEFAULT_WORDS: [&str; 20] = [
    "REACT", "NODE", "JAVA", "CSS", "HTML", "JAVASCRIPT",
    "ANGULAR", "VUE", "REACTNATIVE", "TYPESCRIPT", "PYTHON",
    "RUBY", "PHP", "SWIFT", "KOTLIN", "OBJECTIVEC", "SQL",
    "MONGODB", "POSTGRESQL", "MYSQL",
];

#[derive(Clone, Debug, PartialEq)]
pub struct PuzzleConfig {
    pub size: usize,
    pub words: Vec<String>,
    /// One word per line. Used instead of `words` when set.
    pub wordlist_path: Option<PathBuf>,
    pub max_placement_attempts: usize,
    pub max_grid_attempts: u32,
    pub seed: Option<String>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            wordlist_path: None,
            max_placement_attempts: DEFAULT_ATTEMPT_LIMIT,
            max_grid_attempts: 5,
            seed: None,
        }
    }
}

impl PuzzleConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(size) = env::var("PUZZLE_SIZE") {
            if let Ok(value) = size.parse::<usize>() {
                config.size = value;
            }
        }

        if let Ok(words) = env::var("PUZZLE_WORDS") {
            config.words = words
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Ok(path) = env::var("PUZZLE_WORDLIST") {
            if !path.trim().is_empty() {
                config.wordlist_path = Some(PathBuf::from(path));
            }
        }

        if let Ok(attempts) = env::var("PUZZLE_MAX_ATTEMPTS") {
            if let Ok(value) = attempts.parse::<usize>() {
                config.max_placement_attempts = value;
            }
        }

        if let Ok(attempts) = env::var("PUZZLE_GRID_ATTEMPTS") {
            if let Ok(value) = attempts.parse::<u32>() {
                config.max_grid_attempts = value;
            }
        }

        if let Ok(seed) = env::var("PUZZLE_SEED") {
            if !seed.is_empty() {
                config.seed = Some(seed);
            }
        }

        config
    }

    pub fn word_list(&self) -> Result<WordList, WordListError> {
        match &self.wordlist_path {
            Some(path) => WordList::from_file(path),
            None => WordList::new(self.words.clone()),
        }
    }
}
