use crate::config::PuzzleConfig;
use crate::game::{GenerationError, GridGenerator, Puzzle, WordList};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_seeder::Seeder;
use tracing::{error, info, warn};

#[derive(Clone, Debug)]
pub struct PuzzleGenerator {
    config: PuzzleConfig,
    grid_generator: GridGenerator,
}

impl PuzzleGenerator {
    pub fn new(config: PuzzleConfig) -> Self {
        let grid_generator = GridGenerator::with_attempt_limit(config.max_placement_attempts);
        Self {
            config,
            grid_generator,
        }
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Builds a puzzle from the configured word list, starting over with a
    /// fresh grid when a word cannot be placed.
    pub fn generate_puzzle(&self) -> Result<Puzzle> {
        let words = self.config.word_list()?;
        self.generate_puzzle_with_words(words)
    }

    pub fn generate_puzzle_with_words(&self, words: WordList) -> Result<Puzzle> {
        let size = self.config.size;
        let mut last_error = None;

        for attempt in 1..=self.config.max_grid_attempts {
            let mut rng = self.create_rng(attempt);

            match Puzzle::generate(&self.grid_generator, size, words.clone(), &mut rng) {
                Ok(puzzle) => {
                    info!(
                        "Successfully generated {}x{} puzzle after {} attempts",
                        size, size, attempt
                    );
                    return Ok(puzzle);
                }
                // Retrying cannot make a word fit a grid that is too small
                Err(e @ (GenerationError::WordTooLong { .. } | GenerationError::InvalidSize { .. })) => {
                    error!("Puzzle configuration is unusable: {}", e);
                    return Err(e.into());
                }
                Err(e) => {
                    warn!("Generation attempt {} failed: {}", attempt, e);
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) => {
                error!(
                    "Failed to generate puzzle after {} attempts",
                    self.config.max_grid_attempts
                );
                Err(e.into())
            }
            None => anyhow::bail!("max_grid_attempts must be at least 1"),
        }
    }

    /// Seeded configs give each attempt its own reproducible stream.
    fn create_rng(&self, attempt: u32) -> StdRng {
        match &self.config.seed {
            Some(seed) => StdRng::from_seed(self.create_seed(seed, attempt)),
            None => StdRng::from_entropy(),
        }
    }

    fn create_seed(&self, seed: &str, attempt: u32) -> [u8; 32] {
        let seed_string = format!("{}:{}", seed, attempt);
        Seeder::from(seed_string).make_seed()
    }
}
