use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, info};

use super::error::{GenerationError, GridError};
use super::found::FoundWords;
use super::generator::GridGenerator;
use super::grid::Grid;
use super::path::Position;
use super::projection::{self, CellView};
use super::selection::{GestureEvent, SelectionState, Transition};
use super::word_list::WordList;

/// What a `release` made of the gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseOutcome {
    Found { word: String, path: Vec<Position> },
    AlreadyFound { word: String },
    NoMatch { candidate: String },
    /// No gesture was in progress.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry<'a> {
    pub word: &'a str,
    pub found: bool,
}

/// One puzzle instance: a fixed grid and word list plus the player's progress.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    words: WordList,
    selection: SelectionState,
    found: FoundWords,
}

impl Puzzle {
    pub fn new(grid: Grid, words: WordList) -> Self {
        Self {
            grid,
            words,
            selection: SelectionState::Idle,
            found: FoundWords::new(),
        }
    }

    pub fn generate<R: Rng>(
        generator: &GridGenerator,
        size: usize,
        words: WordList,
        rng: &mut R,
    ) -> Result<Self, GenerationError> {
        let grid = generator.generate(size, &words, rng)?;
        info!("Generated {}x{} puzzle with {} words", size, size, words.len());
        Ok(Self::new(grid, words))
    }

    /// Feeds one gesture event through the selection state machine. A
    /// `Release` here only ends the gesture; use [`Puzzle::release`] to have
    /// it checked against the word list.
    pub fn handle(&mut self, event: GestureEvent) -> Result<Transition, GridError> {
        let (next, transition) = self.selection.next(event, self.grid.size())?;
        debug!("{:?} -> {:?}", event, transition);
        self.selection = next;
        Ok(transition)
    }

    pub fn begin(&mut self, row: usize, col: usize) -> Result<Transition, GridError> {
        self.handle(GestureEvent::Begin(Position::new(row, col)))
    }

    pub fn extend(&mut self, row: usize, col: usize) -> Result<Transition, GridError> {
        self.handle(GestureEvent::Extend(Position::new(row, col)))
    }

    pub fn release(&mut self) -> ReleaseOutcome {
        let path = match self.handle(GestureEvent::Release) {
            Ok(Transition::Released(path)) => path,
            _ => return ReleaseOutcome::Ignored,
        };
        let outcome = evaluate(&self.grid, &self.words, &self.found, &path);
        if let ReleaseOutcome::Found { word, path } = &outcome {
            self.found.record(word, path.clone());
            info!(
                "Found {} ({}/{} words)",
                word,
                self.found.len(),
                self.words.len()
            );
        }
        outcome
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<CellView, GridError> {
        let cell = self.grid.cell_at(row, col)?;
        Ok(projection::view_of(cell, self.selection.path(), &self.found))
    }

    /// Row-major views of the whole grid with current highlighting.
    pub fn cells(&self) -> Vec<Vec<CellView>> {
        projection::project(&self.grid, self.selection.path(), &self.found)
    }

    pub fn found_words(&self) -> HashSet<String> {
        self.found.words()
    }

    pub fn found(&self) -> &FoundWords {
        &self.found
    }

    pub fn is_complete(&self) -> bool {
        self.found.len() == self.words.len()
    }

    /// Every word in list order with whether it has been found.
    pub fn legend(&self) -> Vec<LegendEntry<'_>> {
        self.words
            .iter()
            .map(|word| LegendEntry {
                word,
                found: self.found.contains(word),
            })
            .collect()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn selection(&self) -> &[Position] {
        self.selection.path()
    }
}

/// Reads the letters along `path` and checks them, forwards only, against
/// `words`.
pub fn evaluate(grid: &Grid, words: &WordList, found: &FoundWords, path: &[Position]) -> ReleaseOutcome {
    let candidate = grid.letters_along(path);
    if path.len() < 2 || !words.contains(&candidate) {
        return ReleaseOutcome::NoMatch { candidate };
    }
    if found.contains(&candidate) {
        return ReleaseOutcome::AlreadyFound { word: candidate };
    }
    ReleaseOutcome::Found {
        word: candidate,
        path: path.to_vec(),
    }
}
