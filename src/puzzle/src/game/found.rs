use std::collections::HashSet;

use super::path::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<Position>,
}

/// Words found so far in one puzzle, in the order they were found. Entries
/// are only ever added, and each word at most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoundWords {
    entries: Vec<FoundWord>,
}

impl FoundWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `word` traced along `path`. Returns `false`, leaving the set
    /// unchanged, if the word was already found.
    pub fn record(&mut self, word: &str, path: Vec<Position>) -> bool {
        if self.contains(word) {
            return false;
        }
        self.entries.push(FoundWord {
            word: word.to_string(),
            path,
        });
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|entry| entry.word == word)
    }

    /// Whether `position` belongs to the path of any found word.
    pub fn covers(&self, position: Position) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.path.contains(&position))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoundWord> {
        self.entries.iter()
    }

    pub fn words(&self) -> HashSet<String> {
        self.entries.iter().map(|entry| entry.word.clone()).collect()
    }
}
