use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use super::error::WordListError;

/// The words hidden in a puzzle, in placement order. Entries are uppercase
/// `A`-`Z`, at least two letters long and unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    index: HashSet<String>,
}

impl WordList {
    /// Trims and upper-cases each entry, then validates the list.
    pub fn new(words: Vec<String>) -> Result<Self, WordListError> {
        let mut list = WordList {
            words: Vec::with_capacity(words.len()),
            index: HashSet::with_capacity(words.len()),
        };
        for raw in words {
            list.insert(&raw)?;
        }
        if list.words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(list)
    }

    /// One word per line; blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, WordListError> {
        Self::new(
            text.lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let file = File::open(path)?;
        let mut words = vec![];
        for line in BufReader::new(file).lines() {
            let line = line?;
            if !line.trim().is_empty() {
                words.push(line);
            }
        }
        Self::new(words)
    }

    fn insert(&mut self, raw: &str) -> Result<(), WordListError> {
        let word = raw.trim().to_ascii_uppercase();
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordListError::InvalidWord {
                word: raw.to_string(),
            });
        }
        if word.len() < 2 {
            return Err(WordListError::TooShort { word });
        }
        if !self.index.insert(word.clone()) {
            return Err(WordListError::Duplicate { word });
        }
        self.words.push(word);
        Ok(())
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn longest(&self) -> usize {
        self.words.iter().map(String::len).max().unwrap_or(0)
    }
}

impl TryFrom<Vec<&str>> for WordList {
    type Error = WordListError;

    fn try_from(words: Vec<&str>) -> Result<Self, Self::Error> {
        WordList::new(words.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_new_normalises_case_and_whitespace() {
        let list = WordList::try_from(vec!["react", " Node ", "CSS"]).unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["REACT", "NODE", "CSS"]);
        assert!(list.contains("NODE"));
        // Membership is exact once normalised
        assert!(!list.contains("node"));
        assert_eq!(list.longest(), 5);
    }

    #[test]
    fn test_rejects_invalid_entries() {
        assert!(matches!(
            WordList::try_from(vec!["OBJECTIVE-C"]),
            Err(WordListError::InvalidWord { .. })
        ));
        assert!(matches!(
            WordList::try_from(vec!["A"]),
            Err(WordListError::TooShort { .. })
        ));
        assert!(matches!(
            WordList::try_from(vec!["SQL", "sql"]),
            Err(WordListError::Duplicate { word }) if word == "SQL"
        ));
        assert!(matches!(WordList::new(vec![]), Err(WordListError::Empty)));
    }

    #[test]
    fn test_parse() {
        let list = WordList::parse("apple\n\nbanana\nkiwi\n").unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.contains("KIWI"));
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "python").unwrap();
        writeln!(temp_file, "ruby").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "swift").unwrap();
        temp_file.flush().unwrap();

        let list = WordList::from_file(temp_file.path()).unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["PYTHON", "RUBY", "SWIFT"]);
    }

    #[test]
    fn test_from_missing_file() {
        let result = WordList::from_file("does/not/exist.txt");
        assert!(matches!(result, Err(WordListError::Io(_))));
    }
}
