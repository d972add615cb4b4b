//! `word_list` — load the candidate words the clues are checked against.
//!
//! The input is newline-delimited text, one word per line. The parsing logic:
//! - `\r\n` and `\n` line endings are treated the same.
//! - Each line is trimmed; lines that end up empty are dropped.
//! - Words are lower-cased, matching the case the clue compiler gives its operands.
//! - Order is kept and duplicates are not removed.

use log::info;

use crate::errors::InputError;

/// A processed, ready-to-use word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Example: `["able", "acid", "acorn", ...]`
    pub entries: Vec<String>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let entries = contents
            .replace("\r\n", "\n")
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect();

        WordList { entries }
    }

    /// Read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return [`InputError::WordList`] if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<WordList, InputError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| InputError::WordList {
            path: path_ref.display().to_string(),
            source,
        })?;

        let word_list = Self::parse_from_str(&data);
        info!("Loaded {} words from {}", word_list.len(), path_ref.display());
        Ok(word_list)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrowed view for the solver.
    #[must_use]
    pub fn as_refs(&self) -> Vec<&str> {
        self.entries.iter().map(String::as_str).collect()
    }
}
