//! `puzzle` — the clue source for one grid.
//!
//! Clues arrive either as explicit strings (from the command line) or from a
//! saved puzzle snapshot in the shape the daily puzzle is published in:
//!
//! ```json
//! {
//!   "columns": [{ "text": "Starts with mi", "code": "SW_MI" }, ...],
//!   "rows":    [{ "text": "Double letter" }, ...]
//! }
//! ```
//!
//! Only `text` is used; other fields are ignored. Columns come first, then rows,
//! each in the order given.

use serde::Deserialize;

use crate::errors::InputError;

/// The clue texts of a grid, columns and rows in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridClues {
    pub columns: Vec<String>,
    pub rows: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ClueEntry {
    text: String,
}

#[derive(Debug, Deserialize)]
struct Snapshot {
    columns: Vec<ClueEntry>,
    rows: Vec<ClueEntry>,
}

impl GridClues {
    #[must_use]
    pub fn new(columns: Vec<String>, rows: Vec<String>) -> Self {
        GridClues { columns, rows }
    }

    /// Parse a puzzle snapshot held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::PuzzleFormat`] if `json` is not a puzzle description.
    pub fn from_json_str(json: &str) -> Result<Self, InputError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        let texts = |entries: Vec<ClueEntry>| -> Vec<String> {
            entries.into_iter().map(|e| e.text).collect()
        };
        Ok(GridClues { columns: texts(snapshot.columns), rows: texts(snapshot.rows) })
    }

    /// Read and parse a puzzle snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Puzzle`] if the file cannot be read, or
    /// [`InputError::PuzzleFormat`] if its contents are malformed.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, InputError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| InputError::Puzzle {
            path: path_ref.display().to_string(),
            source,
        })?;
        Self::from_json_str(&data)
    }
}

/// Number of the first daily puzzle, published on [`FIRST_GAME_EPOCH_SECS`].
pub const FIRST_GAME_NUMBER: u32 = 442;

/// 2025-08-16T00:00:00Z
pub const FIRST_GAME_EPOCH_SECS: u64 = 1_755_302_400;

const SECS_PER_DAY: u64 = 86_400;

/// The daily puzzle number current at `unix_secs` (UTC). One puzzle per day;
/// times before the first puzzle map to the first.
#[must_use]
pub fn game_number_at(unix_secs: u64) -> u32 {
    let days = unix_secs.saturating_sub(FIRST_GAME_EPOCH_SECS) / SECS_PER_DAY;
    u32::try_from(days).map_or(u32::MAX, |d| FIRST_GAME_NUMBER.saturating_add(d))
}
