//! Plain-text rendering of a cell's words.

use std::fmt::Write;

use crate::solver::CellResult;

const NO_WORDS: &str = "No words found.\n";

/// Lay `words` out in `num_columns` columns, filled top to bottom then left to right.
///
/// Every entry is padded to the widest word plus two spaces.
#[must_use]
pub fn columns<S: AsRef<str>>(words: &[S], num_columns: usize) -> String {
    if words.is_empty() {
        return NO_WORDS.to_string();
    }

    let num_columns = num_columns.max(1);
    let width = words.iter().map(|w| w.as_ref().chars().count()).max().unwrap_or(0);
    let num_rows = words.len().div_ceil(num_columns);

    let mut out = String::new();
    for row in 0..num_rows {
        for col in 0..num_columns {
            if let Some(word) = words.get(row + col * num_rows) {
                let _ = write!(out, "{:<width$}  ", word.as_ref());
            }
        }
        out.push('\n');
    }
    out
}

/// Heading and word columns for one cell.
#[must_use]
pub fn cell(result: &CellResult, num_columns: usize) -> String {
    format!(
        "{} -- words found: {}\n{}",
        result.name,
        result.words.len(),
        columns(&result.words, num_columns)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_fill_downwards() {
        let words = ["a", "bb", "ccc", "d", "e"];
        // 5 words in 2 columns -> 3 rows; column 0 holds a, bb, ccc
        assert_eq!(columns(&words, 2), "a    d    \nbb   e    \nccc  \n");
    }

    #[test]
    fn test_columns_single_column() {
        assert_eq!(columns(&["ab", "c"], 1), "ab  \nc   \n");
    }

    #[test]
    fn test_columns_zero_treated_as_one() {
        assert_eq!(columns(&["ab", "c"], 0), columns(&["ab", "c"], 1));
    }

    #[test]
    fn test_columns_more_columns_than_words() {
        assert_eq!(columns(&["ab", "c"], 5), "ab  c   \n");
    }

    #[test]
    fn test_columns_empty() {
        let words: [&str; 0] = [];
        assert_eq!(columns(&words, 3), "No words found.\n");
    }

    #[test]
    fn test_cell_heading() {
        let result = CellResult {
            name: "Starts with mi & Double letter".to_string(),
            column_clue: "Starts with mi".to_string(),
            row_clue: "Double letter".to_string(),
            words: vec!["miss".to_string(), "mitt".to_string()],
        };
        assert_eq!(
            cell(&result, 5),
            "Starts with mi & Double letter -- words found: 2\nmiss  mitt  \n"
        );
    }
}
