//! The grid solver: intersect every column predicate with every row predicate
//! over a word list.
//!
//! # Examples
//!
//! ```
//! use wordgrid::{compile, solver};
//!
//! let columns = vec![compile("Starts with mi")?, compile("Ends with ss")?];
//! let rows = vec![compile("Double letter")?];
//! let words = vec!["miss", "mitt", "moss", "mile"];
//!
//! let solution = solver::solve_grid(&columns, &rows, &words);
//! assert_eq!(solution.results[0].words, vec!["miss", "mitt"]);
//! assert_eq!(solution.results[1].words, vec!["miss", "moss"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Cells come out column-major: every row of the first column, then every row
//! of the second, and so on. Words keep their word-list order.

use instant::Instant;
use log::{debug, info, warn};
use serde::Serialize;

use crate::errors::PredicateCompileError;
use crate::parser::compile;
use crate::predicate::Predicate;
use crate::puzzle::GridClues;

/// The words satisfying one (column, row) pair of clues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellResult {
    /// `"<column clue> & <row clue>"`
    pub name: String,
    #[serde(rename = "condition_1")]
    pub column_clue: String,
    #[serde(rename = "condition_2")]
    pub row_clue: String,
    pub words: Vec<String>,
}

/// Every cell of a solved grid, plus any clues that were skipped.
///
/// `game_number` and `timestamp` are left unset by the solver; callers that
/// know which daily puzzle they solved fill them in with [`GridSolution::stamped`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct GridSolution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_number: Option<u32>,
    /// Milliseconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    pub results: Vec<CellResult>,
    /// Clues that failed to compile under [`FailurePolicy::SkipCell`].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedClue>,
}

impl GridSolution {
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CellResult> {
        self.results.iter()
    }

    /// Attach the puzzle number and solve time.
    #[must_use]
    pub fn stamped(self, game_number: Option<u32>, timestamp_ms: u64) -> Self {
        GridSolution { game_number, timestamp: Some(timestamp_ms), ..self }
    }
}

impl IntoIterator for GridSolution {
    type Item = CellResult;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a GridSolution {
    type Item = &'a CellResult;
    type IntoIter = std::slice::Iter<'a, CellResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// A clue left out of the grid, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedClue {
    pub clue: String,
    pub error: String,
}

/// What [`solve_clues`] does when a clue does not compile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop and return the first compile error.
    #[default]
    Abort,
    /// Drop every cell involving the bad clue and keep going.
    SkipCell,
}

/// Solve every (column, row) cell against `words`.
///
/// Each row predicate filters the word list once; each column predicate is
/// then applied to that smaller subset. Empty words never appear in a result.
#[must_use]
pub fn solve_grid<S: AsRef<str>>(
    columns: &[Predicate],
    rows: &[Predicate],
    words: &[S],
) -> GridSolution {
    let t_solve = Instant::now();

    // words accepted by each row, in word-list order
    let row_matches: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| {
            words
                .iter()
                .map(<S as AsRef<str>>::as_ref)
                .filter(|w| !w.is_empty() && row.classify(w))
                .collect()
        })
        .collect();

    let mut results = Vec::with_capacity(columns.len() * rows.len());
    for column in columns {
        for (row, candidates) in rows.iter().zip(&row_matches) {
            let cell_words: Vec<String> = candidates
                .iter()
                .filter(|w| column.classify(w))
                .map(|w| (*w).to_string())
                .collect();
            debug!("{} & {}: {} words", column.name, row.name, cell_words.len());
            results.push(CellResult {
                name: format!("{} & {}", column.name, row.name),
                column_clue: column.name.clone(),
                row_clue: row.name.clone(),
                words: cell_words,
            });
        }
    }

    info!(
        "Solved {}x{} grid over {} words in {:.3}s",
        columns.len(),
        rows.len(),
        words.len(),
        t_solve.elapsed().as_secs_f64()
    );

    GridSolution { results, ..GridSolution::default() }
}

/// Compile the clues of a grid and solve it.
///
/// # Errors
///
/// Under [`FailurePolicy::Abort`], returns the first clue (columns before rows)
/// that fails to compile. Under [`FailurePolicy::SkipCell`] this never fails.
pub fn solve_clues<S: AsRef<str>>(
    clues: &GridClues,
    words: &[S],
    policy: FailurePolicy,
) -> Result<GridSolution, PredicateCompileError> {
    let mut skipped = Vec::new();
    let columns = compile_all(&clues.columns, policy, &mut skipped)?;
    let rows = compile_all(&clues.rows, policy, &mut skipped)?;

    let mut solution = solve_grid(&columns, &rows, words);
    solution.skipped = skipped;
    Ok(solution)
}

fn compile_all(
    clues: &[String],
    policy: FailurePolicy,
    skipped: &mut Vec<SkippedClue>,
) -> Result<Vec<Predicate>, PredicateCompileError> {
    let mut predicates = Vec::with_capacity(clues.len());
    for clue in clues {
        match compile(clue) {
            Ok(predicate) => predicates.push(predicate),
            Err(e) if policy == FailurePolicy::SkipCell => {
                warn!("Skipping cells for clue {clue:?}: {}", e.reason);
                skipped.push(SkippedClue { clue: clue.clone(), error: e.display_detailed() });
            }
            Err(e) => return Err(e),
        }
    }
    Ok(predicates)
}
