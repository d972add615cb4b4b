// Reusable library API for the CLI and tools
pub mod errors;
pub mod format;
pub mod log;
pub mod parser;
pub mod predicate;
pub mod puzzle;
pub mod solver;
pub mod word_list;

pub use errors::{ClueError, InputError, PredicateCompileError};
pub use parser::compile;
pub use predicate::{Predicate, WordRule};
pub use puzzle::GridClues;
pub use solver::{solve_clues, solve_grid, CellResult, FailurePolicy, GridSolution};
pub use word_list::WordList;
