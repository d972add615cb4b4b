pub mod clue;
mod numbers;

// Re-export the public API so call sites can use `parser::compile`.
pub use clue::{compile, compile_rule, normalize_clue};
