//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `ClueError` and `InputError` implementations via their
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;

use wordgrid::errors::{ClueError, InputError};

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// One of each `ClueError` variant, as the compiler would produce it
fn all_clue_error_variants() -> Vec<ClueError> {
    vec![
        ClueError::UnrecognizedClue,
        ClueError::EmptyClue,
        ClueError::MissingOperand { phrase: "starts with" },
        ClueError::ExpectedSingleLetter { found: "ab".to_string() },
        // ParseIntError--create by parsing invalid integer
        ClueError::ParseIntError("x".parse::<usize>().unwrap_err()),
        ClueError::UnknownNumberWord { word: "eleven".to_string() },
        ClueError::ContradictoryBounds { min: 6, max: 4 },
        ClueError::NomError(nom::error::ErrorKind::Digit),
    ]
}

/// One of each `InputError` variant
fn all_input_error_variants() -> Vec<InputError> {
    vec![
        InputError::WordList {
            path: "data/words.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
        InputError::Puzzle {
            path: "puzzle.json".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
        InputError::PuzzleFormat(
            serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        ),
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Clue Errors\n");
    println!("Reasons a clue could not be compiled. The message always names the clue:\n");
    println!("```");
    println!("cannot compile clue \"<clue>\": <reason> (<code>)");
    println!("```\n");
    generate_error_docs!(all_clue_error_variants());

    println!("## Input Errors\n");
    println!("Problems reading the word list or the puzzle file.\n");
    generate_error_docs!(all_input_error_variants());
}
