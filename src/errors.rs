//! Error types for clue compilation and input loading, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each clue-level failure has a unique code (E001-E008) for documentation lookup:
//!
//! - E001: `UnrecognizedClue` (Clue matches no known phrasing)
//! - E002: `EmptyClue` (Empty clue string)
//! - E003: `MissingOperand` (A phrasing that needs an operand has none)
//! - E004: `ExpectedSingleLetter` ("contains the letter" given more than one letter)
//! - E005: `ParseIntError` (Integer parsing error)
//! - E006: `UnknownNumberWord` (Spelled-out number outside two..ten)
//! - E007: `ContradictoryBounds` (Lower length bound above the upper one)
//! - E008: `NomError` (Low-level nom parser error)
//!
//! Input failures owned by the collaborators use I001-I003.
//!
//! # Examples
//!
//! ```
//! use wordgrid::compile;
//!
//! match compile("Glows in the dark") {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use nom::error::{ErrorKind, ParseError as NomParseError};
use std::io;
use std::num::ParseIntError;

/// Why a single clue could not be compiled.
#[derive(Debug, thiserror::Error)]
pub enum ClueError {
    #[error("unrecognized clue phrasing")]
    UnrecognizedClue,

    #[error("empty clue string")]
    EmptyClue,

    #[error("missing operand after \"{phrase}\"")]
    MissingOperand { phrase: &'static str },

    #[error("expected a single letter, found \"{found}\"")]
    ExpectedSingleLetter { found: String },

    #[error("int-parsing error: {0}")]
    ParseIntError(#[from] ParseIntError),

    #[error("cannot parse number: \"{word}\"")]
    UnknownNumberWord { word: String },

    #[error("contradictory bounds: min={min}, max={max}")]
    ContradictoryBounds { min: usize, max: usize },

    // nom parser error (lowest level)
    #[error("nom parser error: {0:?}")]
    NomError(ErrorKind),
}

impl From<ParseIntError> for Box<ClueError> {
    fn from(pie: ParseIntError) -> Self {
        Box::new(ClueError::ParseIntError(pie))
    }
}

impl<'a> NomParseError<&'a str> for Box<ClueError> {
    fn from_error_kind(_input: &'a str, kind: ErrorKind) -> Self {
        Box::new(ClueError::NomError(kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl ClueError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ClueError::UnrecognizedClue => "E001",
            ClueError::EmptyClue => "E002",
            ClueError::MissingOperand { .. } => "E003",
            ClueError::ExpectedSingleLetter { .. } => "E004",
            ClueError::ParseIntError(_) => "E005",
            ClueError::UnknownNumberWord { .. } => "E006",
            ClueError::ContradictoryBounds { .. } => "E007",
            ClueError::NomError(_) => "E008",
        }
    }

    /// Short description of the error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ClueError::UnrecognizedClue => "Clue matches no known phrasing",
            ClueError::EmptyClue => "Empty clue string",
            ClueError::MissingOperand { .. } => "Clue phrasing is missing its operand",
            ClueError::ExpectedSingleLetter { .. } => "Expected exactly one letter",
            ClueError::ParseIntError(_) => "Integer parsing error",
            ClueError::UnknownNumberWord { .. } => "Spelled-out number out of range",
            ClueError::ContradictoryBounds { .. } => "Contradictory length bounds",
            ClueError::NomError(_) => "Low-level nom parser error",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ClueError::UnrecognizedClue => "The clue text does not start or end with any phrasing the compiler knows. New phrasings appear as the live puzzle evolves; each one needs a rule before it can be solved.",
            ClueError::EmptyClue => "The clue was empty or contained only whitespace.",
            ClueError::MissingOperand { .. } => "Phrasings such as \"starts with\" or \"contains\" need the letters to look for. One of the operands was empty after trimming.",
            ClueError::ExpectedSingleLetter { .. } => "\"Contains the letter\" takes exactly one letter. Use \"contains\" for a sequence of letters.",
            ClueError::ParseIntError(_) => "A numeric token in the clue is not a non-negative integer that fits in a machine word.",
            ClueError::UnknownNumberWord { .. } => "\"N letter word\" clues spell the number out, and only two through ten are understood.",
            ClueError::ContradictoryBounds { .. } => "A \"between X and Y letters\" clue had X greater than Y, which no word can satisfy.",
            ClueError::NomError(_) => "The clue started like a known phrasing but did not follow its fixed wording.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ClueError::UnrecognizedClue => Some("Known phrasings include 'Starts with mi', 'Double letter', '5 letters or fewer', 'Contains e, s'"),
            ClueError::EmptyClue => Some("Example: use 'Ends with ing' instead of an empty string"),
            ClueError::MissingOperand { .. } => Some("Add the letters after the phrase (e.g., 'Starts with qu' or 'Contains a, e')"),
            ClueError::ExpectedSingleLetter { .. } => Some("Example: 'Contains the letter z'"),
            ClueError::ParseIntError(_) => Some("Use digits for the count (e.g., '5 letters or fewer')"),
            ClueError::UnknownNumberWord { .. } => Some("Expected one of: two, three, four, five, six, seven, eight, nine, ten"),
            ClueError::ContradictoryBounds { .. } => Some("The minimum length cannot exceed the maximum length"),
            ClueError::NomError(_) => Some("Expected format: 'Between X and Y letters'"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// A clue that could not be turned into a predicate, naming the offending text.
#[derive(Debug, thiserror::Error)]
#[error("cannot compile clue \"{clue}\": {reason}")]
pub struct PredicateCompileError {
    /// The clue text as supplied by the caller.
    pub clue: String,
    #[source]
    pub reason: Box<ClueError>,
}

impl PredicateCompileError {
    pub(crate) fn new(clue: &str, reason: Box<ClueError>) -> Self {
        PredicateCompileError { clue: clue.to_string(), reason }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        self.reason.code()
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        self.reason.description()
    }

    #[must_use]
    pub fn details(&self) -> &'static str {
        self.reason.details()
    }

    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        self.reason.help()
    }

    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Failures reading the word list or the clue source.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read word list from '{path}': {source}")]
    WordList {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read puzzle from '{path}': {source}")]
    Puzzle {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed puzzle description: {0}")]
    PuzzleFormat(#[from] serde_json::Error),
}

impl InputError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            InputError::WordList { .. } => "I001",
            InputError::Puzzle { .. } => "I002",
            InputError::PuzzleFormat(_) => "I003",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            InputError::WordList { .. } => "Word list could not be read",
            InputError::Puzzle { .. } => "Puzzle file could not be read",
            InputError::PuzzleFormat(_) => "Puzzle file is not a valid puzzle description",
        }
    }

    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            InputError::WordList { .. } => "The word list is newline-delimited text, one word per line. The file was missing, unreadable, or not UTF-8.",
            InputError::Puzzle { .. } => "The puzzle snapshot file was missing or unreadable.",
            InputError::PuzzleFormat(_) => "The puzzle snapshot must be JSON with `rows` and `columns` arrays of objects carrying a `text` field.",
        }
    }

    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            InputError::WordList { .. } => Some("Pass an existing file with --word-list"),
            InputError::Puzzle { .. } => Some("Pass an existing file with --puzzle, or give clues with --column/--row"),
            InputError::PuzzleFormat(_) => Some("Example: {\"columns\":[{\"text\":\"Starts with mi\"}],\"rows\":[{\"text\":\"Double letter\"}]}"),
        }
    }

    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
