//! The clue grammar: an ordered table of phrasings, first match wins.
//!
//! Clues are normalized (trimmed, whitespace collapsed, lower-cased, typographic
//! apostrophes folded) and then tried against [`CLUE_RULES`] top to bottom.
//! Order matters where one phrasing is a prefix of another: "contains the letter"
//! must come before "contains", "multiple letter" before "multiple", and
//! "starts & ends with" is tried before "starts with".

use log::debug;

use super::numbers::{count, length_range, number_word};
use crate::errors::{ClueError, PredicateCompileError};
use crate::predicate::{Predicate, WordRule};

/// Where the fixed phrase sits in the clue.
#[derive(Debug, Clone, Copy)]
enum Shape {
    /// Phrase first, operand after it.
    Prefix(&'static str),
    /// Operand first, phrase after it.
    Suffix(&'static str),
    /// The whole clue, no operand.
    Exact(&'static str),
}

impl Shape {
    fn phrase(self) -> &'static str {
        match self {
            Shape::Prefix(p) | Shape::Suffix(p) | Shape::Exact(p) => p,
        }
    }

    /// If `clue` has this shape, return its (trimmed) operand.
    ///
    /// The phrase must end (or, for a suffix, begin) on a word boundary, so
    /// "multiples of three" is not "multiple" followed by "s of three".
    fn operand(self, clue: &str) -> Option<&str> {
        match self {
            Shape::Prefix(p) => clue
                .strip_prefix(p)
                .filter(|rest| rest.is_empty() || rest.starts_with(' '))
                .map(str::trim),
            Shape::Suffix(p) => clue
                .strip_suffix(p)
                .filter(|rest| rest.is_empty() || rest.ends_with(' '))
                .map(str::trim),
            Shape::Exact(p) => (clue == p).then_some(""),
        }
    }
}

type Build = fn(&'static str, &str) -> Result<WordRule, Box<ClueError>>;

struct ClueRule {
    shape: Shape,
    build: Build,
}

const CLUE_RULES: &[ClueRule] = &[
    ClueRule { shape: Shape::Prefix("starts & ends with"), build: starts_and_ends_with },
    ClueRule { shape: Shape::Prefix("starts with"), build: starts_with },
    ClueRule { shape: Shape::Prefix("ends with"), build: ends_with },
    ClueRule { shape: Shape::Prefix("contains the letter"), build: contains_the_letter },
    ClueRule { shape: Shape::Prefix("contains"), build: contains },
    ClueRule { shape: Shape::Prefix("does not contain"), build: does_not_contain },
    ClueRule { shape: Shape::Prefix("between"), build: between },
    ClueRule { shape: Shape::Prefix("multiple letter"), build: multiple },
    ClueRule { shape: Shape::Prefix("multiple"), build: multiple },
    ClueRule { shape: Shape::Exact("double letter"), build: double_letter },
    ClueRule { shape: Shape::Suffix("letters or fewer"), build: letters_or_fewer },
    ClueRule { shape: Shape::Suffix("letters or more"), build: letters_or_more },
    ClueRule { shape: Shape::Suffix("letter word"), build: letter_word },
];

/// Canonical form of a clue for matching against the phrasing table.
#[must_use]
pub fn normalize_clue(clue: &str) -> String {
    clue.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .replace('\u{2019}', "'")
}

/// Compile a clue into a [`Predicate`] named after the clue text.
///
/// # Errors
///
/// Returns a [`PredicateCompileError`] naming the clue if it matches no known
/// phrasing or its operands are malformed.
pub fn compile(clue: &str) -> Result<Predicate, PredicateCompileError> {
    compile_rule(clue)
        .map(|rule| Predicate::new(clue, rule))
        .map_err(|reason| PredicateCompileError::new(clue, reason))
}

/// Compile a clue into its bare [`WordRule`].
///
/// # Errors
///
/// Returns the specific [`ClueError`] when the clue cannot be compiled.
pub fn compile_rule(clue: &str) -> Result<WordRule, Box<ClueError>> {
    let normalized = normalize_clue(clue);
    if normalized.is_empty() {
        return Err(Box::new(ClueError::EmptyClue));
    }

    let (rule, operand) = CLUE_RULES
        .iter()
        .find_map(|rule| rule.shape.operand(&normalized).map(|operand| (rule, operand)))
        .ok_or_else(|| Box::new(ClueError::UnrecognizedClue))?;

    let compiled = (rule.build)(rule.shape.phrase(), operand)?;
    debug!("compiled clue {clue:?} as {compiled}");
    Ok(compiled)
}

// === Operand builders ===

fn required<'a>(phrase: &'static str, operand: &'a str) -> Result<&'a str, Box<ClueError>> {
    if operand.is_empty() {
        Err(Box::new(ClueError::MissingOperand { phrase }))
    } else {
        Ok(operand)
    }
}

// "a, e" -> ["a", "e"]; "el" stays a single sequence
fn operand_list(phrase: &'static str, operand: &str) -> Result<Vec<String>, Box<ClueError>> {
    operand
        .split(',')
        .map(|part| required(phrase, part.trim()).map(str::to_string))
        .collect()
}

fn starts_and_ends_with(phrase: &'static str, operand: &str) -> Result<WordRule, Box<ClueError>> {
    let affix = required(phrase, operand)?.to_string();
    Ok(WordRule::PrefixAndSuffix { affix })
}

fn starts_with(phrase: &'static str, operand: &str) -> Result<WordRule, Box<ClueError>> {
    let prefix = required(phrase, operand)?.to_string();
    Ok(WordRule::PrefixMatch { prefix })
}

fn ends_with(phrase: &'static str, operand: &str) -> Result<WordRule, Box<ClueError>> {
    let suffix = required(phrase, operand)?.to_string();
    Ok(WordRule::SuffixMatch { suffix })
}

fn contains_the_letter(phrase: &'static str, operand: &str) -> Result<WordRule, Box<ClueError>> {
    let letter = required(phrase, operand)?;
    if letter.chars().count() != 1 {
        return Err(Box::new(ClueError::ExpectedSingleLetter { found: letter.to_string() }));
    }
    Ok(WordRule::SubstringAll { substrings: vec![letter.to_string()] })
}

fn contains(phrase: &'static str, operand: &str) -> Result<WordRule, Box<ClueError>> {
    Ok(WordRule::SubstringAll { substrings: operand_list(phrase, operand)? })
}

fn does_not_contain(phrase: &'static str, operand: &str) -> Result<WordRule, Box<ClueError>> {
    Ok(WordRule::SubstringNone { substrings: operand_list(phrase, operand)? })
}

fn between(_phrase: &'static str, operand: &str) -> Result<WordRule, Box<ClueError>> {
    length_range(operand)
}

fn multiple(phrase: &'static str, operand: &str) -> Result<WordRule, Box<ClueError>> {
    let needle = operand.strip_suffix("'s").unwrap_or(operand).trim();
    let needle = required(phrase, needle)?.to_string();
    Ok(WordRule::OccursMoreThanOnce { needle })
}

fn double_letter(_phrase: &'static str, _operand: &str) -> Result<WordRule, Box<ClueError>> {
    Ok(WordRule::DoubleLetter)
}

fn letters_or_fewer(phrase: &'static str, operand: &str) -> Result<WordRule, Box<ClueError>> {
    Ok(WordRule::LengthAtMost { max: count(operand, phrase)? })
}

fn letters_or_more(phrase: &'static str, operand: &str) -> Result<WordRule, Box<ClueError>> {
    Ok(WordRule::LengthAtLeast { min: count(operand, phrase)? })
}

fn letter_word(phrase: &'static str, operand: &str) -> Result<WordRule, Box<ClueError>> {
    let len = number_word(required(phrase, operand)?)?;
    Ok(WordRule::LengthExact { len })
}
