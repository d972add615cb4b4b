//! Compiled word classifiers.
//!
//! A [`WordRule`] carries only the literal operands extracted from a clue, and
//! [`WordRule::matches`] is the single place where each kind of rule is evaluated.
//! A [`Predicate`] pairs a rule with the clue text it came from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PredicateCompileError;

/// One kind of word-matching rule, with its operands.
///
/// Operands are compared case-sensitively against the word; the compiler
/// lower-cases them, so the word list should be lower-case too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WordRule {
    PrefixMatch { prefix: String },
    SuffixMatch { suffix: String },
    /// The same literal at both ends (the two may overlap in a short word).
    PrefixAndSuffix { affix: String },
    /// Every listed substring appears somewhere in the word.
    SubstringAll { substrings: Vec<String> },
    /// None of the listed substrings appear.
    SubstringNone { substrings: Vec<String> },
    /// Inclusive on both ends.
    LengthRange { min: usize, max: usize },
    LengthExact { len: usize },
    LengthAtLeast { min: usize },
    LengthAtMost { max: usize },
    DoubleLetter,
    /// Non-overlapping occurrences of `needle`, more than one.
    OccursMoreThanOnce { needle: String },
}

impl WordRule {
    /// Does `word` satisfy this rule?
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        match self {
            WordRule::PrefixMatch { prefix } => word.starts_with(prefix.as_str()),
            WordRule::SuffixMatch { suffix } => word.ends_with(suffix.as_str()),
            WordRule::PrefixAndSuffix { affix } => {
                word.starts_with(affix.as_str()) && word.ends_with(affix.as_str())
            }
            WordRule::SubstringAll { substrings } => {
                substrings.iter().all(|s| word.contains(s.as_str()))
            }
            WordRule::SubstringNone { substrings } => {
                !substrings.iter().any(|s| word.contains(s.as_str()))
            }
            WordRule::LengthRange { min, max } => (*min..=*max).contains(&char_len(word)),
            WordRule::LengthExact { len } => char_len(word) == *len,
            WordRule::LengthAtLeast { min } => char_len(word) >= *min,
            WordRule::LengthAtMost { max } => char_len(word) <= *max,
            WordRule::DoubleLetter => word.chars().zip(word.chars().skip(1)).any(|(a, b)| a == b),
            WordRule::OccursMoreThanOnce { needle } => {
                word.matches(needle.as_str()).nth(1).is_some()
            }
        }
    }
}

fn char_len(word: &str) -> usize {
    word.chars().count()
}

impl fmt::Display for WordRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WordRule::PrefixMatch { prefix } => write!(f, "starts with \"{prefix}\""),
            WordRule::SuffixMatch { suffix } => write!(f, "ends with \"{suffix}\""),
            WordRule::PrefixAndSuffix { affix } => write!(f, "starts and ends with \"{affix}\""),
            WordRule::SubstringAll { substrings } => {
                write!(f, "contains all of [{}]", substrings.join(", "))
            }
            WordRule::SubstringNone { substrings } => {
                write!(f, "contains none of [{}]", substrings.join(", "))
            }
            WordRule::LengthRange { min, max } => write!(f, "length in {min}..={max}"),
            WordRule::LengthExact { len } => write!(f, "length = {len}"),
            WordRule::LengthAtLeast { min } => write!(f, "length >= {min}"),
            WordRule::LengthAtMost { max } => write!(f, "length <= {max}"),
            WordRule::DoubleLetter => write!(f, "has a double letter"),
            WordRule::OccursMoreThanOnce { needle } => write!(f, "\"{needle}\" occurs more than once"),
        }
    }
}

/// A compiled clue: the original text (for display) and its rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    pub name: String,
    pub rule: WordRule,
}

impl Predicate {
    #[must_use]
    pub fn new(name: impl Into<String>, rule: WordRule) -> Self {
        Predicate { name: name.into(), rule }
    }

    /// Does `word` satisfy the clue?
    #[must_use]
    pub fn classify(&self, word: &str) -> bool {
        self.rule.matches(word)
    }
}

impl FromStr for Predicate {
    type Err = PredicateCompileError;

    fn from_str(clue: &str) -> Result<Self, Self::Err> {
        crate::parser::compile(clue)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.rule)
    }
}
