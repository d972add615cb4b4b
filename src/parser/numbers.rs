use nom::{
    bytes::complete::tag,
    character::complete::{digit1, space0, space1},
    combinator::all_consuming,
    IResult,
    Parser,
};

use crate::errors::ClueError;
use crate::predicate::WordRule;

/// Parser result type: input, output, with our custom `ClueError`
pub(crate) type PResult<'a, O> = IResult<&'a str, O, Box<ClueError>>;

/// Spelled-out counts accepted by "N letter word" clues.
const NUMBER_WORDS: [(&str, usize); 9] = [
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

// "4 and 6 letters" (whatever follows "between")
fn bounds(input: &str) -> PResult<'_, (&str, &str)> {
    let parsed: PResult<'_, _> = all_consuming((
        space0,
        digit1,
        space1,
        tag("and"),
        space1,
        digit1,
        space1,
        tag("letters"),
        space0,
    ))
    .parse(input);
    let (rest, (_, low, _, _, _, high, _, _, _)) = parsed?;
    Ok((rest, (low, high)))
}

/// Parse the remainder of a "between X and Y letters" clue into a length range.
pub(crate) fn length_range(input: &str) -> Result<WordRule, Box<ClueError>> {
    let (low, high) = match bounds(input) {
        Ok((_, pair)) => pair,
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => return Err(e),
        Err(nom::Err::Incomplete(_)) => {
            return Err(Box::new(ClueError::NomError(nom::error::ErrorKind::Complete)))
        }
    };
    let min = low.parse::<usize>()?;
    let max = high.parse::<usize>()?;
    if min > max {
        return Err(Box::new(ClueError::ContradictoryBounds { min, max }));
    }
    Ok(WordRule::LengthRange { min, max })
}

/// Parse a count written in digits, e.g. the "5" of "5 letters or fewer".
pub(crate) fn count(input: &str, phrase: &'static str) -> Result<usize, Box<ClueError>> {
    if input.is_empty() {
        return Err(Box::new(ClueError::MissingOperand { phrase }));
    }
    Ok(input.parse::<usize>()?)
}

/// Map "two".."ten" to its value.
pub(crate) fn number_word(word: &str) -> Result<usize, Box<ClueError>> {
    NUMBER_WORDS
        .iter()
        .find(|(name, _)| *name == word)
        .map(|&(_, n)| n)
        .ok_or_else(|| Box::new(ClueError::UnknownNumberWord { word: word.to_string() }))
}
