//! Integration tests for the word-grid solver.
//!
//! These tests run the complete pipeline from clue text through compilation
//! to grid solving, using the fixture word list and puzzle snapshot.

use wordgrid::errors::ClueError;
use wordgrid::puzzle::GridClues;
use wordgrid::solver::{solve_clues, solve_grid, FailurePolicy};
use wordgrid::word_list::WordList;
use wordgrid::{compile, Predicate};

/// Load the fixture word list
fn load_test_words() -> Vec<String> {
    WordList::load_from_path("tests/fixtures/words.txt")
        .expect("Failed to read test word list")
        .entries
}

fn matching(predicate: &Predicate, words: &[String]) -> Vec<String> {
    words.iter().filter(|w| predicate.classify(w)).cloned().collect()
}

#[cfg(test)]
mod compiled_clues {
    use super::*;

    #[test]
    fn test_starts_with_agrees_with_str_prefix() {
        let words = load_test_words();
        for prefix in ["m", "mi", "mis", "b", "sass", "zz"] {
            let predicate = compile(&format!("Starts with {prefix}")).unwrap();
            for word in &words {
                assert_eq!(predicate.classify(word), word.starts_with(prefix), "{} / {}", prefix, word);
            }
        }
    }

    #[test]
    fn test_double_letter_agrees_with_adjacent_pairs() {
        let predicate = compile("Double letter").unwrap();
        for word in load_test_words() {
            let chars: Vec<char> = word.chars().collect();
            let expected = chars.windows(2).any(|pair| pair[0] == pair[1]);
            assert_eq!(predicate.classify(&word), expected, "{}", word);
        }
    }

    #[test]
    fn test_length_bounds_agree_with_len() {
        let words = load_test_words();
        for n in 0..15 {
            let fewer = compile(&format!("{n} letters or fewer")).unwrap();
            let more = compile(&format!("{n} letters or more")).unwrap();
            for word in &words {
                assert_eq!(fewer.classify(word), word.len() <= n, "{} <= {}", word, n);
                assert_eq!(more.classify(word), word.len() >= n, "{} >= {}", word, n);
            }
        }
    }

    #[test]
    fn test_between() {
        let predicate = compile("Between 4 and 6 letters").unwrap();
        assert!(predicate.classify("hello"));
        assert!(!predicate.classify("hi"));
        assert!(!predicate.classify("antidisestablishmentarianism"));
    }

    #[test]
    fn test_multiple_letter() {
        assert!(compile("Multiple letter l's").unwrap().classify("hello"));
        assert!(!compile("Multiple letter h's").unwrap().classify("hello"));
        assert!(compile("Multiple l's").unwrap().classify("hello"));
    }

    #[test]
    fn test_contains_sequence_vs_list() {
        let sequence = compile("Contains miss").unwrap();
        let list = compile("Contains mi, ss").unwrap();
        assert!(sequence.classify("mississippi"));
        assert!(list.classify("mississippi"));
        // "mi" and "ss" both present, but never as "miss"
        assert!(list.classify("mi-ss"));
        assert!(!sequence.classify("mi-ss"));
    }

    #[test]
    fn test_clue_case_is_ignored() {
        let words = load_test_words();
        let lower = compile("starts with mi").unwrap();
        let upper = compile("STARTS WITH MI").unwrap();
        assert_eq!(matching(&lower, &words), matching(&upper, &words));
    }

    #[test]
    fn test_unrecognized_clue_is_an_error() {
        let err = compile("Glows in the dark").unwrap_err();
        assert_eq!(err.clue, "Glows in the dark");
        assert!(matches!(*err.reason, ClueError::UnrecognizedClue));
    }

    #[test]
    fn test_lookalike_phrasings_are_rejected() {
        for clue in ["Multiples of three", "Starts without a", "Containsium", "Ends withdrawn"] {
            let err = compile(clue).unwrap_err();
            assert_eq!(err.clue, clue);
            assert_eq!(err.code(), "E001", "{}", clue);
        }
    }
}

#[cfg(test)]
mod grid_solving {
    use super::*;

    #[test]
    fn test_fixture_puzzle() {
        let clues = GridClues::load_from_path("tests/fixtures/puzzle.json").unwrap();
        let words = load_test_words();
        let solution = solve_clues(&clues, &words, FailurePolicy::Abort).unwrap();

        assert_eq!(solution.len(), 9);
        let expected: Vec<(&str, Vec<&str>)> = vec![
            ("Starts with mi & Double letter", vec!["mirror", "miss", "mission", "mississippi", "mitt"]),
            ("Starts with mi & 5 letters or fewer", vec!["mile", "miss", "mist", "mitt"]),
            ("Starts with mi & Multiple letter s's", vec!["miss", "mission", "mississippi"]),
            ("Ends with s & Double letter", vec!["miss", "moss", "pass", "remiss", "sees", "stress"]),
            ("Ends with s & 5 letters or fewer", vec!["miss", "moss", "pass", "sees"]),
            ("Ends with s & Multiple letter s's", vec!["miss", "moss", "pass", "remiss", "sees", "stress"]),
            ("Contains e & Double letter", vec!["apple", "bookkeeper", "eel", "hello", "remiss", "sees", "stress"]),
            ("Contains e & 5 letters or fewer", vec!["apple", "area", "eel", "hello", "mile", "queue", "sees"]),
            ("Contains e & Multiple letter s's", vec!["remiss", "sees", "stress"]),
        ];
        for (cell, (name, words)) in solution.iter().zip(expected) {
            assert_eq!(cell.name, name);
            assert_eq!(cell.words, words, "{}", name);
        }
    }

    #[test]
    fn test_cells_are_intersections_in_dictionary_order() {
        let words = load_test_words();
        let columns = vec![compile("Contains the letter s").unwrap(), compile("Double letter").unwrap()];
        let rows = vec![compile("Between 4 and 6 letters").unwrap()];
        let solution = solve_grid(&columns, &rows, &words);

        assert_eq!(solution.len(), 2);
        assert_eq!(solution.results[0].name, "Contains the letter s & Between 4 and 6 letters");
        assert_eq!(solution.results[1].name, "Double letter & Between 4 and 6 letters");
        for (cell, column) in solution.iter().zip(&columns) {
            let expected: Vec<String> = words
                .iter()
                .filter(|w| column.classify(w) && rows[0].classify(w))
                .cloned()
                .collect();
            assert_eq!(cell.words, expected);
            assert_eq!(cell.column_clue, column.name);
            assert_eq!(cell.row_clue, rows[0].name);
        }
    }

    #[test]
    fn test_recompiling_gives_identical_results() {
        let words = load_test_words();
        let clues = GridClues::from_json_str(include_str!("fixtures/puzzle.json")).unwrap();
        let first = solve_clues(&clues, &words, FailurePolicy::Abort).unwrap();
        let second = solve_clues(&clues, &words, FailurePolicy::Abort).unwrap();
        assert_eq!(first.results, second.results);
    }

    #[test]
    fn test_empty_dictionary() {
        let clues = GridClues::from_json_str(include_str!("fixtures/puzzle.json")).unwrap();
        let words: Vec<String> = Vec::new();
        let solution = solve_clues(&clues, &words, FailurePolicy::Abort).unwrap();
        assert_eq!(solution.len(), 9);
        assert!(solution.iter().all(|cell| cell.words.is_empty()));
    }

    #[test]
    fn test_crlf_word_list_with_blank_lines() {
        let word_list = WordList::parse_from_str("MISS\r\n\r\nmoss\r\n\nmitt\r\n");
        let columns = vec![compile("Double letter").unwrap()];
        let rows = vec![compile("4 letters or fewer").unwrap()];
        let solution = solve_grid(&columns, &rows, &word_list.entries);
        assert_eq!(solution.results[0].words, vec!["miss", "moss", "mitt"]);
    }

    #[test]
    fn test_bad_clue_abort_vs_skip() {
        let clues = GridClues::new(
            vec!["Starts with mi".into(), "Eleven letter word".into()],
            vec!["Double letter".into()],
        );
        let words = load_test_words();

        let err = solve_clues(&clues, &words, FailurePolicy::Abort).unwrap_err();
        assert_eq!(err.clue, "Eleven letter word");
        assert_eq!(err.code(), "E006");

        let solution = solve_clues(&clues, &words, FailurePolicy::SkipCell).unwrap();
        assert_eq!(solution.len(), 1);
        assert_eq!(solution.skipped[0].clue, "Eleven letter word");
    }

    #[test]
    fn test_json_output_shape() {
        let clues = GridClues::load_from_path("tests/fixtures/puzzle.json").unwrap();
        let solution = solve_clues(&clues, &load_test_words(), FailurePolicy::Abort).unwrap();
        let json = serde_json::to_value(&solution).unwrap();

        let first = &json["results"][0];
        assert_eq!(first["name"], "Starts with mi & Double letter");
        assert_eq!(first["condition_1"], "Starts with mi");
        assert_eq!(first["condition_2"], "Double letter");
        assert_eq!(first["words"].as_array().unwrap().len(), 5);
        assert!(json.get("game_number").is_none());

        let stamped = serde_json::to_value(solution.stamped(Some(442), 1_755_302_400_000)).unwrap();
        assert_eq!(stamped["game_number"], 442);
        assert_eq!(stamped["results"].as_array().unwrap().len(), 9);
    }
}
