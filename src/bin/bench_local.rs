//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! - Loads the word list once, then solves each built-in grid several times and reports the median.
//! - I/O (printing) is kept outside the timed section.
//! - One warm-up run per grid is done (not included in timing).
//!
//! Run with `cargo run --bin bench_local --release -- -r 5`.

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordgrid::puzzle::GridClues;
use wordgrid::solver::{self, FailurePolicy};
use wordgrid::word_list::WordList;

/// Simple local benchmark runner: load word list once, time several grids.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,

    /// Number of repeats per grid (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,
}

/// A benchmark case: a name and its column/row clues.
struct Case {
    name: &'static str,
    columns: [&'static str; 3],
    rows: [&'static str; 3],
}

fn get_cases() -> Vec<Case> {
    vec![
        Case {
            name: "prefixes x lengths",
            columns: ["Starts with mi", "Starts with re", "Starts & ends with s"],
            rows: ["5 letters or fewer", "Between 6 and 8 letters", "9 letters or more"],
        },
        Case {
            name: "substrings x counts",
            columns: ["Contains e, a", "Does not contain e, a, i", "Contains the letter z"],
            rows: ["Double letter", "Multiple letter s's", "Seven letter word"],
        },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    eprintln!("Loading word list from: {}", cli.word_list);
    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list)?;
    eprintln!("Loaded {} words in {:.3}s", word_list.len(), t_load.elapsed().as_secs_f64());

    let words_ref = word_list.as_refs();

    for (idx, case) in get_cases().iter().enumerate() {
        eprintln!("\n[{:02}] {}", idx + 1, case.name);
        let clues = GridClues::new(
            case.columns.iter().map(|s| s.to_string()).collect(),
            case.rows.iter().map(|s| s.to_string()).collect(),
        );

        // warm-up, untimed
        if let Err(e) = solver::solve_clues(&clues, &words_ref, FailurePolicy::Abort) {
            eprintln!("  ✗ Warm-up failed: {}", e.display_detailed());
            continue;
        }

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut total_words = 0;
        for rep in 0..cli.num_repeats {
            let t_solve = Instant::now();
            let solution = solver::solve_clues(black_box(&clues), &words_ref, FailurePolicy::Abort)?;
            let solve_secs = t_solve.elapsed().as_secs_f64();

            total_words = black_box(solution.iter().map(|c| c.words.len()).sum::<usize>());
            times.push(solve_secs);
            eprintln!("  run {:>2}/{:>2}: {:.4}s ({} words)", rep + 1, cli.num_repeats, solve_secs, total_words);
        }

        eprintln!("  → median {:.4}s over {} run(s); {} words across all cells", median(times), cli.num_repeats, total_words);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_cases_compile() {
        for case in get_cases() {
            for clue in case.columns.iter().chain(&case.rows) {
                assert!(wordgrid::compile(clue).is_ok(), "{} should compile", clue);
            }
        }
    }
}
