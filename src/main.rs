use std::process::ExitCode;
use clap::Parser;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use wordgrid::errors::{InputError, PredicateCompileError};
use wordgrid::format;
use wordgrid::puzzle::{self, GridClues};
use wordgrid::solver::{self, FailurePolicy};
use wordgrid::word_list::WordList;

/// Word-grid puzzle solver: lists the words fitting each row/column pair of clues
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Saved puzzle snapshot (JSON with `columns` and `rows` of `{ "text": ... }`)
    #[arg(short, long, conflicts_with_all = ["column", "row"])]
    puzzle: Option<String>,

    /// A column clue (repeat once per column, in order)
    #[arg(short, long, requires = "row")]
    column: Vec<String>,

    /// A row clue (repeat once per row, in order)
    #[arg(short, long, requires = "column")]
    row: Vec<String>,

    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,

    /// Number of text columns used to print each cell's words
    #[arg(short = 'n', long = "columns", default_value_t = 5)]
    num_columns: usize,

    /// Print the results as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Daily puzzle number recorded in the JSON output (defaults to today's
    /// number when solving a --puzzle snapshot)
    #[arg(long)]
    game_number: Option<u32>,

    /// Leave out cells whose clue does not compile instead of failing
    #[arg(long)]
    skip_bad_clues: bool,
}

/// Entry point of the wordgrid CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    wordgrid::log::init_logger(wordgrid::log::debug_requested());

    if let Err(e) = try_main() {
        if let Some(compile_err) = e.downcast_ref::<PredicateCompileError>() {
            eprintln!("Error: {}", compile_err.display_detailed());
        } else if let Some(input_err) = e.downcast_ref::<InputError>() {
            eprintln!("Error: {}", input_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Gather the clues (puzzle file or `--column`/`--row`).
/// 3. Load the word list from disk.
/// 4. Compile the clues and solve every cell.
/// 5. Print each cell on stdout, as text or JSON.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let clues = match &cli.puzzle {
        Some(path) => GridClues::load_from_path(path)?,
        None => GridClues::new(cli.column.clone(), cli.row.clone()),
    };
    if clues.columns.is_empty() || clues.rows.is_empty() {
        return Err("need at least one column clue and one row clue (use --puzzle or --column/--row)".into());
    }

    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let policy = if cli.skip_bad_clues {
        FailurePolicy::SkipCell
    } else {
        FailurePolicy::Abort
    };
    let mut solution = solver::solve_clues(&clues, &word_list.entries, policy)?;

    if cli.json {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?;
        let game_number = cli
            .game_number
            .or_else(|| cli.puzzle.as_ref().map(|_| puzzle::game_number_at(now.as_secs())));
        let timestamp_ms = u64::try_from(now.as_millis()).unwrap_or(u64::MAX);
        solution = solution.stamped(game_number, timestamp_ms);
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        for cell in &solution {
            println!("{}", format::cell(cell, cli.num_columns));
        }
    }

    for skipped in &solution.skipped {
        eprintln!("Skipped \"{}\": {}", skipped.clue, skipped.error);
    }
    eprintln!(
        "Loaded {} words in {:.3}s; solved {} cells.",
        word_list.len(),
        load_secs,
        solution.len()
    );

    Ok(())
}
