use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use wordsquare::dictionary::Dictionary;
use wordsquare::errors::DictionaryError;
use wordsquare::solver::{self, LetterAccounting, SolveConfig, SolveStatus, SolverError, SquareOutcome};

/// Exit code when the letters are valid but no square was produced.
const EXIT_NO_SQUARE: u8 = 2;

/// Word square solver
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// The letters to build the square from; their count must be a perfect square (e.g., "cardareareardart")
    letters: String,

    /// Path to the dictionary file (one word per line). The bundled list is a small
    /// sample; pass a full English word list for real use
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    dictionary: String,

    /// Maximum number of squares to print
    #[arg(short = 'n', long, default_value_t = 1)]
    num_squares_requested: usize,

    /// Time budget for the search, in seconds
    #[arg(short = 't', long, default_value_t = 30)]
    time_budget: u64,

    /// Stop after visiting this many search nodes
    #[arg(long)]
    max_nodes: Option<u64>,

    /// Largest square size to search for; larger inputs are reported, not searched
    #[arg(long, default_value_t = 16)]
    max_size: usize,

    /// Require the whole square (not just each word) to fit the supplied letters
    #[arg(long)]
    shared_letters: bool,
}

impl Cli {
    fn solve_config(&self) -> SolveConfig {
        SolveConfig {
            time_budget: Duration::from_secs(self.time_budget),
            max_nodes: self.max_nodes,
            max_square_size: self.max_size,
            letter_accounting: if self.shared_letters {
                LetterAccounting::Shared
            } else {
                LetterAccounting::PerWord
            },
        }
    }
}

/// Entry point of the word-square CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("WORDSQUARE_DEBUG").is_ok();
    wordsquare::log::init_logger(debug_enabled);

    match try_main() {
        Ok(code) => code,
        Err(e) => {
            if let Some(solver_err) = e.downcast_ref::<SolverError>() {
                eprintln!("Error: {}", solver_err.display_detailed());
            } else if let Some(dictionary_err) = e.downcast_ref::<DictionaryError>() {
                eprintln!("Error: {}", dictionary_err.display_detailed());
            } else {
                eprintln!("Error: {e}");
            }
            // Exit explicitly with a nonzero code so scripts can detect failure
            ExitCode::FAILURE
        }
    }
}

/// Core application logic for the word-square CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the dictionary from disk (failure here is fatal).
/// 3. Search for squares.
/// 4. Print each square on stdout, diagnostics on stderr.
fn try_main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.solve_config();

    // 1. Load the dictionary once
    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    // 2. Single square: report the tagged outcome
    if cli.num_squares_requested <= 1 {
        let t_solve = Instant::now();
        let outcome = solver::generate_square_with(&cli.letters, &dictionary, &config)?;
        let solve_secs = t_solve.elapsed().as_secs_f64();

        let code = match outcome {
            SquareOutcome::Found(square) => {
                println!("{square}");
                ExitCode::SUCCESS
            }
            SquareOutcome::NoSolution => {
                eprintln!("No valid word square found");
                ExitCode::from(EXIT_NO_SQUARE)
            }
            SquareOutcome::InvalidInput(e) => {
                eprintln!("Error: {}", e.display_detailed());
                ExitCode::FAILURE
            }
            SquareOutcome::BudgetExhausted { elapsed, nodes_visited } => {
                eprintln!(
                    "⚠️  Search budget exhausted after {:.1}s ({nodes_visited} nodes); no square found",
                    elapsed.as_secs_f64()
                );
                ExitCode::from(EXIT_NO_SQUARE)
            }
            SquareOutcome::SizeLimitExceeded { size, max } => {
                eprintln!("⚠️  A {size}×{size} square exceeds the size limit of {max}; raise it with --max-size");
                ExitCode::from(EXIT_NO_SQUARE)
            }
        };

        eprintln!(
            "Loaded {} words in {:.3}s; solved in {:.3}s.",
            dictionary.len(),
            load_secs,
            solve_secs
        );
        return Ok(code);
    }

    // 3. Several squares: print each, separated by a blank line
    let t_solve = Instant::now();
    let result = solver::find_squares(&cli.letters, &dictionary, cli.num_squares_requested, &config)?;
    let solve_secs = t_solve.elapsed().as_secs_f64();

    for (i, square) in result.squares.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{square}");
    }

    match result.status {
        SolveStatus::TimedOut { elapsed } => {
            eprintln!("⚠️  Timed out after {:.1}s; some squares may not have been returned", elapsed.as_secs_f64());
        }
        SolveStatus::NodeLimitReached { nodes_visited } => {
            eprintln!("⚠️  Stopped after {nodes_visited} search nodes; some squares may not have been returned");
        }
        SolveStatus::SizeLimitExceeded { size, max } => {
            eprintln!("⚠️  A {size}×{size} square exceeds the size limit of {max}; raise it with --max-size");
        }
        SolveStatus::FoundEnough => {
            eprintln!("✓ Stopped after finding {}/{} requested squares", result.squares.len(), cli.num_squares_requested);
        }
        SolveStatus::CandidatesExhausted => {
            eprintln!("✓ Search exhausted ({} squares found)", result.squares.len());
        }
    }

    eprintln!(
        "Loaded {} words in {:.3}s; {} candidates; solved in {:.3}s ({} nodes).",
        dictionary.len(),
        load_secs,
        result.num_candidates,
        solve_secs,
        result.nodes_visited
    );

    if result.squares.is_empty() {
        Ok(ExitCode::from(EXIT_NO_SQUARE))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
