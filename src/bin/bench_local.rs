//! `bench_local.rs` — quick local timing runner for the square search
//!
//! Loads the dictionary once, then runs each letter set several times and
//! reports the median. Printing happens outside the timed section, and one
//! untimed warm-up run is done per case.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print the squares found:        `cargo run --bin bench_local --release -- -p`
//! - Shared letter pool:             `cargo run --bin bench_local --release -- --shared-letters`

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordsquare::dictionary::Dictionary;
use wordsquare::solver::{self, LetterAccounting, SolveConfig, SquareOutcome};

/// Simple local benchmark runner: load the dictionary once, time several letter sets.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dictionary file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    dictionary: String,

    /// Number of repeats per case (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print the square found by the last run of each case
    #[arg(short = 'p', long = "print")]
    print_squares: bool,

    /// Account letters against one shared pool instead of per word
    #[arg(long)]
    shared_letters: bool,
}

/// Letter sets to time. Edit/add new cases here.
fn get_cases() -> Vec<&'static str> {
    vec![
        "a",
        "noon",
        "biticeten",
        "cardareareardart",
        "heartemberaboverevuetrees",
        // no square exists; measures a full exhaustive search
        "arearopeacesreds",
        // six letters per row; the sample dictionary has few of these
        "abcdefghijklmnopqrstuvwxyzabcdefghij",
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

/// Short label for an outcome in the summary table.
fn outcome_label(outcome: &SquareOutcome) -> &'static str {
    match outcome {
        SquareOutcome::Found(_) => "found",
        SquareOutcome::NoSolution => "none",
        SquareOutcome::InvalidInput(_) => "invalid",
        SquareOutcome::BudgetExhausted { .. } => "budget",
        SquareOutcome::SizeLimitExceeded { .. } => "too large",
    }
}

const MAX_LETTERS_LEN: usize = 36;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = SolveConfig {
        letter_accounting: if cli.shared_letters {
            LetterAccounting::Shared
        } else {
            LetterAccounting::PerWord
        },
        ..SolveConfig::default()
    };

    // Load the dictionary once. This I/O is *not* included in per-case timing.
    eprintln!("Loading dictionary from: {}", cli.dictionary);
    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary)?;
    let load_secs = t_load.elapsed().as_secs_f64();
    eprintln!("Loaded {} words in {:.3}s", dictionary.len(), load_secs);

    let cases = get_cases();
    let mut summary: Vec<(String, f64, &'static str)> = Vec::with_capacity(cases.len());

    for (idx, letters) in cases.iter().enumerate() {
        eprintln!("\n[{:02}] {}", idx + 1, letters);

        if let Err(e) = solver::generate_square_with(letters, &dictionary, &config) {
            eprintln!("  ✗ Warm-up failed: {e}");
            continue;
        }

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_outcome = None;

        for rep in 0..cli.num_repeats {
            let t_solve = Instant::now();
            let outcome = match solver::generate_square_with(black_box(letters), &dictionary, &config) {
                Ok(outcome) => outcome,
                Err(e) => {
                    eprintln!("  ✗ Run {}/{} failed: {}", rep + 1, cli.num_repeats, e);
                    continue;
                }
            };
            let solve_secs = t_solve.elapsed().as_secs_f64();

            times.push(solve_secs);
            eprintln!(
                "  run {:>2}/{:>2}: {:.3}s ({})",
                rep + 1,
                cli.num_repeats,
                solve_secs,
                outcome_label(&outcome)
            );
            last_outcome = Some(outcome);
        }

        let med = median(times);
        let label = last_outcome.as_ref().map_or("failed", outcome_label);

        if cli.print_squares {
            if let Some(SquareOutcome::Found(square)) = &last_outcome {
                println!("{square}\n");
            }
        }

        eprintln!(
            "  → median {:.3}s over {} {}; last outcome: {}",
            med,
            cli.num_repeats,
            pluralizer(cli.num_repeats, "run".into(), None),
            label
        );

        summary.push((letters.to_string(), med, label));
    }

    // Compact summary at the end for a quick scan across all cases.
    eprintln!("\n==== Summary ====");
    eprintln!("{:<MAX_LETTERS_LEN$} | {:>10} | {:>8}", "letters", "median (s)", "outcome");
    eprintln!("{:-<MAX_LETTERS_LEN$}-+-{:-<10}-+-{:-<8}", "", "", "");
    for (letters, med, label) in &summary {
        let display = if letters.chars().count() > MAX_LETTERS_LEN {
            // "- 1" for the "…"
            format!("{}…", letters.chars().take(MAX_LETTERS_LEN - 1).collect::<String>())
        } else {
            letters.clone()
        };
        eprintln!("{display:<MAX_LETTERS_LEN$} | {med:>10.3} | {label:>8}");
    }

    Ok(())
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralizer() {
        assert_eq!(pluralizer(0, "square".into(), None), "squares");
        assert_eq!(pluralizer(1, "square".into(), None), "square");
        assert_eq!(pluralizer(2, "matrix".into(), Some("matrices".into())), "matrices");
        assert_eq!(pluralizer(1, "matrix".into(), Some("matrices".into())), "matrix");
    }

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_cases_have_square_lengths() {
        for letters in get_cases() {
            let n = letters.chars().count();
            let size = (1..=n).find(|s| s * s >= n).unwrap_or(0);
            assert_eq!(size * size, n, "{letters} is not a perfect square length");
        }
    }
}
