//! Generate error code documentation from the error enums themselves.
//!
//! Codes, descriptions, details and help text come straight from the
//! `code()`, `description()`, `details()` and `help()` methods of
//! `InputError`, `DictionaryError` and `SolverError`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;
use std::io;

use wordsquare::errors::{DictionaryError, InputError};
use wordsquare::solver::SolverError;

/// Append documentation for every error in `$errors` to `$out`.
/// Each error type must have `code()`, `description()`, `details()`, `help()` and `display_detailed()`.
macro_rules! generate_error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            writeln!($out, "### {}: {}\n", error.code(), error.description())?;
            writeln!($out, "**Details:** {}\n", error.details())?;

            if let Some(help_text) = error.help() {
                writeln!($out, "**How to fix:**")?;
                writeln!($out, "```\n{help_text}\n```\n")?;
            }

            writeln!($out, "**Example error message:**")?;
            writeln!($out, "```\n{error}\n```\n")?;

            writeln!($out, "**Detailed format:**")?;
            writeln!($out, "```\n{}\n```\n", error.display_detailed())?;

            writeln!($out, "---\n")?;
        }
    };
}

fn all_input_error_variants() -> Vec<InputError> {
    vec![
        InputError::EmptyInput,
        InputError::NonAlphabetic { invalid_char: '3', position: 2 },
        InputError::NotPerfectSquare { len: 10 },
    ]
}

fn all_dictionary_error_variants() -> Vec<DictionaryError> {
    vec![
        DictionaryError::Unavailable {
            path: "data/words.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
        DictionaryError::Empty,
    ]
}

fn all_solver_error_variants() -> Vec<SolverError> {
    vec![
        SolverError::InvalidInput(InputError::NotPerfectSquare { len: 10 }),
        SolverError::InvariantViolation {
            context: "row 'ca' is shorter than column index 2".to_string(),
        },
    ]
}

/// Render the whole error reference as Markdown.
fn render_error_docs() -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "# Error Code Reference\n")?;
    writeln!(out, "**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n")?;

    writeln!(out, "## Table of Contents\n")?;
    writeln!(out, "- [Input Errors (E001–E003)](#input-errors)")?;
    writeln!(out, "- [Dictionary Errors (D001–D002)](#dictionary-errors)")?;
    writeln!(out, "- [Solver Errors (S001–S002)](#solver-errors)\n")?;

    writeln!(out, "## Input Errors\n")?;
    writeln!(out, "The supplied letters cannot form a square. The CLI exits with code 1.\n")?;
    generate_error_docs!(out, all_input_error_variants());

    writeln!(out, "## Dictionary Errors\n")?;
    writeln!(out, "The word list could not be loaded. These are fatal.\n")?;
    generate_error_docs!(out, all_dictionary_error_variants());

    writeln!(out, "## Solver Errors\n")?;
    writeln!(out, "Top-level errors from the solver. These wrap input errors or report an internal failure.\n")?;
    generate_error_docs!(out, all_solver_error_variants());

    writeln!(out, "## Error Display Formats\n")?;
    writeln!(out, "### Simple Format")?;
    writeln!(out, "```\nError: <message>\n```\n")?;
    writeln!(out, "### Detailed Format (via `display_detailed()`)")?;
    writeln!(out, "```\n<message> (<code>)\n<help text if available>\n```")?;

    Ok(out)
}

fn main() -> Result<(), std::fmt::Error> {
    print!("{}", render_error_docs()?);
    Ok(())
}
