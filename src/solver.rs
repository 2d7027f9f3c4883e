//! The request-level entry points: validate letters, filter candidates, search.
//!
//! # Error Handling
//!
//! Expected results are reported as a [`SquareOutcome`], never as errors:
//! a square, no square, invalid input, an exhausted search budget, or a square
//! larger than the configured size limit.
//! [`SolverError`] is reserved for failures that callers must treat differently:
//!
//! - S001: `InvalidInput` (Input rejected before searching (wraps [`InputError`]))
//! - S002: `InvariantViolation` (Internal error during square construction)
//!
//! Each error has a `code()`, optional `help()`, and `display_detailed()` method.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use wordsquare::dictionary::Dictionary;
//! use wordsquare::solver::{self, SquareOutcome};
//!
//! let dictionary = Dictionary::from_words(["card", "area", "rear", "dart"]);
//! match solver::generate_square("cardareareardart", &dictionary)? {
//!     SquareOutcome::Found(square) => println!("{square}"),
//!     other => println!("no square: {other:?}"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Several Squares
//!
//! ```
//! use wordsquare::dictionary::Dictionary;
//! use wordsquare::solver::{self, SolveConfig, SolveStatus};
//!
//! let dictionary = Dictionary::from_words(["no", "on"]);
//! let result = solver::find_squares("noon", &dictionary, 10, &SolveConfig::default())?;
//!
//! assert_eq!(result.squares.len(), 2);
//! assert_eq!(result.status, SolveStatus::CandidatesExhausted);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use log::{debug, info, warn};

use crate::candidates::CandidateSet;
use crate::dictionary::Dictionary;
use crate::errors::InputError;
use crate::letters::LetterMultiset;
use crate::search::{SearchBudget, SearchEngine};
use crate::square::Square;

// The amount of time (in seconds) we allow one search to run
const TIME_BUDGET: u64 = 30;
// Largest square we attempt by default
const DEFAULT_MAX_SQUARE_SIZE: usize = 16;

/// Status of a search run.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveStatus {
    /// Every placement was tried without reaching the requested number of squares.
    CandidatesExhausted,

    /// Search stopped early because the requested number of squares was found.
    FoundEnough,

    /// Search stopped because the time budget expired. Contains the elapsed time.
    TimedOut { elapsed: Duration },

    /// Search stopped because the node budget was used up.
    NodeLimitReached { nodes_visited: u64 },

    /// No search was run: the letters are valid but the square is larger than
    /// `SolveConfig::max_square_size`.
    SizeLimitExceeded { size: usize, max: usize },
}

/// How letters are accounted for while building a square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LetterAccounting {
    /// Each word only has to be spellable from the input letters on its own.
    /// Different rows may reuse the same input letter.
    #[default]
    PerWord,

    /// All rows together draw from one pool of the input letters.
    Shared,
}

/// Per-call search configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveConfig {
    /// Wall-clock limit for the search.
    pub time_budget: Duration,
    /// Limit on search nodes visited; `None` means unlimited.
    pub max_nodes: Option<u64>,
    /// Larger squares are not searched for (see [`SquareOutcome::SizeLimitExceeded`]).
    pub max_square_size: usize,
    pub letter_accounting: LetterAccounting,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_secs(TIME_BUDGET),
            max_nodes: None,
            max_square_size: DEFAULT_MAX_SQUARE_SIZE,
            letter_accounting: LetterAccounting::default(),
        }
    }
}

/// Result of a single-square request.
#[derive(Debug, Clone, PartialEq)]
pub enum SquareOutcome {
    /// The first square in search order.
    Found(Square),
    /// The letters are valid but no square can be built from the candidates.
    NoSolution,
    /// The letters were rejected before searching.
    InvalidInput(InputError),
    /// The search budget ran out before a square was found.
    BudgetExhausted { elapsed: Duration, nodes_visited: u64 },
    /// The letters are valid, but the square is larger than the configured limit.
    SizeLimitExceeded { size: usize, max: usize },
}

impl SquareOutcome {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, SquareOutcome::Found(_))
    }

    #[must_use]
    pub fn square(&self) -> Option<&Square> {
        match self {
            SquareOutcome::Found(square) => Some(square),
            _ => None,
        }
    }

    /// Rows of the square, top to bottom, or an empty vector for every other outcome.
    #[must_use]
    pub fn into_rows(self) -> Vec<String> {
        match self {
            SquareOutcome::Found(square) => square.into_rows(),
            _ => Vec::new(),
        }
    }
}

/// Successful multi-square run (even if it stopped early).
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Squares in search order (may be fewer than requested).
    pub squares: Vec<Square>,
    /// Status indicating whether we finished or ran out of budget.
    pub status: SolveStatus,
    /// Number of words that passed the candidate filter.
    pub num_candidates: usize,
    pub nodes_visited: u64,
    pub elapsed: Duration,
}

impl IntoIterator for SolveResult {
    type Item = Square;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.into_iter()
    }
}

/// Unified error type for the solver pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The letters were rejected before searching.
    ///
    /// [`generate_square`] reports this as [`SquareOutcome::InvalidInput`];
    /// [`find_squares`] returns it as an error.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// A row placed during the search did not have the shape the candidate
    /// filter guarantees. Indicates a bug, not a property of the input.
    #[error("invariant violation: {context}")]
    InvariantViolation { context: String },
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::InvalidInput(_) => "S001",
            SolverError::InvariantViolation { .. } => "S002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::InvalidInput(_) => "Input rejected before searching",
            SolverError::InvariantViolation { .. } => "Internal error during square construction",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::InvalidInput(_) => "The letters could not be searched. This wraps an underlying InputError (see Input Errors section for specific error codes).",
            SolverError::InvariantViolation { .. } => "A partially built square contained a row of the wrong length. Candidates are filtered to the square size, so this is a bug in the solver.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::InvalidInput(_) => None, // InputError has its own help
            SolverError::InvariantViolation { .. } => Some("This is an internal error. Please report it with the letters that triggered it."),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::InvalidInput(ie) => {
                // delegate to InputError's detailed display
                format!("{}\n  caused by: {}", self.code(), ie.display_detailed())
            }
            SolverError::InvariantViolation { .. } => {
                crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
            }
        }
    }
}

/// `Some(r)` if `len == r * r`.
fn exact_square_root(len: usize) -> Option<usize> {
    let mut root = (len as f64).sqrt() as usize;
    // correct any floating-point rounding
    while root > 0 && root * root > len {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= len {
        root += 1;
    }
    (root * root == len).then_some(root)
}

/// Check the shape of a letter string and return the side length N of its square.
///
/// # Errors
///
/// Returns an [`InputError`] if the string is empty, contains a non-letter, or has a
/// length that is not a perfect square.
pub fn validate_letters(input: &str) -> Result<usize, InputError> {
    if input.is_empty() {
        return Err(InputError::EmptyInput);
    }

    if let Some((position, invalid_char)) = input.chars().enumerate().find(|(_, c)| !c.is_alphabetic()) {
        return Err(InputError::NonAlphabetic { invalid_char, position });
    }

    let len = input.chars().count();
    exact_square_root(len).ok_or(InputError::NotPerfectSquare { len })
}

/// Find up to `num_squares_requested` word squares, in search order.
///
/// This orchestrates validating the letters, counting them into a
/// [`LetterMultiset`], filtering the dictionary to formable words of the right
/// length, and running the backtracking search within the configured budget.
///
/// # Errors
///
/// Returns [`SolverError::InvalidInput`] if the letters fail [`validate_letters`],
/// and [`SolverError::InvariantViolation`] if the search hits an internal
/// inconsistency.
pub fn find_squares(
    letters: &str,
    dictionary: &Dictionary,
    num_squares_requested: usize,
    config: &SolveConfig,
) -> Result<SolveResult, SolverError> {
    // 1. Check the input shape and derive N
    let size = validate_letters(letters)?;

    if size > config.max_square_size {
        warn!("Square size {size} exceeds the limit of {}; not searching", config.max_square_size);
        return Ok(SolveResult {
            squares: Vec::new(),
            status: SolveStatus::SizeLimitExceeded { size, max: config.max_square_size },
            num_candidates: 0,
            nodes_visited: 0,
            elapsed: Duration::ZERO,
        });
    }

    // 2. Count the letters
    let multiset = LetterMultiset::from_letters(letters);
    debug!("Letters: {multiset}");

    // 3. Keep the dictionary words of length N that the letters can spell
    let candidates = CandidateSet::filter(dictionary, &multiset, size);
    info!("Filtered {} candidate words of length {size}", candidates.len());
    debug!("Candidates: {:?}", candidates.words());

    if num_squares_requested == 0 {
        return Ok(SolveResult {
            squares: Vec::new(),
            status: SolveStatus::FoundEnough,
            num_candidates: candidates.len(),
            nodes_visited: 0,
            elapsed: Duration::ZERO,
        });
    }

    // 4. Search
    let budget = SearchBudget::new(config.time_budget, config.max_nodes);
    let mut engine = SearchEngine::new(&candidates, budget);
    if config.letter_accounting == LetterAccounting::Shared {
        engine = engine.with_letter_pool(multiset);
    }
    let outcome = engine.run(num_squares_requested)?;

    Ok(SolveResult {
        squares: outcome.squares,
        status: outcome.status,
        num_candidates: candidates.len(),
        nodes_visited: outcome.nodes_visited,
        elapsed: outcome.elapsed,
    })
}

/// Build the first word square (in search order) from `letters`, with default settings.
///
/// # Errors
///
/// See [`generate_square_with`].
pub fn generate_square(letters: &str, dictionary: &Dictionary) -> Result<SquareOutcome, SolverError> {
    generate_square_with(letters, dictionary, &SolveConfig::default())
}

/// Build the first word square (in search order) from `letters`.
///
/// # Errors
///
/// Only internal failures ([`SolverError::InvariantViolation`]) are errors; invalid
/// input, no square, budget exhaustion and the size limit are all [`SquareOutcome`]s.
pub fn generate_square_with(
    letters: &str,
    dictionary: &Dictionary,
    config: &SolveConfig,
) -> Result<SquareOutcome, SolverError> {
    info!("Starting word square generation with input: {letters}");

    let result = match find_squares(letters, dictionary, 1, config) {
        Ok(result) => result,
        Err(SolverError::InvalidInput(e)) => {
            warn!("Invalid input '{letters}': {e}");
            return Ok(SquareOutcome::InvalidInput(e));
        }
        Err(e) => return Err(e),
    };

    let outcome = match (result.squares.into_iter().next(), result.status) {
        (Some(square), _) => {
            info!("Valid word square found: {:?}", square.rows());
            SquareOutcome::Found(square)
        }
        (None, SolveStatus::TimedOut { .. } | SolveStatus::NodeLimitReached { .. }) => {
            warn!(
                "Search budget exhausted after {:.3}s and {} nodes",
                result.elapsed.as_secs_f64(),
                result.nodes_visited
            );
            SquareOutcome::BudgetExhausted {
                elapsed: result.elapsed,
                nodes_visited: result.nodes_visited,
            }
        }
        (None, SolveStatus::SizeLimitExceeded { size, max }) => SquareOutcome::SizeLimitExceeded { size, max },
        (None, _) => {
            info!("No valid word square found");
            SquareOutcome::NoSolution
        }
    };

    Ok(outcome)
}
