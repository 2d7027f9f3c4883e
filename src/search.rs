//! Depth-first, prefix-driven construction of word squares.
//!
//! Rows are placed one at a time. Before placing row `d`, the characters already
//! fixed in column `d` by rows `0..d` form the prefix the new word must start with,
//! so every partial square is symmetric so far. At full depth the square is run
//! through [`is_word_square`] and recorded.
//!
//! The search stops when it has found the requested number of squares, when the
//! candidates are exhausted, or when the [`SearchBudget`] runs out.

use std::time::Duration;

use instant::Instant;
use log::{debug, trace};

use crate::candidates::CandidateSet;
use crate::letters::LetterMultiset;
use crate::solver::{SolveStatus, SolverError};
use crate::square::{is_word_square, Square};

/// Limits on how much work one search may do.
///
/// ```ignore
///  let mut budget = SearchBudget::new(Duration::from_secs(30), Some(1_000_000));
///  while !budget.expired() {
///    budget.record_visit();
///    // do some work
///  }
/// ```
#[derive(Debug)]
pub struct SearchBudget {
    start: Instant,          // when the budget began
    time_limit: Duration,    // maximum allowed elapsed time
    max_nodes: Option<u64>,  // maximum number of node visits, if any
    nodes_visited: u64,
}

impl SearchBudget {
    #[must_use]
    pub fn new(time_limit: Duration, max_nodes: Option<u64>) -> Self {
        Self { start: Instant::now(), time_limit, max_nodes, nodes_visited: 0 }
    }

    /// How long this budget has been running.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    #[must_use]
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    fn record_visit(&mut self) {
        self.nodes_visited += 1;
    }

    fn nodes_exceeded(&self) -> bool {
        self.max_nodes.is_some_and(|max| self.nodes_visited > max)
    }

    /// Returns true if either limit has been passed.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.nodes_exceeded() || self.start.elapsed() >= self.time_limit
    }

    /// The status to report for an expired budget.
    fn stop_status(&self) -> SolveStatus {
        if self.nodes_exceeded() {
            SolveStatus::NodeLimitReached { nodes_visited: self.nodes_visited }
        } else {
            SolveStatus::TimedOut { elapsed: self.elapsed() }
        }
    }
}

/// What a finished search produced.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Squares in the order they were found.
    pub squares: Vec<Square>,
    pub status: SolveStatus,
    pub nodes_visited: u64,
    pub elapsed: Duration,
}

/// Backtracking search over one candidate set.
///
/// `partial` is the stack of placed rows. With a letter pool attached, each
/// placement also takes the word's letters from the pool and backtracking gives
/// them back, so the whole square fits the input letters.
pub struct SearchEngine<'c, 'd> {
    candidates: &'c CandidateSet<'d>,
    letter_pool: Option<LetterMultiset>,
    budget: SearchBudget,
    partial: Vec<&'d str>,
    found: Vec<Square>,
    num_squares_requested: usize,
    stopped: Option<SolveStatus>,
}

impl<'c, 'd> SearchEngine<'c, 'd> {
    #[must_use]
    pub fn new(candidates: &'c CandidateSet<'d>, budget: SearchBudget) -> Self {
        Self {
            candidates,
            letter_pool: None,
            budget,
            partial: Vec::with_capacity(candidates.size()),
            found: Vec::new(),
            num_squares_requested: 1,
            stopped: None,
        }
    }

    /// Draw every placed word from one shared pool instead of checking words separately.
    #[must_use]
    pub fn with_letter_pool(mut self, pool: LetterMultiset) -> Self {
        self.letter_pool = Some(pool);
        self
    }

    /// Search until `num_squares_requested` squares are found or the search ends.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvariantViolation`] if a placed row is shorter than
    /// the square (the candidate set guarantees this cannot happen).
    pub fn run(mut self, num_squares_requested: usize) -> Result<SearchOutcome, SolverError> {
        debug_assert!(num_squares_requested > 0, "num_squares_requested must be positive");
        self.num_squares_requested = num_squares_requested;

        self.extend()?;

        let status = if self.found.len() >= self.num_squares_requested {
            SolveStatus::FoundEnough
        } else if let Some(status) = self.stopped.take() {
            status
        } else {
            SolveStatus::CandidatesExhausted
        };

        debug!(
            "Search finished: {} square(s), {} node(s) visited, {:?}",
            self.found.len(),
            self.budget.nodes_visited(),
            status
        );

        Ok(SearchOutcome {
            squares: self.found,
            status,
            nodes_visited: self.budget.nodes_visited(),
            elapsed: self.budget.elapsed(),
        })
    }

    fn done(&self) -> bool {
        self.stopped.is_some() || self.found.len() >= self.num_squares_requested
    }

    /// Column `depth` of the rows placed so far.
    fn required_prefix(&self, depth: usize) -> Result<String, SolverError> {
        self.partial
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.chars().nth(depth).ok_or_else(|| SolverError::InvariantViolation {
                    context: format!("row {i} ('{row}') has no column {depth}"),
                })
            })
            .collect()
    }

    /// One node of the search: place a row at the current depth, or validate a full square.
    fn extend(&mut self) -> Result<(), SolverError> {
        self.budget.record_visit();
        if self.budget.expired() {
            self.stopped = Some(self.budget.stop_status());
            return Ok(());
        }

        let depth = self.partial.len();
        let size = self.candidates.size();

        if depth == size {
            if is_word_square(&self.partial) {
                if let Some(square) = Square::from_rows(&self.partial) {
                    debug!("Valid word square found: {:?}", self.partial);
                    self.found.push(square);
                }
            }
            return Ok(());
        }

        let prefix = self.required_prefix(depth)?;
        trace!("Depth {depth}: required prefix '{prefix}'");

        let candidates = self.candidates;
        for &word in candidates.with_prefix(&prefix) {
            if let Some(pool) = self.letter_pool.as_mut() {
                if !pool.try_take(word) {
                    continue;
                }
            }

            self.partial.push(word);
            let result = self.extend();
            self.partial.pop();

            if let Some(pool) = self.letter_pool.as_mut() {
                pool.restore(word);
            }

            result?;
            if self.done() {
                return Ok(());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    const GENEROUS: Duration = Duration::from_secs(60);

    fn run_search(words: &[&str], letters: &str, size: usize, requested: usize) -> SearchOutcome {
        let dictionary = Dictionary::from_words(words);
        let letters = LetterMultiset::from_letters(letters);
        let candidates = CandidateSet::filter(&dictionary, &letters, size);
        SearchEngine::new(&candidates, SearchBudget::new(GENEROUS, None))
            .run(requested)
            .unwrap()
    }

    fn rows(outcome: &SearchOutcome) -> Vec<Vec<String>> {
        outcome.squares.iter().map(|s| s.rows().to_vec()).collect()
    }

    #[test]
    fn test_finds_known_square() {
        let outcome = run_search(&["card", "area", "rear", "dart"], "cardareareardart", 4, 1);
        assert_eq!(rows(&outcome), vec![vec!["card", "area", "rear", "dart"]]);
        assert_eq!(outcome.status, SolveStatus::FoundEnough);
    }

    #[test]
    fn test_first_square_in_candidate_order() {
        let outcome = run_search(&["no", "on"], "noon", 2, 1);
        assert_eq!(rows(&outcome), vec![vec!["no", "on"]]);
    }

    #[test]
    fn test_finds_all_squares_in_order() {
        let outcome = run_search(&["no", "on"], "noon", 2, 10);
        assert_eq!(rows(&outcome), vec![vec!["no", "on"], vec!["on", "no"]]);
        assert_eq!(outcome.status, SolveStatus::CandidatesExhausted);
    }

    #[test]
    fn test_no_square_from_asymmetric_words() {
        let outcome = run_search(&["area", "rope", "aces", "reds"], "arearopeacesreds", 4, 1);
        assert!(outcome.squares.is_empty());
        assert_eq!(outcome.status, SolveStatus::CandidatesExhausted);
    }

    #[test]
    fn test_no_candidates() {
        let outcome = run_search(&["cat", "dog"], "abcd", 2, 1);
        assert!(outcome.squares.is_empty());
        assert_eq!(outcome.status, SolveStatus::CandidatesExhausted);
        // only the root node
        assert_eq!(outcome.nodes_visited, 1);
    }

    #[test]
    fn test_single_letter_square() {
        let outcome = run_search(&["a", "i"], "a", 1, 1);
        assert_eq!(rows(&outcome), vec![vec!["a"]]);
    }

    #[test]
    fn test_per_word_letters_allow_overuse() {
        // "no" + "on" needs two n's; each word alone needs one
        let outcome = run_search(&["no", "on"], "nooo", 2, 1);
        assert_eq!(rows(&outcome), vec![vec!["no", "on"]]);
    }

    #[test]
    fn test_shared_pool_rejects_overuse() {
        let dictionary = Dictionary::from_words(["no", "on"]);
        let letters = LetterMultiset::from_letters("nooo");
        let candidates = CandidateSet::filter(&dictionary, &letters, 2);
        let outcome = SearchEngine::new(&candidates, SearchBudget::new(GENEROUS, None))
            .with_letter_pool(letters)
            .run(1)
            .unwrap();

        assert!(outcome.squares.is_empty());
        assert_eq!(outcome.status, SolveStatus::CandidatesExhausted);
    }

    #[test]
    fn test_shared_pool_accepts_exact_letters() {
        let dictionary = Dictionary::from_words(["card", "area", "rear", "dart"]);
        let letters = LetterMultiset::from_letters("cardareareardart");
        let candidates = CandidateSet::filter(&dictionary, &letters, 4);
        let outcome = SearchEngine::new(&candidates, SearchBudget::new(GENEROUS, None))
            .with_letter_pool(letters)
            .run(1)
            .unwrap();

        assert_eq!(rows(&outcome), vec![vec!["card", "area", "rear", "dart"]]);
    }

    #[test]
    fn test_node_budget_stops_search() {
        let dictionary = Dictionary::from_words(["card", "area", "rear", "dart"]);
        let letters = LetterMultiset::from_letters("cardareareardart");
        let candidates = CandidateSet::filter(&dictionary, &letters, 4);
        let outcome = SearchEngine::new(&candidates, SearchBudget::new(GENEROUS, Some(1)))
            .run(1)
            .unwrap();

        assert!(outcome.squares.is_empty());
        assert_eq!(outcome.status, SolveStatus::NodeLimitReached { nodes_visited: 2 });
    }

    #[test]
    fn test_zero_time_budget_stops_search() {
        let dictionary = Dictionary::from_words(["no", "on"]);
        let letters = LetterMultiset::from_letters("noon");
        let candidates = CandidateSet::filter(&dictionary, &letters, 2);
        let outcome = SearchEngine::new(&candidates, SearchBudget::new(Duration::ZERO, None))
            .run(1)
            .unwrap();

        assert!(outcome.squares.is_empty());
        assert!(matches!(outcome.status, SolveStatus::TimedOut { .. }));
    }

    #[test]
    fn test_search_is_deterministic() {
        let words = ["card", "area", "rear", "dart", "cart", "aria", "dare", "read"];
        let first = run_search(&words, "cardareareardart", 4, 5);
        let second = run_search(&words, "cardareareardart", 4, 5);
        assert_eq!(rows(&first), rows(&second));
        for square in &first.squares {
            assert!(is_word_square(square.rows()));
        }
    }
}
