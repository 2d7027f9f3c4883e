//! Letter multisets: how many of each letter the caller supplied.

use std::collections::HashMap;
use std::fmt;

/// Mapping from a (lowercase) letter to the number of times it is available.
///
/// Built once per request from the input letters. Formability checks work on a
/// private copy; the shared-pool search mode uses [`LetterMultiset::try_take`] and
/// [`LetterMultiset::restore`] on a single mutable pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterMultiset {
    counts: HashMap<char, usize>,
}

impl LetterMultiset {
    /// Count the letters of `letters` after lowercasing them.
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        let mut counts = HashMap::new();
        for c in letters.chars().flat_map(char::to_lowercase) {
            *counts.entry(c).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many copies of `c` are available.
    #[must_use]
    pub fn count(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Total number of letters in the multiset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|&n| n == 0)
    }

    /// Can `word` be spelled using these letters?
    ///
    /// The word is scanned left to right against a private copy of the counts,
    /// consuming one letter per character; the first exhausted letter rejects it.
    /// `self` is left untouched.
    #[must_use]
    pub fn can_form(&self, word: &str) -> bool {
        let mut remaining = self.counts.clone();
        word.chars().all(|c| match remaining.get_mut(&c) {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        })
    }

    /// Remove the letters of `word` from the pool.
    ///
    /// Returns `false` and leaves the pool unchanged if some letter would run out.
    pub fn try_take(&mut self, word: &str) -> bool {
        if !self.can_form(word) {
            return false;
        }
        for c in word.chars() {
            if let Some(n) = self.counts.get_mut(&c) {
                *n -= 1;
            }
        }
        true
    }

    /// Give back the letters of a word previously taken with [`try_take`](Self::try_take).
    pub fn restore(&mut self, word: &str) {
        for c in word.chars() {
            *self.counts.entry(c).or_insert(0) += 1;
        }
    }
}

impl fmt::Display for LetterMultiset {
    /// Letters in alphabetical order with their counts, e.g. `a×2 c×1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.counts.iter().filter(|(_, n)| **n > 0).collect();
        entries.sort();
        let parts: Vec<String> = entries.iter().map(|(c, n)| format!("{c}×{n}")).collect();
        write!(f, "{}", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_lowercased_letters() {
        let letters = LetterMultiset::from_letters("AaBc");
        assert_eq!(letters.count('a'), 2);
        assert_eq!(letters.count('b'), 1);
        assert_eq!(letters.count('c'), 1);
        assert_eq!(letters.count('z'), 0);
        assert_eq!(letters.len(), 4);
    }

    #[test]
    fn test_empty() {
        let letters = LetterMultiset::from_letters("");
        assert!(letters.is_empty());
        assert_eq!(letters.len(), 0);
        assert!(letters.can_form(""));
        assert!(!letters.can_form("a"));
    }

    #[test]
    fn test_can_form_respects_counts() {
        let letters = LetterMultiset::from_letters("aabc");
        assert!(letters.can_form("cab"));
        assert!(letters.can_form("aa"));
        assert!(!letters.can_form("aaa"));
        assert!(!letters.can_form("abd"));
    }

    #[test]
    fn test_can_form_does_not_consume() {
        let letters = LetterMultiset::from_letters("ab");
        assert!(letters.can_form("ab"));
        assert!(letters.can_form("ba"));
        assert_eq!(letters.len(), 2);
    }

    #[test]
    fn test_take_and_restore() {
        let mut pool = LetterMultiset::from_letters("noon");
        assert!(pool.try_take("no"));
        assert_eq!(pool.count('n'), 1);
        assert_eq!(pool.count('o'), 1);
        assert!(pool.try_take("on"));
        assert!(pool.is_empty());
        assert!(!pool.try_take("no"));

        pool.restore("on");
        pool.restore("no");
        assert_eq!(pool, LetterMultiset::from_letters("noon"));
    }

    #[test]
    fn test_failed_take_leaves_pool_unchanged() {
        let mut pool = LetterMultiset::from_letters("nooo");
        assert!(!pool.try_take("nn"));
        assert_eq!(pool, LetterMultiset::from_letters("nooo"));
    }

    #[test]
    fn test_display_is_sorted() {
        let letters = LetterMultiset::from_letters("caba");
        assert_eq!(letters.to_string(), "a×2 b×1 c×1");
    }
}
