//! Candidate filtering: which dictionary words may appear in a square built from
//! the given letters.

use crate::dictionary::Dictionary;
use crate::letters::LetterMultiset;

/// The words of one target length that can each be spelled from the input letters.
///
/// Candidates keep dictionary order (alphabetical within a length), which lets
/// [`with_prefix`](Self::with_prefix) hand back a contiguous slice.
///
/// Formability is checked per word. Two candidates may jointly need more of a
/// letter than the input holds; nothing here checks that.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet<'d> {
    size: usize,
    words: Vec<&'d str>,
}

impl<'d> CandidateSet<'d> {
    /// Every word of exactly `size` characters that `letters` can spell on its own.
    #[must_use]
    pub fn filter(dictionary: &'d Dictionary, letters: &LetterMultiset, size: usize) -> Self {
        let words = dictionary
            .words_of_length(size)
            .iter()
            .map(String::as_str)
            .filter(|word| letters.can_form(word))
            .collect();

        Self { size, words }
    }

    /// Word length shared by every candidate.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn words(&self) -> &[&'d str] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Candidates that start with `prefix`, in candidate order.
    ///
    /// Same result as scanning every candidate and keeping those with the prefix,
    /// since sorted words sharing a prefix sit next to each other.
    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> &[&'d str] {
        let start = self.words.partition_point(|w| *w < prefix);
        let len = self.words[start..].partition_point(|w| w.starts_with(prefix));
        &self.words[start..start + len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["card", "area", "rear", "dart", "darts", "cat", "zzzz", "eeee"])
    }

    #[test]
    fn test_filter_keeps_length_and_formable_words() {
        let dictionary = dictionary();
        let letters = LetterMultiset::from_letters("cardareareardart");
        let candidates = CandidateSet::filter(&dictionary, &letters, 4);

        assert_eq!(candidates.size(), 4);
        assert_eq!(candidates.words(), ["area", "card", "dart", "rear"]);
    }

    #[test]
    fn test_filter_rejects_words_needing_too_many_of_a_letter() {
        let dictionary = dictionary();
        // only three a's available
        let letters = LetterMultiset::from_letters("aaab");
        let candidates = CandidateSet::filter(&dictionary, &letters, 4);

        assert!(candidates.is_empty());
    }

    #[test]
    fn test_filter_checks_each_word_independently() {
        let dictionary = Dictionary::from_words(["no", "on"]);
        // one 'n' is enough for each word on its own
        let letters = LetterMultiset::from_letters("nooo");
        let candidates = CandidateSet::filter(&dictionary, &letters, 2);

        assert_eq!(candidates.words(), ["no", "on"]);
    }

    #[test]
    fn test_filter_with_no_words_of_length() {
        let dictionary = dictionary();
        let letters = LetterMultiset::from_letters("abcdefghi");
        let candidates = CandidateSet::filter(&dictionary, &letters, 3);

        assert!(candidates.is_empty());
        assert_eq!(candidates.len(), 0);
    }

    #[test]
    fn test_with_prefix() {
        let dictionary = Dictionary::from_words(["area", "aria", "card", "care", "cart", "dart", "rear"]);
        let letters = LetterMultiset::from_letters("aaaaccddeeiirrrrtt");
        let candidates = CandidateSet::filter(&dictionary, &letters, 4);

        assert_eq!(candidates.with_prefix(""), candidates.words());
        assert_eq!(candidates.with_prefix("car"), ["card", "care", "cart"]);
        assert_eq!(candidates.with_prefix("ar"), ["area", "aria"]);
        assert_eq!(candidates.with_prefix("dart"), ["dart"]);
        assert!(candidates.with_prefix("b").is_empty());
        assert!(candidates.with_prefix("zz").is_empty());
    }

    #[test]
    fn test_with_prefix_matches_linear_scan() {
        let dictionary = Dictionary::from_words(["area", "aria", "card", "care", "cart", "dart", "rear"]);
        let letters = LetterMultiset::from_letters("aaaaccddeeiirrrrtt");
        let candidates = CandidateSet::filter(&dictionary, &letters, 4);

        for prefix in ["", "a", "ar", "c", "ca", "cart", "d", "r", "x"] {
            let scanned: Vec<&str> = candidates.words().iter().copied().filter(|w| w.starts_with(prefix)).collect();
            assert_eq!(candidates.with_prefix(prefix), scanned.as_slice(), "prefix {prefix:?}");
        }
    }
}
