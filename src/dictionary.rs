//! `dictionary` — Module to load and normalize the word collection searched for squares
//!
//! The dictionary is read once (either from a file, or from an in-memory string — the
//! latter is what WebAssembly builds use, since direct file I/O isn't allowed there)
//! and is immutable afterwards. Every search borrows it.
//!
//! The parsing logic:
//! - Each line holds one word. Anything after a `;` is ignored, so `word;score`
//!   lists load too.
//! - Words are trimmed and lowercased.
//! - Blank lines and words containing non-letter characters are skipped.
//! - The final list is deduplicated and sorted by length first, then alphabetically.
//!
//! The sort order matters: the square search tries candidates in dictionary order, so
//! a fixed order makes "the first square found" deterministic.

use std::cmp::Ordering;

use log::debug;

use crate::errors::DictionaryError;

/// A processed, ready-to-use word collection.
///
/// Words are lowercase, alphabetic, unique, and sorted by (length, alphabetical).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

/// Order used for the whole collection: character length, then alphabetical.
fn by_length_then_alpha(a: &str, b: &str) -> Ordering {
    match a.chars().count().cmp(&b.chars().count()) {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

/// Lowercase and trim one raw word; `None` if it is empty or not purely alphabetic.
fn normalize(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    if word.is_empty() || !word.chars().all(char::is_alphabetic) {
        None
    } else {
        Some(word)
    }
}

impl Dictionary {
    /// Build a dictionary from any collection of words.
    ///
    /// Unusable words are dropped silently (counted in the debug log). The result
    /// may be empty; use [`parse_from_str`](Self::parse_from_str) or
    /// [`load_from_path`](Self::load_from_path) when an empty collection is an error.
    pub fn from_words<I, S>(words: I) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skipped = 0usize;
        let mut words: Vec<String> = words
            .into_iter()
            .filter_map(|raw| {
                let word = normalize(raw.as_ref());
                if word.is_none() && !raw.as_ref().trim().is_empty() {
                    skipped += 1;
                }
                word
            })
            .collect();

        // dedup() only removes adjacent duplicates, so sort alphabetically first
        words.sort();
        words.dedup();
        words.sort_by(|a, b| by_length_then_alpha(a, b));

        if skipped > 0 {
            debug!("Skipped {skipped} dictionary entries with non-letter characters");
        }

        Dictionary { words }
    }

    /// Parse a dictionary from an in-memory string, one word per line.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Empty`] if no line holds a usable word.
    pub fn parse_from_str(contents: &str) -> Result<Dictionary, DictionaryError> {
        let dictionary = Self::from_words(
            contents
                .lines()
                .map(|line| line.split_once(';').map_or(line, |(word, _)| word)),
        );

        if dictionary.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(dictionary)
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Unavailable`] if the file cannot be read and
    /// [`DictionaryError::Empty`] if it holds no usable words.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Dictionary, DictionaryError> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|source| DictionaryError::Unavailable {
            path: path_ref.display().to_string(),
            source,
        })?;

        let dictionary = Self::parse_from_str(&data)?;
        log::info!("Dictionary loaded with {} words from '{}'", dictionary.len(), path_ref.display());

        Ok(dictionary)
    }

    /// All words, sorted by (length, alphabetical).
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The contiguous, alphabetically sorted run of words with exactly `len` characters.
    #[must_use]
    pub fn words_of_length(&self, len: usize) -> &[String] {
        let start = self.words.partition_point(|w| w.chars().count() < len);
        let end = start + self.words[start..].partition_point(|w| w.chars().count() == len);
        &self.words[start..end]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
