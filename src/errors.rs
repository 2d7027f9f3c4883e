//! Error types for input validation and dictionary loading, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - E001: `EmptyInput` (No letters supplied)
//! - E002: `NonAlphabetic` (Input contains a non-letter character)
//! - E003: `NotPerfectSquare` (Letter count is not a perfect square)
//! - D001: `Unavailable` (Dictionary source could not be read)
//! - D002: `Empty` (Dictionary source contained no usable words)
//!
//! # Examples
//!
//! ```
//! use wordsquare::errors::InputError;
//!
//! let err = InputError::NotPerfectSquare { len: 3 };
//! assert_eq!(err.code(), "E003");
//! println!("{}", err.display_detailed());
//! ```

use std::io;

/// Reasons a letter string cannot be turned into a square-search request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("No letters supplied")]
    EmptyInput,

    #[error("Invalid character '{invalid_char}' at position {position} (only letters allowed)")]
    NonAlphabetic { invalid_char: char, position: usize },

    #[error("Invalid input length: {len} letters is not a perfect square")]
    NotPerfectSquare { len: usize },
}

impl InputError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            InputError::EmptyInput => "E001",
            InputError::NonAlphabetic { .. } => "E002",
            InputError::NotPerfectSquare { .. } => "E003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            InputError::EmptyInput => "No letters supplied",
            InputError::NonAlphabetic { .. } => "Input contains a non-letter character",
            InputError::NotPerfectSquare { .. } => "Letter count is not a perfect square",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            InputError::EmptyInput => "The letter string was empty, so there is no square to build.",
            InputError::NonAlphabetic { .. } => "Every character of the input must be a letter. Digits, spaces and punctuation are rejected before any search starts.",
            InputError::NotPerfectSquare { .. } => "An N×N square uses exactly N² letters, so the input length must be 1, 4, 9, 16, 25, ...",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            InputError::EmptyInput => Some("Example: 'cardareareardart' (16 letters for a 4×4 square)"),
            InputError::NonAlphabetic { .. } => Some("Remove digits, spaces and punctuation from the letters"),
            InputError::NotPerfectSquare { .. } => Some("Supply 4, 9, 16 or 25 letters for a 2×2, 3×3, 4×4 or 5×5 square"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Failure to produce a usable word collection.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary from '{path}': {source}")]
    Unavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("dictionary contains no usable words")]
    Empty,
}

impl DictionaryError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            DictionaryError::Unavailable { .. } => "D001",
            DictionaryError::Empty => "D002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            DictionaryError::Unavailable { .. } => "Dictionary source could not be read",
            DictionaryError::Empty => "Dictionary source contained no usable words",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            DictionaryError::Unavailable { .. } => "The word list is loaded once at startup. If it cannot be read, no request can be answered, so startup fails instead of reporting 'no square' forever.",
            DictionaryError::Empty => "Every line of the word list was blank or contained non-letter characters, leaving nothing to search.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            DictionaryError::Unavailable { .. } => Some("Check the path passed with --dictionary and the file permissions"),
            DictionaryError::Empty => Some("The dictionary file should list one word per line, e.g. 'card'"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_input_errors() -> Vec<InputError> {
        vec![
            InputError::EmptyInput,
            InputError::NonAlphabetic { invalid_char: '3', position: 2 },
            InputError::NotPerfectSquare { len: 3 },
        ]
    }

    fn all_dictionary_errors() -> Vec<DictionaryError> {
        vec![
            DictionaryError::Unavailable {
                path: "missing.txt".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            },
            DictionaryError::Empty,
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = InputError::NotPerfectSquare { len: 3 };
        assert_eq!(err.code(), "E003");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("E003"));
        assert!(detailed.contains("perfect square"));
    }

    #[test]
    fn test_non_alphabetic_message_names_the_character() {
        let err = InputError::NonAlphabetic { invalid_char: '3', position: 2 };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains("position 2"));
    }

    /// Test that all error variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();

        for code in all_input_errors().iter().map(InputError::code)
            .chain(all_dictionary_errors().iter().map(DictionaryError::code)) {
            assert!(codes.insert(code), "Duplicate error code found: {code}");
        }

        assert_eq!(codes.len(), 5);
    }

    /// Test that all error codes follow the format X0XX
    #[test]
    fn test_error_code_format() {
        for err in all_input_errors() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{code}' should be 4 characters (E0XX)");
            assert!(code.starts_with("E0"));
            assert!(code[1..].parse::<u16>().is_ok());
        }
        for err in all_dictionary_errors() {
            let code = err.code();
            assert!(code.starts_with("D0"));
            assert!(code[1..].parse::<u16>().is_ok());
        }
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        for err in all_input_errors() {
            let detailed = err.display_detailed();
            assert!(detailed.contains(err.code()));
            assert!(detailed.contains(&err.to_string()));
            if let Some(help) = err.help() {
                assert!(detailed.contains(help));
            }
        }
    }

    #[test]
    fn test_unavailable_dictionary_keeps_source() {
        let err = DictionaryError::Unavailable {
            path: "missing.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("missing.txt"));
        assert!(err.display_detailed().contains("D001"));
    }
}
