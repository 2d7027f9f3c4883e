//! Word squares and the symmetry check that defines them.

use std::fmt;

/// Do `rows` form a word square?
///
/// True iff there are N rows, each exactly N characters long, and character `j` of
/// row `i` equals character `i` of row `j` for every pair. The diagonal is skipped.
#[must_use]
pub fn is_word_square<S: AsRef<str>>(rows: &[S]) -> bool {
    let size = rows.len();
    let grid: Vec<Vec<char>> = rows.iter().map(|row| row.as_ref().chars().collect()).collect();

    if grid.iter().any(|row| row.len() != size) {
        return false;
    }

    (0..size).all(|i| ((i + 1)..size).all(|j| grid[i][j] == grid[j][i]))
}

/// A completed word square: N words that read the same across and down.
///
/// Only built from rows that passed [`is_word_square`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    rows: Vec<String>,
}

impl Square {
    /// Wrap `rows` if they form a word square.
    #[must_use]
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Square> {
        if !is_word_square(rows) {
            return None;
        }
        Some(Square {
            rows: rows.iter().map(|r| r.as_ref().to_string()).collect(),
        })
    }

    /// Side length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, i: usize) -> Option<&str> {
        self.rows.get(i).map(String::as_str)
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }
}

impl fmt::Display for Square {
    /// Uppercase rows, one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.to_uppercase())?;
        }
        Ok(())
    }
}

impl IntoIterator for Square {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
