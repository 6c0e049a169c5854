//! The search engine: which query words appear in a [`Matrix`]?
//!
//! A word is *found* when it is a contiguous substring of some row (read
//! left to right) or of some column (read top to bottom). Diagonals and
//! reversed reads are never considered.
//!
//! # Examples
//!
//! ```
//! use wordfinder::finder::{FindStatus, WordFinder};
//! use wordfinder::matrix::Matrix;
//!
//! let matrix = Matrix::new(["chil", "horn", "door", "baty"], 2, 10)?;
//! let finder = WordFinder::new(&matrix, 10);
//! let result = finder.find(["chil", "chdb", "xxx"]);
//!
//! assert!(result.contains("chil"));
//! assert!(result.contains("chdb"));
//! assert!(!result.contains("xxx"));
//! assert_eq!(result.status, FindStatus::QueryExhausted);
//! # Ok::<(), wordfinder::errors::MatrixError>(())
//! ```
//!
//! The cap keeps the *first* found words in query order; it does not rank
//! by how often a word occurs.

use crate::matrix::Matrix;
use instant::Instant;
use log::debug;
use std::collections::HashSet;

/// Whether `find` looked at every distinct query word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindStatus {
    /// Every distinct query word was checked.
    QueryExhausted,

    /// The result cap was reached; later query words were not checked.
    FoundEnough,
}

/// Found words from one [`WordFinder::find`] call.
///
/// Behaves as an insertion-ordered set: each word appears at most once and
/// iteration follows query order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindResult {
    pub words: Vec<String>,
    pub status: FindStatus,
}

impl FindResult {
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }
}

impl IntoIterator for FindResult {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a FindResult {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Where a word was found: `line` is the row index (horizontal) or column
/// index (vertical); `offset` is the character position along that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub direction: Direction,
    pub line: usize,
    pub offset: usize,
}

/// Searches a borrowed [`Matrix`], returning at most `max_results` words per call.
#[derive(Debug, Clone)]
pub struct WordFinder<'m> {
    matrix: &'m Matrix,
    // Synthesized once; the matrix never changes.
    columns: Vec<String>,
    max_results: usize,
}

impl<'m> WordFinder<'m> {
    #[must_use]
    pub fn new(matrix: &'m Matrix, max_results: usize) -> Self {
        WordFinder {
            matrix,
            columns: matrix.columns().collect(),
            max_results,
        }
    }

    #[must_use]
    pub fn matrix(&self) -> &'m Matrix {
        self.matrix
    }

    #[must_use]
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Return the distinct query words present in the matrix, in query
    /// order, truncated to the first `max_results`.
    ///
    /// Words are compared exactly as given; callers lowercase beforehand if
    /// they want case-insensitive matching. Empty words are skipped.
    pub fn find<I, S>(&self, words: I) -> FindResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let t_find = Instant::now();
        let mut seen: HashSet<String> = HashSet::new();
        let mut found = Vec::new();
        let mut checked = 0usize;
        let mut status = FindStatus::QueryExhausted;

        for word in words {
            let word = word.as_ref();
            if word.is_empty() || !seen.insert(word.to_string()) {
                continue;
            }
            if found.len() >= self.max_results {
                status = FindStatus::FoundEnough;
                break;
            }
            checked += 1;
            if self.contains_word(word) {
                found.push(word.to_string());
            }
        }

        debug!(
            "Checked {checked} distinct words, found {} ({:?}) in {:.3}ms",
            found.len(),
            status,
            t_find.elapsed().as_secs_f64() * 1000.0
        );

        FindResult { words: found, status }
    }

    /// True if `word` is a substring of some row or some column.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.exists_horizontally(word) || self.exists_vertically(word)
    }

    #[must_use]
    pub fn exists_horizontally(&self, word: &str) -> bool {
        self.matrix.rows().iter().any(|row| row.contains(word))
    }

    #[must_use]
    pub fn exists_vertically(&self, word: &str) -> bool {
        self.columns.iter().any(|col| col.contains(word))
    }

    /// First placement of `word`, scanning rows before columns.
    #[must_use]
    pub fn locate(&self, word: &str) -> Option<Placement> {
        if word.is_empty() {
            return None;
        }
        let rows = self.matrix.rows().iter().map(|r| (Direction::Horizontal, r));
        let cols = self.columns.iter().map(|c| (Direction::Vertical, c));

        rows.enumerate()
            .chain(cols.enumerate())
            .find_map(|(line, (direction, text))| {
                text.find(word).map(|byte_idx| Placement {
                    direction,
                    line,
                    offset: text[..byte_idx].chars().count(),
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&str]) -> Matrix {
        Matrix::new(rows.iter().copied(), 1, 10).unwrap()
    }

    #[test]
    fn test_horizontal_substring() {
        let m = matrix(&["chill", "abcde", "fghij", "klmno", "pqrst"]);
        let finder = WordFinder::new(&m, 10);
        assert!(finder.exists_horizontally("hil"));
        assert!(!finder.exists_horizontally("zzz"));
    }

    #[test]
    fn test_vertical_substring() {
        let m = matrix(&["abc", "abc", "abc"]);
        let finder = WordFinder::new(&m, 10);
        assert!(finder.exists_vertically("aaa"));
        assert!(finder.exists_vertically("bbb"));
        assert!(finder.exists_vertically("ccc"));
        assert!(!finder.exists_vertically("abc"));
        assert!(finder.exists_horizontally("abc"));
    }

    #[test]
    fn test_word_longer_than_matrix() {
        let m = matrix(&["ab", "cd"]);
        let finder = WordFinder::new(&m, 10);
        assert!(finder.find(["abc"]).is_empty());
    }

    #[test]
    fn test_empty_query() {
        let m = matrix(&["ab", "cd"]);
        let finder = WordFinder::new(&m, 10);
        let result = finder.find(Vec::<String>::new());
        assert!(result.is_empty());
        assert_eq!(result.status, FindStatus::QueryExhausted);
    }

    #[test]
    fn test_duplicates_counted_once() {
        let m = matrix(&["cat", "xyz", "qrs"]);
        let finder = WordFinder::new(&m, 10);
        let result = finder.find(["cat", "cat", "dog"]);
        assert_eq!(result.words, vec!["cat"]);
    }

    #[test]
    fn test_cap_keeps_first_in_query_order() {
        let m = matrix(&["cat", "dog", "xyz"]);
        let finder = WordFinder::new(&m, 1);
        let result = finder.find(["dog", "cat"]);
        assert_eq!(result.words, vec!["dog"]);
        assert_eq!(result.status, FindStatus::FoundEnough);
    }

    #[test]
    fn test_cap_reached_on_last_word_is_exhausted() {
        let m = matrix(&["cat", "dog", "xyz"]);
        let finder = WordFinder::new(&m, 2);
        let result = finder.find(["dog", "cat"]);
        assert_eq!(result.len(), 2);
        assert_eq!(result.status, FindStatus::QueryExhausted);
    }

    #[test]
    fn test_zero_cap_is_always_empty() {
        let m = matrix(&["cat", "dog", "xyz"]);
        let finder = WordFinder::new(&m, 0);
        let result = finder.find(["cat", "dog"]);
        assert!(result.is_empty());
        assert_eq!(result.status, FindStatus::FoundEnough);
    }

    #[test]
    fn test_empty_words_skipped() {
        let m = matrix(&["ab", "cd"]);
        let finder = WordFinder::new(&m, 10);
        assert!(finder.find([""]).is_empty());
    }

    #[test]
    fn test_case_sensitive() {
        let m = matrix(&["ab", "cd"]);
        let finder = WordFinder::new(&m, 10);
        assert!(finder.find(["AB"]).is_empty());
    }

    #[test]
    fn test_repeat_calls_identical() {
        let m = matrix(&["chil", "horn", "door", "baty"]);
        let finder = WordFinder::new(&m, 3);
        let words = ["horn", "chdb", "oo", "zz", "ty"];
        assert_eq!(finder.find(words), finder.find(words));
    }

    #[test]
    fn test_locate_horizontal_and_vertical() {
        let m = matrix(&["chil", "horn", "door", "baty"]);
        let finder = WordFinder::new(&m, 10);
        assert_eq!(
            finder.locate("orn"),
            Some(Placement { direction: Direction::Horizontal, line: 1, offset: 1 })
        );
        assert_eq!(
            finder.locate("ooa"),
            Some(Placement { direction: Direction::Vertical, line: 1, offset: 1 })
        );
        assert_eq!(finder.locate("qq"), None);
        assert_eq!(finder.locate(""), None);
    }
}
