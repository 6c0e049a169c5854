//! Text rendering for the console and wasm front-ends.

use crate::finder::FindResult;
use crate::matrix::Matrix;
use std::fmt::Write;

pub const FOUND_HEADING: &str = "Most repeated words found:";
pub const NOTHING_FOUND: &str = "No words found in the matrix.";

/// Draw the matrix inside a border, one tab-indented line per row:
///
/// ```text
///      ___
///     |abc|
///     |def|
///     |ghi|
///      ---
/// ```
#[must_use]
pub fn framed_matrix(matrix: &Matrix) -> String {
    let width = matrix.width();
    let mut out = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(out, "\t {}", "_".repeat(width));
    for row in matrix.rows() {
        let _ = writeln!(out, "\t|{row}|");
    }
    let _ = writeln!(out, "\t {}", "-".repeat(width));
    out
}

/// Found words one per line under a heading, or a single "nothing found" line.
#[must_use]
pub fn results_to_string(result: &FindResult) -> String {
    if result.is_empty() {
        return format!("{NOTHING_FOUND}\n");
    }
    let mut out = format!("{FOUND_HEADING}\n");
    for word in result {
        let _ = writeln!(out, "{word}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::FindStatus;

    #[test]
    fn test_framed_matrix_exact() {
        let m = Matrix::new(["abc", "def", "ghi"], 1, 5).unwrap();
        assert_eq!(
            framed_matrix(&m),
            "\t ___\n\t|abc|\n\t|def|\n\t|ghi|\n\t ---\n"
        );
    }

    #[test]
    fn test_results_listing() {
        let result = FindResult {
            words: vec!["cat".to_string(), "dog".to_string()],
            status: FindStatus::QueryExhausted,
        };
        assert_eq!(results_to_string(&result), "Most repeated words found:\ncat\ndog\n");
    }

    #[test]
    fn test_results_empty() {
        let result = FindResult { words: vec![], status: FindStatus::QueryExhausted };
        assert_eq!(results_to_string(&result), "No words found in the matrix.\n");
    }
}
