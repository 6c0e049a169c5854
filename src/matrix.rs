//! `matrix` — the validated, immutable character grid that searches run against.
//!
//! A [`Matrix`] is built once from raw rows and never mutated afterwards, so it
//! can be borrowed by any number of [`crate::finder::WordFinder`]s at once.
//!
//! Rows are stored as `String`s. Lengths are measured in `char`s, not bytes,
//! so a row like `"ñandú"` counts as five characters.

use crate::config::FinderConfig;
use crate::errors::MatrixError;
use log::debug;

/// Validated grid of characters.
///
/// Invariants (checked in [`Matrix::new`]):
/// - at least one row,
/// - `min_size <= rows.len() <= max_size`,
/// - every row has the same number of characters as the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<String>,
    width: usize,
}

impl Matrix {
    /// Validate `rows` against the inclusive size bounds and build a matrix.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::Empty`] if no rows are supplied,
    /// - [`MatrixError::RowCountOutOfRange`] if the row count is outside `[min_size, max_size]`,
    /// - [`MatrixError::RaggedRow`] for the first row whose length differs from row 0.
    pub fn new<I, S>(rows: I, min_size: usize, max_size: usize) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<String> = rows.into_iter().map(Into::into).collect();

        let Some(first) = rows.first() else {
            return Err(MatrixError::Empty);
        };

        if rows.len() < min_size || rows.len() > max_size {
            return Err(MatrixError::RowCountOutOfRange {
                min: min_size,
                max: max_size,
                actual: rows.len(),
            });
        }

        let width = first.chars().count();
        if let Some((row, actual)) = rows
            .iter()
            .map(|r| r.chars().count())
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(MatrixError::RaggedRow { row, expected: width, actual });
        }

        debug!("Accepted {}x{} matrix", rows.len(), width);
        Ok(Matrix { rows, width })
    }

    /// Same as [`Matrix::new`], taking the bounds from a [`FinderConfig`].
    ///
    /// # Errors
    ///
    /// See [`Matrix::new`].
    pub fn with_config<I, S>(rows: I, config: &FinderConfig) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(rows, config.matrix_size_min, config.matrix_size_max)
    }

    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Number of characters in each row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The characters at `index` in every row, read top to bottom.
    ///
    /// Returns `None` when `index >= self.width()`.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<String> {
        if index >= self.width {
            return None;
        }
        self.rows.iter().map(|row| row.chars().nth(index)).collect()
    }

    /// Every column in order, left to right.
    pub fn columns(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.width).filter_map(|i| self.column(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_square_matrix() {
        let m = Matrix::new(["abc", "def", "ghi"], 2, 5).unwrap();
        assert_eq!(m.size(), 3);
        assert_eq!(m.width(), 3);
        assert_eq!(m.rows(), ["abc", "def", "ghi"]);
    }

    #[test]
    fn test_rejects_empty() {
        let rows: Vec<String> = vec![];
        assert_eq!(Matrix::new(rows, 1, 5), Err(MatrixError::Empty));
    }

    #[test]
    fn test_rejects_too_few_rows() {
        assert_eq!(
            Matrix::new(["ab"], 2, 5),
            Err(MatrixError::RowCountOutOfRange { min: 2, max: 5, actual: 1 })
        );
    }

    #[test]
    fn test_rejects_too_many_rows() {
        assert_eq!(
            Matrix::new(["ab", "cd", "ef"], 1, 2),
            Err(MatrixError::RowCountOutOfRange { min: 1, max: 2, actual: 3 })
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(Matrix::new(["ab", "cd"], 2, 2).is_ok());
    }

    #[test]
    fn test_rejects_ragged_rows() {
        assert_eq!(
            Matrix::new(["abc", "abc", "ab"], 2, 5),
            Err(MatrixError::RaggedRow { row: 2, expected: 3, actual: 2 })
        );
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        let m = Matrix::new(["ñab", "abc", "xyz"], 1, 5).unwrap();
        assert_eq!(m.width(), 3);
        assert_eq!(m.column(0).as_deref(), Some("ñax"));
    }

    #[test]
    fn test_column_reads_top_to_bottom() {
        let m = Matrix::new(["abc", "abc", "abc"], 1, 5).unwrap();
        assert_eq!(m.column(0).as_deref(), Some("aaa"));
        assert_eq!(m.column(1).as_deref(), Some("bbb"));
        assert_eq!(m.column(2).as_deref(), Some("ccc"));
    }

    #[test]
    fn test_column_out_of_range() {
        let m = Matrix::new(["ab", "cd"], 1, 5).unwrap();
        assert_eq!(m.column(2), None);
    }

    #[test]
    fn test_columns_iterates_all() {
        let m = Matrix::new(["ab", "cd"], 1, 5).unwrap();
        assert_eq!(m.columns().collect::<Vec<_>>(), vec!["ac", "bd"]);
    }

    #[test]
    fn test_with_config_uses_bounds() {
        let config = FinderConfig::new(3, 3, 1).unwrap();
        assert!(Matrix::with_config(["ab", "cd"], &config).is_err());
        assert!(Matrix::with_config(["abc", "def", "ghi"], &config).is_ok());
    }
}
