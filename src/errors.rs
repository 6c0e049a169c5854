//! Error types for matrix construction, configuration, and console input.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - M001: `MatrixError::Empty` (No rows supplied)
//! - M002: `MatrixError::RowCountOutOfRange` (Row count outside configured bounds)
//! - M003: `MatrixError::RaggedRow` (Row length differs from the first row)
//! - C001: `ConfigError::ZeroMinimumSize` (Minimum matrix size of zero)
//! - C002: `ConfigError::ContradictoryBounds` (Minimum size above maximum size)
//! - I001: `InputError::NotANumber` (Matrix size is not an integer)
//! - I002: `InputError::SizeOutOfRange` (Matrix size outside configured bounds)
//! - I003: `InputError::RowLength` (Row has the wrong number of characters)
//!
//! # Examples
//!
//! ```
//! use wordfinder::errors::MatrixError;
//! use wordfinder::matrix::Matrix;
//!
//! match Matrix::new(["abc", "ab", "abc"], 2, 5) {
//!     Err(e @ MatrixError::RaggedRow { .. }) => {
//!         assert_eq!(e.code(), "M003");
//!         println!("{}", e.display_detailed());
//!     }
//!     other => panic!("expected a ragged-row error, got {other:?}"),
//! }
//! ```

/// Raised when rows cannot form a valid matrix. No matrix is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("Matrix has no rows")]
    Empty,

    #[error("Matrix size must be between {min}x{min} and {max}x{max} (got {actual} rows)")]
    RowCountOutOfRange { min: usize, max: usize, actual: usize },

    #[error("Row {row} has {actual} characters; all rows must have {expected}")]
    RaggedRow { row: usize, expected: usize, actual: usize },
}

impl MatrixError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            MatrixError::Empty => "M001",
            MatrixError::RowCountOutOfRange { .. } => "M002",
            MatrixError::RaggedRow { .. } => "M003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            MatrixError::Empty => "No rows supplied",
            MatrixError::RowCountOutOfRange { .. } => "Row count outside configured bounds",
            MatrixError::RaggedRow { .. } => "Row length differs from the first row",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            MatrixError::Empty => "A matrix needs at least one row before it can be searched.",
            MatrixError::RowCountOutOfRange { .. } => "The number of rows must lie within the configured minimum and maximum matrix size (inclusive).",
            MatrixError::RaggedRow { .. } => "Every row must have the same number of characters as the first row, so that columns can be read top to bottom.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            MatrixError::Empty => Some("Supply at least one row, e.g. --row abc --row def --row ghi"),
            MatrixError::RowCountOutOfRange { .. } => Some("Add or remove rows, or adjust --min-size / --max-size"),
            MatrixError::RaggedRow { .. } => Some("Pad or trim the row so every row has the same length"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Raised when the externally supplied limits are unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Minimum matrix size must be at least 1")]
    ZeroMinimumSize,

    #[error("contradictory bounds: min={min}, max={max}")]
    ContradictoryBounds { min: usize, max: usize },
}

impl ConfigError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::ZeroMinimumSize => "C001",
            ConfigError::ContradictoryBounds { .. } => "C002",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ConfigError::ZeroMinimumSize => "Minimum matrix size of zero",
            ConfigError::ContradictoryBounds { .. } => "Minimum size above maximum size",
        }
    }

    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ConfigError::ZeroMinimumSize => "An empty matrix cannot be searched, so the smallest accepted matrix must have at least one row.",
            ConfigError::ContradictoryBounds { .. } => "No matrix size can satisfy a minimum that is larger than the maximum.",
        }
    }

    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ConfigError::ZeroMinimumSize => Some("Use --min-size 1 or larger"),
            ConfigError::ContradictoryBounds { .. } => Some("The minimum size cannot exceed the maximum size"),
        }
    }

    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Raised by the console boundary for a single malformed line.
/// The interactive loop reports these and re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("\"{input}\" is not a number")]
    NotANumber { input: String },

    #[error("Invalid matrix size {size}. Please ensure it's between {min} and {max}.")]
    SizeOutOfRange { size: usize, min: usize, max: usize },

    #[error("Each row must have exactly {expected} characters (got {actual}).")]
    RowLength { expected: usize, actual: usize },
}

impl InputError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            InputError::NotANumber { .. } => "I001",
            InputError::SizeOutOfRange { .. } => "I002",
            InputError::RowLength { .. } => "I003",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            InputError::NotANumber { .. } => "Matrix size is not an integer",
            InputError::SizeOutOfRange { .. } => "Matrix size outside configured bounds",
            InputError::RowLength { .. } => "Row has the wrong number of characters",
        }
    }

    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            InputError::NotANumber { .. } => "The matrix size prompt expects a whole number.",
            InputError::SizeOutOfRange { .. } => "The chosen matrix size must lie within the configured minimum and maximum.",
            InputError::RowLength { .. } => "Interactive matrices are square: each row must have as many characters as the chosen size.",
        }
    }

    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            InputError::NotANumber { .. } => Some("Enter digits only, e.g. 4"),
            InputError::SizeOutOfRange { .. } => None,
            InputError::RowLength { .. } => Some("Re-enter the row with the right number of characters"),
        }
    }

    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

impl From<MatrixError> for std::io::Error {
    fn from(me: MatrixError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, me.to_string())
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
    use std::collections::HashSet;

    fn all_codes() -> Vec<&'static str> {
        let matrix = [
            MatrixError::Empty,
            MatrixError::RowCountOutOfRange { min: 2, max: 5, actual: 7 },
            MatrixError::RaggedRow { row: 1, expected: 3, actual: 2 },
        ];
        let config = [
            ConfigError::ZeroMinimumSize,
            ConfigError::ContradictoryBounds { min: 5, max: 3 },
        ];
        let input = [
            InputError::NotANumber { input: "x".to_string() },
            InputError::SizeOutOfRange { size: 9, min: 2, max: 5 },
            InputError::RowLength { expected: 4, actual: 3 },
        ];

        matrix.iter().map(MatrixError::code)
            .chain(config.iter().map(ConfigError::code))
            .chain(input.iter().map(InputError::code))
            .collect()
    }

    #[test]
    fn test_all_error_codes_are_unique() {
        let codes = all_codes();
        let unique: HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len(), "Duplicate error code in {codes:?}");
    }

    #[test]
    fn test_error_code_format() {
        for code in all_codes() {
            assert_eq!(code.len(), 4, "Error code '{code}' should be 4 characters");
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{code}' should end with a number");
        }
    }

    #[test]
    fn test_row_count_message_includes_bounds() {
        let err = MatrixError::RowCountOutOfRange { min: 2, max: 5, actual: 7 };
        let detailed = err.display_detailed();
        assert!(detailed.contains("2x2"));
        assert!(detailed.contains("5x5"));
        assert!(detailed.contains('7'));
        assert!(detailed.contains("M002"));
    }

    #[test]
    fn test_display_detailed_without_help() {
        let err = InputError::SizeOutOfRange { size: 9, min: 2, max: 5 };
        assert_eq!(
            err.display_detailed(),
            "Invalid matrix size 9. Please ensure it's between 2 and 5. (I002)"
        );
    }

    #[test]
    fn test_contradictory_bounds_help() {
        let err = ConfigError::ContradictoryBounds { min: 5, max: 3 };
        let detailed = err.display_detailed();
        assert!(detailed.contains("C002"));
        assert!(detailed.contains("minimum size cannot exceed"));
    }
}
