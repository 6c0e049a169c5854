//! Parsing helpers for raw user input.
//!
//! Everything here is lowercased before it reaches the finder; the finder
//! itself compares words exactly.

use crate::config::FinderConfig;
use crate::errors::InputError;

/// Characters that separate words in a query line.
pub const WORD_SEPARATORS: [char; 3] = [' ', ',', ';'];

/// Split a line of query words on space, comma, or semicolon, dropping empty entries.
///
/// `"cat, dog;;bird"` becomes `["cat", "dog", "bird"]`.
#[must_use]
pub fn split_words(line: &str) -> Vec<String> {
    line.to_lowercase()
        .split(WORD_SEPARATORS)
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a matrix size, requiring it to fall inside the configured bounds.
///
/// # Errors
///
/// [`InputError::NotANumber`] or [`InputError::SizeOutOfRange`].
pub fn parse_size(line: &str, config: &FinderConfig) -> Result<usize, InputError> {
    let trimmed = line.trim();
    let size: usize = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber { input: trimmed.to_string() })?;

    if config.size_in_range(size) {
        Ok(size)
    } else {
        Err(InputError::SizeOutOfRange {
            size,
            min: config.matrix_size_min,
            max: config.matrix_size_max,
        })
    }
}

/// Lowercase a matrix row and check it has exactly `size` characters.
///
/// Only the line terminator is stripped; interior and edge spaces count as
/// characters, since a matrix cell may legitimately be blank.
///
/// # Errors
///
/// [`InputError::RowLength`] when the character count differs from `size`.
pub fn parse_row(line: &str, size: usize) -> Result<String, InputError> {
    let row = line.trim_end_matches(['\r', '\n']).to_lowercase();
    let actual = row.chars().count();
    if actual == size {
        Ok(row)
    } else {
        Err(InputError::RowLength { expected: size, actual })
    }
}

/// Interpret an answer to a yes/no prompt. Only `y` (any case) means yes.
#[must_use]
pub fn is_yes(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("y")
}
