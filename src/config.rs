//! Externally tunable limits for matrix construction and searching.

use crate::errors::ConfigError;

pub const DEFAULT_MATRIX_SIZE_MIN: usize = 2;
pub const DEFAULT_MATRIX_SIZE_MAX: usize = 20;
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Bounds on matrix size plus the result cap applied by [`crate::finder::WordFinder`].
///
/// The core never reads these from the environment; callers build a config
/// (the CLI from its flags, the wasm glue from its arguments) and pass it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinderConfig {
    pub matrix_size_min: usize,
    pub matrix_size_max: usize,
    pub max_results: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        FinderConfig {
            matrix_size_min: DEFAULT_MATRIX_SIZE_MIN,
            matrix_size_max: DEFAULT_MATRIX_SIZE_MAX,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl FinderConfig {
    /// Build a config, rejecting bounds no matrix could satisfy.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroMinimumSize`] if `matrix_size_min` is 0, and
    /// [`ConfigError::ContradictoryBounds`] if it exceeds `matrix_size_max`.
    pub fn new(matrix_size_min: usize, matrix_size_max: usize, max_results: usize) -> Result<Self, ConfigError> {
        let config = FinderConfig { matrix_size_min, matrix_size_max, max_results };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// See [`FinderConfig::new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.matrix_size_min == 0 {
            return Err(ConfigError::ZeroMinimumSize);
        }
        if self.matrix_size_min > self.matrix_size_max {
            return Err(ConfigError::ContradictoryBounds {
                min: self.matrix_size_min,
                max: self.matrix_size_max,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn size_in_range(&self, size: usize) -> bool {
        (self.matrix_size_min..=self.matrix_size_max).contains(&size)
    }
}
