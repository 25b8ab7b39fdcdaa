//! Grid dimensions
//!
//! Word length and number of guess rows, both bounded.

use crate::core::{MAX_LETTERS, MIN_LETTERS};
use std::fmt;

/// Fewest guess rows a game can have
pub const MIN_ROWS: usize = 2;

/// Most guess rows a game can have
pub const MAX_ROWS: usize = 8;

/// Word length used when none is given
pub const DEFAULT_LETTERS: usize = 5;

/// Row count used when none is given
pub const DEFAULT_ROWS: usize = 6;

/// Letters per row and number of rows, validated against their bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    letters: usize,
    rows: usize,
}

/// A dimension outside its allowed range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    Letters(usize),
    Rows(usize),
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letters(n) => write!(
                f,
                "Word length must be between {MIN_LETTERS} and {MAX_LETTERS}, got {n}"
            ),
            Self::Rows(n) => write!(
                f,
                "Row count must be between {MIN_ROWS} and {MAX_ROWS}, got {n}"
            ),
        }
    }
}

impl std::error::Error for DimensionError {}

impl Dimensions {
    /// Create validated dimensions
    ///
    /// # Errors
    /// Returns `DimensionError` if `letters` is outside 2..=6 or `rows` is
    /// outside 2..=8.
    ///
    /// # Examples
    /// ```
    /// use wordle_grid::game::Dimensions;
    ///
    /// let dims = Dimensions::new(4, 8).unwrap();
    /// assert_eq!((dims.letters(), dims.rows()), (4, 8));
    ///
    /// assert!(Dimensions::new(7, 6).is_err());
    /// assert!(Dimensions::new(5, 1).is_err());
    /// ```
    pub const fn new(letters: usize, rows: usize) -> Result<Self, DimensionError> {
        if letters < MIN_LETTERS || letters > MAX_LETTERS {
            return Err(DimensionError::Letters(letters));
        }
        if rows < MIN_ROWS || rows > MAX_ROWS {
            return Err(DimensionError::Rows(rows));
        }
        Ok(Self { letters, rows })
    }

    #[inline]
    #[must_use]
    pub const fn letters(self) -> usize {
        self.letters
    }

    #[inline]
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Same rows, different word length
    ///
    /// # Errors
    /// Returns `DimensionError::Letters` if out of bounds.
    pub const fn with_letters(self, letters: usize) -> Result<Self, DimensionError> {
        Self::new(letters, self.rows)
    }

    /// Same word length, different row count
    ///
    /// # Errors
    /// Returns `DimensionError::Rows` if out of bounds.
    pub const fn with_rows(self, rows: usize) -> Result<Self, DimensionError> {
        Self::new(self.letters, rows)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            letters: DEFAULT_LETTERS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.letters, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five_by_six() {
        let dims = Dimensions::default();
        assert_eq!(dims.letters(), 5);
        assert_eq!(dims.rows(), 6);
        assert_eq!(dims.to_string(), "5x6");
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(Dimensions::new(2, 2).is_ok());
        assert!(Dimensions::new(6, 8).is_ok());
        assert_eq!(Dimensions::new(1, 6), Err(DimensionError::Letters(1)));
        assert_eq!(Dimensions::new(7, 6), Err(DimensionError::Letters(7)));
        assert_eq!(Dimensions::new(5, 1), Err(DimensionError::Rows(1)));
        assert_eq!(Dimensions::new(5, 9), Err(DimensionError::Rows(9)));
    }

    #[test]
    fn with_changes_one_axis() {
        let dims = Dimensions::default();
        assert_eq!(dims.with_letters(3).unwrap(), Dimensions::new(3, 6).unwrap());
        assert_eq!(dims.with_rows(8).unwrap(), Dimensions::new(5, 8).unwrap());
        assert_eq!(dims.with_rows(0), Err(DimensionError::Rows(0)));
    }
}
