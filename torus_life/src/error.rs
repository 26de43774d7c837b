// error.rs - Error types for the toroidal Game of Life core

use thiserror::Error;

/// Errors raised by grid construction, lookup and comparison.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LifeError {
    /// Width or height of zero
    #[error("invalid grid dimensions {width}x{height}: both must be at least 1")]
    InvalidDimension { width: usize, height: usize },

    /// Coordinate outside [0, width) x [0, height)
    #[error("cell ({col}, {row}) is outside the {width}x{height} grid")]
    OutOfRange {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },

    /// Two grids (or textual rows) that should share a shape do not
    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// Flat cell list whose length is not width * height
    #[error("expected {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },

    /// Live probability not in [0, 1]
    #[error("live probability {0} must be between 0.0 and 1.0")]
    InvalidProbability(f64),

    /// Unknown character in a textual grid
    #[error("unexpected character {ch:?} at ({col}, {row})")]
    InvalidCell { ch: char, col: usize, row: usize },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for Game of Life operations
pub type LifeResult<T> = Result<T, LifeError>;

impl LifeError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
