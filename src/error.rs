//! Error types raised by the simulation core

use thiserror::Error;

/// Errors produced while building rule sets, grids or games
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// The rule descriptor did not split into exactly two `/`-delimited parts
    #[error("malformed rule string {0:?}: expected \"<survival>/<birth>\"")]
    MalformedRuleString(String),

    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },

    #[error("grid size must be positive, got {0}")]
    InvalidSize(usize),

    #[error("coordinates ({row}, {col}) out of bounds for {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
}

pub type LifeResult<T> = Result<T, LifeError>;
