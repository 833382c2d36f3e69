//! Defines the error types of the crate.
//!
//! Laying out is total: any well-formed [`Expression`](crate::expression::Expression) lays out, and a shaper failing to
//! resolve characters only yields degenerate (empty) text. The only failures are structural ones, caught
//! when an expression is built:
//!   - [`ExpressionError`] : a grid whose rows are missing, empty or of different lengths.

use std::fmt;

/// Result type for the [`ExpressionError`]
pub type ExpressionResult<T> = ::std::result::Result<T, ExpressionError>;

/// Malformed expression trees, rejected when they are constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    /// A grid must have at least one row.
    EmptyGrid,
    /// A grid row must have at least one cell.
    EmptyRow {
        /// index of the offending row
        row: usize,
    },
    /// Every row of a grid must have as many cells as the first one.
    RaggedGrid {
        /// index of the offending row
        row: usize,
        /// number of cells in the first row
        expected: usize,
        /// number of cells in the offending row
        found: usize,
    },
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::ExpressionError::*;
        match *self {
            EmptyGrid =>
                write!(f, "a grid needs at least one row"),
            EmptyRow { row } =>
                write!(f, "row {} of the grid has no cells", row),
            RaggedGrid { row, expected, found } =>
                write!(f, "row {} of the grid has {} cells, expected {}", row, found, expected),
        }
    }
}

impl std::error::Error for ExpressionError {}
