//! Error types for matrix construction and generation.

use thiserror::Error;

/// Error raised when a matrix cannot be built with the requested shape.
///
/// Normalisation itself never fails: a constant row silently produces
/// non-finite entries, and that is left to the caller to inspect via
/// [`RowStats::is_degenerate`](crate::normalise::RowStats::is_degenerate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// Row count or row length was zero.
    #[error("Invalid matrix dimensions {n_rows}x{row_len}: both must be greater than 0")]
    InvalidDimensions {
        /// Requested number of rows.
        n_rows: usize,
        /// Requested number of entries per row.
        row_len: usize,
    },

    /// No rows, or rows with no entries, were supplied.
    #[error("Matrix must contain at least one non-empty row")]
    EmptyMatrix,

    /// A row's length differs from the first row's length.
    #[error("Row {index} has length {actual}, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        index: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
}
