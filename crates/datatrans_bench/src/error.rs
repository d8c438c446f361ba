//! Error types for the benchmark driver.

use datatrans_core::DataError;
use thiserror::Error;

/// Configuration error for [`BenchmarkConfig`](crate::config::BenchmarkConfig).
///
/// Raised at build or validation time; a validated configuration never
/// produces one of these at run time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Row count outside [2, MAX_ROWS].
    #[error("Invalid row count {0}: must be in range [2, {max}]", max = crate::config::MAX_ROWS)]
    InvalidRowCount(usize),

    /// Row length outside [1, MAX_ROW_LEN].
    #[error("Invalid row length {0}: must be in range [1, {max}]", max = crate::config::MAX_ROW_LEN)]
    InvalidRowLength(usize),

    /// Iteration count outside [1, MAX_ITERATIONS].
    #[error("Invalid iteration count {0}: must be in range [1, {max}]", max = crate::config::MAX_ITERATIONS)]
    InvalidIterations(usize),
}

/// Benchmark execution error.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// Invalid configuration.
    #[error("Invalid benchmark configuration: {0}")]
    Config(#[from] ConfigError),

    /// Matrix generation failed.
    #[error("Data generation error: {0}")]
    Data(#[from] DataError),
}
