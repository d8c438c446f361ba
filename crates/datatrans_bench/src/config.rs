//! Benchmark configuration.
//!
//! The defaults are the reference protocol: 1024 rows of 60 000 uniform
//! values, 20 timed outer iterations, sequential execution, a fresh output
//! row per normalisation.

use serde::Serialize;

use crate::error::ConfigError;

/// Reference number of rows.
pub const DEFAULT_ROWS: usize = 1024;

/// Reference number of entries per row.
pub const DEFAULT_ROW_LEN: usize = 60_000;

/// Reference number of timed outer iterations.
pub const DEFAULT_ITERATIONS: usize = 20;

/// Maximum number of rows allowed.
pub const MAX_ROWS: usize = 1 << 20;

/// Maximum number of entries per row allowed.
pub const MAX_ROW_LEN: usize = 1 << 27;

/// Maximum number of outer iterations allowed.
pub const MAX_ITERATIONS: usize = 100_000;

/// How rows within one outer iteration are scheduled.
///
/// `Parallel` changes what the reported average means (wall-clock time of a
/// multi-threaded pass), so the mode is always carried into the report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// One row after another on the calling thread.
    #[default]
    Sequential,

    /// Rows distributed over the global rayon pool.
    Parallel,
}

/// Which normaliser form the timed loop uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NormaliseStrategy {
    /// Allocate a new output row from the untouched input row each call.
    #[default]
    Copying,

    /// Start from a copy of the input and re-normalise each result row in
    /// place on every pass.
    InPlace,
}

/// Immutable benchmark configuration.
///
/// # Examples
///
/// ```rust
/// use datatrans_bench::config::{BenchmarkConfig, ExecutionMode};
///
/// let config = BenchmarkConfig::builder()
///     .n_rows(64)
///     .row_len(1_000)
///     .iterations(3)
///     .seed(42)
///     .mode(ExecutionMode::Parallel)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_rows(), 64);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkConfig {
    n_rows: usize,
    row_len: usize,
    iterations: usize,
    seed: Option<u64>,
    mode: ExecutionMode,
    strategy: NormaliseStrategy,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            n_rows: DEFAULT_ROWS,
            row_len: DEFAULT_ROW_LEN,
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            mode: ExecutionMode::default(),
            strategy: NormaliseStrategy::default(),
        }
    }
}

impl BenchmarkConfig {
    /// Creates a new configuration builder seeded with the reference defaults.
    #[inline]
    pub fn builder() -> BenchmarkConfigBuilder {
        BenchmarkConfigBuilder::default()
    }

    /// Number of rows in the generated matrix.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of entries per row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.row_len
    }

    /// Number of timed outer iterations.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Seed for matrix generation; `None` draws one at run time.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Row scheduling mode.
    #[inline]
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Normaliser form used in the timed loop.
    #[inline]
    pub fn strategy(&self) -> NormaliseStrategy {
        self.strategy
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_rows` is below 2 (row 0 is the warm-up row, so the timed loop
    ///   needs at least one more) or above [`MAX_ROWS`]
    /// - `row_len` is 0 or above [`MAX_ROW_LEN`]
    /// - `iterations` is 0 or above [`MAX_ITERATIONS`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_rows < 2 || self.n_rows > MAX_ROWS {
            return Err(ConfigError::InvalidRowCount(self.n_rows));
        }
        if self.row_len == 0 || self.row_len > MAX_ROW_LEN {
            return Err(ConfigError::InvalidRowLength(self.row_len));
        }
        if self.iterations == 0 || self.iterations > MAX_ITERATIONS {
            return Err(ConfigError::InvalidIterations(self.iterations));
        }
        Ok(())
    }
}

/// Builder for [`BenchmarkConfig`].
///
/// Unset fields keep the reference defaults; [`build`](Self::build) validates.
#[derive(Clone, Debug, Default)]
pub struct BenchmarkConfigBuilder {
    config: BenchmarkConfig,
}

impl BenchmarkConfigBuilder {
    /// Sets the number of rows.
    #[inline]
    pub fn n_rows(mut self, n_rows: usize) -> Self {
        self.config.n_rows = n_rows;
        self
    }

    /// Sets the number of entries per row.
    #[inline]
    pub fn row_len(mut self, row_len: usize) -> Self {
        self.config.row_len = row_len;
        self
    }

    /// Sets the number of timed outer iterations.
    #[inline]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Sets the generation seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Sets the row scheduling mode.
    #[inline]
    pub fn mode(mut self, mode: ExecutionMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Sets the normaliser form.
    #[inline]
    pub fn strategy(mut self, strategy: NormaliseStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails.
    pub fn build(self) -> Result<BenchmarkConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_protocol() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.n_rows(), 1024);
        assert_eq!(config.row_len(), 60_000);
        assert_eq!(config.iterations(), 20);
        assert_eq!(config.seed(), None);
        assert_eq!(config.mode(), ExecutionMode::Sequential);
        assert_eq!(config.strategy(), NormaliseStrategy::Copying);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = BenchmarkConfig::builder()
            .n_rows(10)
            .row_len(50)
            .iterations(4)
            .seed(9)
            .mode(ExecutionMode::Parallel)
            .strategy(NormaliseStrategy::InPlace)
            .build()
            .unwrap();

        assert_eq!(config.n_rows(), 10);
        assert_eq!(config.row_len(), 50);
        assert_eq!(config.iterations(), 4);
        assert_eq!(config.seed(), Some(9));
        assert_eq!(config.mode(), ExecutionMode::Parallel);
        assert_eq!(config.strategy(), NormaliseStrategy::InPlace);
    }

    #[test]
    fn test_builder_defaults_match_default() {
        let built = BenchmarkConfig::builder().build().unwrap();
        assert_eq!(built, BenchmarkConfig::default());
    }

    #[test]
    fn test_invalid_row_count() {
        for n in [0, 1, MAX_ROWS + 1] {
            let result = BenchmarkConfig::builder().n_rows(n).build();
            assert_eq!(result, Err(ConfigError::InvalidRowCount(n)));
        }
        assert!(BenchmarkConfig::builder().n_rows(2).build().is_ok());
    }

    #[test]
    fn test_invalid_row_length() {
        for len in [0, MAX_ROW_LEN + 1] {
            let result = BenchmarkConfig::builder().row_len(len).build();
            assert_eq!(result, Err(ConfigError::InvalidRowLength(len)));
        }
        assert!(BenchmarkConfig::builder().row_len(1).build().is_ok());
    }

    #[test]
    fn test_invalid_iterations() {
        for iters in [0, MAX_ITERATIONS + 1] {
            let result = BenchmarkConfig::builder().iterations(iters).build();
            assert_eq!(result, Err(ConfigError::InvalidIterations(iters)));
        }
    }

    #[test]
    fn test_enum_serialisation() {
        assert_eq!(
            serde_json::to_string(&ExecutionMode::Parallel).unwrap(),
            "\"parallel\""
        );
        assert_eq!(
            serde_json::to_string(&NormaliseStrategy::InPlace).unwrap(),
            "\"in_place\""
        );
    }
}
