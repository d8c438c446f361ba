//! Benchmark runner.
//!
//! Runs the fixed protocol: generate -> warm-up -> timed loop. Each phase runs
//! once, in order, with no early exit.
//!
//! # Timed Work
//!
//! Every outer iteration normalises rows `1..n_rows`; row 0 is only used for
//! the warm-up. Each pass overwrites the result slots of the previous one, so
//! only the final pass's outputs survive. The repetition exists to produce
//! sustained load for the timer and must not be collapsed.

use datatrans_core::rng::DataRng;
use datatrans_core::{
    generate_matrix, normalise_row, normalise_row_in_place, normalise_row_into, Matrix,
    ResultMatrix, RowStats,
};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::{BenchmarkConfig, ExecutionMode, NormaliseStrategy};
use crate::error::BenchmarkError;
use crate::timing::{time_iterations, IterationTiming};

/// Everything produced by one benchmark run.
#[derive(Debug)]
pub struct BenchmarkRun {
    /// Configuration the run used.
    pub config: BenchmarkConfig,

    /// Seed the input matrix was generated from.
    pub seed: u64,

    /// Generated input matrix.
    pub input: Matrix,

    /// Result matrix after the final pass; slot j is input row j normalised.
    pub results: ResultMatrix,

    /// Statistics of the warm-up row (row 0).
    pub warmup_stats: RowStats<f64>,

    /// Timing of the timed loop.
    pub timing: IterationTiming,
}

impl BenchmarkRun {
    /// Average time per outer iteration in nanoseconds.
    pub fn average_ns(&self) -> f64 {
        self.timing.average_ns()
    }
}

/// Runner for the row normalisation benchmark.
///
/// # Examples
///
/// ```rust
/// use datatrans_bench::config::BenchmarkConfig;
/// use datatrans_bench::runner::BenchmarkRunner;
///
/// let config = BenchmarkConfig::builder()
///     .n_rows(8)
///     .row_len(100)
///     .iterations(2)
///     .seed(1)
///     .build()
///     .unwrap();
///
/// let run = BenchmarkRunner::new(config).run().unwrap();
/// assert_eq!(run.results.filled(), 8);
/// ```
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    /// Creates a new runner with the given configuration.
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    /// Creates a runner for the reference protocol.
    pub fn with_defaults() -> Self {
        Self::new(BenchmarkConfig::default())
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Runs the benchmark to completion.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::Config`] if the configuration is invalid.
    /// A valid configuration cannot fail; a constant input row would yield
    /// NaN outputs silently rather than an error.
    pub fn run(&self) -> Result<BenchmarkRun, BenchmarkError> {
        self.config.validate()?;

        let n_rows = self.config.n_rows();
        let row_len = self.config.row_len();
        let mode = self.config.mode();
        let strategy = self.config.strategy();

        // Drawn once so the run can be replayed from the log
        let seed = self.config.seed().unwrap_or_else(rand::random);
        info!(
            seed,
            n_rows,
            row_len,
            size_mb = (n_rows * row_len * std::mem::size_of::<f64>()) / (1 << 20),
            "Generating input matrix"
        );
        let mut rng = DataRng::from_seed(seed);
        let input = generate_matrix(n_rows, row_len, &mut rng)?;

        let mut results = match strategy {
            NormaliseStrategy::Copying => ResultMatrix::with_rows(n_rows),
            NormaliseStrategy::InPlace => ResultMatrix::seeded_from(&input),
        };

        // Warm-up: Rust has no JIT or lazy class loading, so this only keeps
        // the protocol identical. Row 0 is never touched again.
        let mut warmup = vec![0.0; row_len];
        let warmup_stats = normalise_row_into(input.row(0), &mut warmup);
        results.set(0, warmup);
        debug!(
            mean = warmup_stats.mean,
            std_dev = warmup_stats.std_dev,
            "Warm-up row normalised"
        );

        info!(
            iterations = self.config.iterations(),
            ?mode,
            ?strategy,
            "Starting timed loop"
        );
        let timing = time_iterations(self.config.iterations(), |_| {
            normalise_pass(&input, &mut results, mode, strategy);
        });
        info!(
            total_ns = timing.total_ns,
            average_ns = timing.average_ns(),
            cv_percent = timing.lap_stats.cv_percent(),
            "Timed loop finished"
        );

        Ok(BenchmarkRun {
            config: self.config.clone(),
            seed,
            input,
            results,
            warmup_stats,
            timing,
        })
    }
}

/// One outer iteration over rows `1..n_rows`.
fn normalise_pass(
    input: &Matrix,
    results: &mut ResultMatrix,
    mode: ExecutionMode,
    strategy: NormaliseStrategy,
) {
    let rows = &input.rows()[1..];
    let slots = &mut results.slots_mut()[1..];

    match (mode, strategy) {
        (ExecutionMode::Sequential, NormaliseStrategy::Copying) => {
            for (slot, row) in slots.iter_mut().zip(rows) {
                *slot = Some(normalise_row(row));
            }
        }
        (ExecutionMode::Parallel, NormaliseStrategy::Copying) => {
            slots
                .par_iter_mut()
                .zip(rows.par_iter())
                .for_each(|(slot, row)| *slot = Some(normalise_row(row)));
        }
        (ExecutionMode::Sequential, NormaliseStrategy::InPlace) => {
            for row in slots.iter_mut().flatten() {
                normalise_row_in_place(row);
            }
        }
        (ExecutionMode::Parallel, NormaliseStrategy::InPlace) => {
            slots.par_iter_mut().for_each(|slot| {
                if let Some(row) = slot {
                    normalise_row_in_place(row);
                }
            });
        }
    }
}
