//! Benchmark report and output formatters.
//!
//! The stdout contract is the single line from
//! [`BenchmarkReport::average_line`]. JSON and Markdown renderings exist for
//! logs and ad-hoc comparison between runs.

use datatrans_core::{MatrixShape, RowStats};
use serde::Serialize;

use crate::config::{ExecutionMode, NormaliseStrategy};
use crate::runner::BenchmarkRun;
use crate::timing::TimingStats;

/// Summary of a benchmark run, without the matrices.
#[derive(Clone, Debug, Serialize)]
pub struct BenchmarkReport {
    /// Time the report was created (RFC 3339).
    pub timestamp: String,

    /// Shape of the input matrix.
    pub shape: MatrixShape,

    /// Number of timed outer iterations.
    pub iterations: usize,

    /// Seed the input was generated from.
    pub seed: u64,

    /// Row scheduling mode.
    pub mode: ExecutionMode,

    /// Normaliser form.
    pub strategy: NormaliseStrategy,

    /// Wall-clock time of the whole timed loop in nanoseconds.
    pub total_ns: u64,

    /// Average time per outer iteration in nanoseconds.
    pub average_ns: f64,

    /// Per-iteration lap statistics.
    pub lap_stats: TimingStats,

    /// Statistics of the warm-up row.
    pub warmup_stats: RowStats<f64>,
}

impl BenchmarkReport {
    /// Builds a report from a finished run.
    pub fn from_run(run: &BenchmarkRun) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            shape: run.input.shape(),
            iterations: run.timing.iterations,
            seed: run.seed,
            mode: run.config.mode(),
            strategy: run.config.strategy(),
            total_ns: run.timing.total_ns,
            average_ns: run.timing.average_ns(),
            lap_stats: run.timing.lap_stats.clone(),
            warmup_stats: run.warmup_stats,
        }
    }

    /// The single stdout line: `Average time: <ns>`.
    ///
    /// The value always carries a decimal point, e.g. `Average time: 150000000.0`.
    pub fn average_line(&self) -> String {
        format!("Average time: {:?}", self.average_ns)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Markdown summary table.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str("# Row Normalisation Benchmark\n\n");
        md.push_str(&format!("**Timestamp:** {}\n\n", self.timestamp));

        md.push_str("| Parameter | Value |\n");
        md.push_str("|-----------|-------|\n");
        md.push_str(&format!(
            "| Shape | {} x {} |\n",
            self.shape.n_rows, self.shape.row_len
        ));
        md.push_str(&format!("| Iterations | {} |\n", self.iterations));
        md.push_str(&format!("| Seed | {} |\n", self.seed));
        md.push_str(&format!("| Mode | {:?} |\n", self.mode));
        md.push_str(&format!("| Strategy | {:?} |\n", self.strategy));
        md.push('\n');

        md.push_str("| Metric | Value |\n");
        md.push_str("|--------|-------|\n");
        md.push_str(&format!("| Average (ns) | {:.2} |\n", self.average_ns));
        md.push_str(&format!("| Lap mean (ms) | {:.3} |\n", self.lap_stats.mean_ms()));
        md.push_str(&format!("| Lap min (ns) | {} |\n", self.lap_stats.min_ns));
        md.push_str(&format!("| Lap max (ns) | {} |\n", self.lap_stats.max_ns));
        md.push_str(&format!("| Lap CV (%) | {:.2} |\n", self.lap_stats.cv_percent()));

        md
    }
}
