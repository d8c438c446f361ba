//! # datatrans_bench: Row Normalisation Benchmark Driver
//!
//! ## Layer 2 Role
//!
//! Drives the benchmark protocol on top of `datatrans_core`:
//! - Configuration with validated defaults (`config`)
//! - Generate -> warm-up -> timed loop (`runner`)
//! - Single-timer averaging plus per-iteration laps (`timing`)
//! - Report rendering: stdout line, JSON, Markdown (`report`)
//!
//! The `datatrans` binary runs [`BenchmarkConfig::default`](config::BenchmarkConfig)
//! and prints exactly one line to stdout.
//!
//! ## Usage Example
//!
//! ```rust
//! use datatrans_bench::prelude::*;
//!
//! let config = BenchmarkConfig::builder()
//!     .n_rows(4)
//!     .row_len(64)
//!     .iterations(2)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let run = BenchmarkRunner::new(config).run().unwrap();
//! let report = BenchmarkReport::from_run(&run);
//! assert!(report.average_line().starts_with("Average time: "));
//! ```

#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod timing;

/// Commonly used types.
pub mod prelude {
    pub use crate::config::{BenchmarkConfig, ExecutionMode, NormaliseStrategy};
    pub use crate::error::{BenchmarkError, ConfigError};
    pub use crate::report::BenchmarkReport;
    pub use crate::runner::{BenchmarkRun, BenchmarkRunner};
    pub use crate::timing::{IterationTiming, TimingStats};
}
