//! Row normalisation benchmark CLI.
//!
//! Runs the reference protocol and prints `Average time: <ns>` to stdout.
//! Diagnostics go to stderr.

use anyhow::Result;
use datatrans_bench::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        // Prefix match: covers the binary, datatrans_bench and datatrans_core
        .with(EnvFilter::from_default_env().add_directive("datatrans=info".parse()?))
        .init();

    let runner = BenchmarkRunner::with_defaults();
    tracing::info!(
        n_rows = runner.config().n_rows(),
        row_len = runner.config().row_len(),
        iterations = runner.config().iterations(),
        "Row normalisation benchmark starting"
    );

    let run = runner.run()?;
    let report = BenchmarkReport::from_run(&run);

    println!("{}", report.average_line());

    tracing::debug!("Report:\n{}", report.to_json());
    tracing::trace!("Summary:\n{}", report.to_markdown());

    Ok(())
}
