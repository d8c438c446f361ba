//! End-to-end tests for the benchmark protocol.
//!
//! The reduced-shape tests exercise the same generate -> warm-up -> timed
//! loop -> report path as the binary. The reference-shape run and the binary
//! itself are `#[ignore]`d: they allocate about 1 GB and take minutes in a
//! debug build. Run them with `cargo test --release -- --ignored`.

use datatrans_bench::prelude::*;
use datatrans_core::row_stats;

fn reduced(mode: ExecutionMode, strategy: NormaliseStrategy) -> BenchmarkConfig {
    BenchmarkConfig::builder()
        .n_rows(64)
        .row_len(6_000)
        .iterations(4)
        .seed(20_240_601)
        .mode(mode)
        .strategy(strategy)
        .build()
        .expect("valid reduced configuration")
}

fn assert_normalised(run: &BenchmarkRun) {
    assert_eq!(run.results.filled(), run.input.n_rows());
    for j in 0..run.input.n_rows() {
        let out = run.results.get(j).expect("every slot written");
        assert_eq!(out.len(), run.input.row_len());
        assert!(out.iter().all(|v| v.is_finite()), "row {} has non-finite entries", j);

        let stats = row_stats(out);
        assert!(stats.mean.abs() < 1e-10, "row {} mean {}", j, stats.mean);
        assert!((stats.std_dev - 1.0).abs() < 1e-10, "row {} std {}", j, stats.std_dev);
    }
}

#[test]
fn test_reduced_protocol_all_variants() {
    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        for strategy in [NormaliseStrategy::Copying, NormaliseStrategy::InPlace] {
            let run = BenchmarkRunner::new(reduced(mode, strategy))
                .run()
                .expect("benchmark run");

            assert_normalised(&run);
            assert!(run.average_ns() > 0.0);
            assert_eq!(run.timing.laps_ns.len(), 4);

            let report = BenchmarkReport::from_run(&run);
            assert_eq!(report.mode, mode);
            assert_eq!(report.strategy, strategy);
            assert_eq!(report.shape.n_rows, 64);
        }
    }
}

#[test]
fn test_report_line_shape() {
    let run = BenchmarkRunner::new(reduced(
        ExecutionMode::Sequential,
        NormaliseStrategy::Copying,
    ))
    .run()
    .unwrap();
    let line = BenchmarkReport::from_run(&run).average_line();

    let value = line
        .strip_prefix("Average time: ")
        .expect("line prefix")
        .parse::<f64>()
        .expect("numeric value");
    assert!(value > 0.0);
    assert!((value - run.average_ns()).abs() < 1e-6);
}

#[test]
fn test_unseeded_run_records_its_seed() {
    let config = BenchmarkConfig::builder()
        .n_rows(3)
        .row_len(10)
        .iterations(1)
        .build()
        .unwrap();
    let first = BenchmarkRunner::new(config).run().unwrap();

    let replay = BenchmarkConfig::builder()
        .n_rows(3)
        .row_len(10)
        .iterations(1)
        .seed(first.seed)
        .build()
        .unwrap();
    let second = BenchmarkRunner::new(replay).run().unwrap();

    assert_eq!(first.input, second.input);
    assert_eq!(first.results, second.results);
}

#[test]
#[ignore = "allocates the reference 1024 x 60000 matrices; run with --release --ignored"]
fn test_reference_protocol() {
    let run = BenchmarkRunner::with_defaults().run().expect("benchmark run");

    assert_eq!(run.input.n_rows(), 1024);
    assert_eq!(run.input.row_len(), 60_000);
    assert_eq!(run.timing.iterations, 20);
    assert!(run.average_ns() > 0.0);
    assert_normalised(&run);
}

#[test]
#[ignore = "runs the full binary at the reference size; run with --release --ignored"]
fn test_binary_prints_single_line() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_datatrans"))
        .output()
        .expect("spawn datatrans");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Average time: "));
}
