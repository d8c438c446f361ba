//! Integration tests for generation and normalisation across whole matrices.
//!
//! These tests check that rows are normalised independently of one another
//! and that the public API composes the way the benchmark driver uses it.

use approx::assert_relative_eq;
use datatrans_core::rng::DataRng;
use datatrans_core::{generate_matrix, normalise_row, row_stats, Matrix, ResultMatrix};

/// Normalising one row leaves every other row of the input untouched.
#[test]
fn test_normalising_row_does_not_alter_others() {
    let input = generate_matrix(6, 256, &mut DataRng::from_seed(11)).unwrap();
    let snapshot = input.clone();

    let mut results = ResultMatrix::with_rows(input.n_rows());
    results.set(2, normalise_row(input.row(2)));

    assert_eq!(input, snapshot);
    for j in [0, 1, 3, 4, 5] {
        assert!(results.get(j).is_none());
    }
}

/// Identical input rows produce identical outputs, wherever they sit.
#[test]
fn test_identical_rows_identical_outputs() {
    let row: Vec<f64> = {
        let mut rng = DataRng::from_seed(3);
        let mut r = vec![0.0; 512];
        rng.fill_uniform(&mut r);
        r
    };
    let other: Vec<f64> = (0..512).map(|i| (i as f64).sin()).collect();

    let input = Matrix::from_rows(vec![row.clone(), other, row]).unwrap();

    let a = normalise_row(input.row(0));
    let b = normalise_row(input.row(2));
    assert_eq!(a, b);
}

/// Every row of a generated matrix normalises to mean ~0 and std ~1.
#[test]
fn test_full_matrix_normalisation() {
    let input = generate_matrix(32, 2_000, &mut DataRng::from_seed(2024)).unwrap();
    let mut results = ResultMatrix::with_rows(input.n_rows());

    for (j, row) in input.rows().iter().enumerate() {
        results.set(j, normalise_row(row));
    }

    assert_eq!(results.filled(), input.n_rows());
    for j in 0..input.n_rows() {
        let out = results.get(j).unwrap();
        assert_eq!(out.len(), input.row_len());
        assert!(out.iter().all(|v| v.is_finite()));

        let stats = row_stats(out);
        assert!(stats.mean.abs() < 1e-12, "row {} mean {}", j, stats.mean);
        assert_relative_eq!(stats.std_dev, 1.0, max_relative = 1e-12);
    }
}

/// Uniform [0, 1) rows have mean near 0.5 and std near 1/sqrt(12).
#[test]
fn test_generated_row_moments() {
    let input = generate_matrix(4, 60_000, &mut DataRng::from_seed(9)).unwrap();
    let expected_sd = 1.0 / 12.0_f64.sqrt();

    for row in input.rows() {
        let stats = row_stats(row);
        assert!((stats.mean - 0.5).abs() < 0.01, "mean {}", stats.mean);
        assert!((stats.std_dev - expected_sd).abs() < 0.01, "std {}", stats.std_dev);
    }
}

/// A constant row inside an otherwise random matrix only poisons its own output.
#[test]
fn test_constant_row_is_isolated() {
    let mut rows = generate_matrix(3, 100, &mut DataRng::from_seed(5))
        .unwrap()
        .into_rows();
    rows[1] = vec![5.0; 100];
    let input = Matrix::from_rows(rows).unwrap();

    let outputs: Vec<Vec<f64>> = input.rows().iter().map(|r| normalise_row(r)).collect();

    assert!(outputs[0].iter().all(|v| v.is_finite()));
    assert!(outputs[1].iter().all(|v| !v.is_finite()));
    assert!(outputs[2].iter().all(|v| v.is_finite()));
}
