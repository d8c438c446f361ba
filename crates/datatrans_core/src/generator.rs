//! Synthetic matrix generation.

use crate::error::DataError;
use crate::matrix::Matrix;
use crate::rng::DataRng;

/// Generates an `n_rows` x `row_len` matrix of uniform [0, 1) values.
///
/// Rows are filled in order from `rng`, so a given seed and shape always
/// produce the same matrix. The whole matrix is allocated up front:
/// `n_rows * row_len * 8` bytes.
///
/// # Errors
///
/// Returns [`DataError::InvalidDimensions`] if either dimension is zero.
///
/// # Examples
///
/// ```rust
/// use datatrans_core::generate_matrix;
/// use datatrans_core::rng::DataRng;
///
/// let mut rng = DataRng::from_seed(42);
/// let m = generate_matrix(4, 100, &mut rng).unwrap();
/// assert_eq!(m.n_rows(), 4);
/// assert!(m.row(0).iter().all(|&v| (0.0..1.0).contains(&v)));
/// ```
pub fn generate_matrix(n_rows: usize, row_len: usize, rng: &mut DataRng) -> Result<Matrix, DataError> {
    if n_rows == 0 || row_len == 0 {
        return Err(DataError::InvalidDimensions { n_rows, row_len });
    }

    let rows = (0..n_rows)
        .map(|_| {
            let mut row = vec![0.0; row_len];
            rng.fill_uniform(&mut row);
            row
        })
        .collect();

    Matrix::from_rows(rows)
}
