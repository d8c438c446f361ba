//! Row z-score normalisation.
//!
//! Every entry `x` of a row becomes `(x - mean) / std_dev`, where `mean` is the
//! arithmetic mean of the row and `std_dev` its population standard deviation
//! (divisor `n`, not `n - 1`).
//!
//! # Pass Structure
//!
//! All variants run the same three passes over the row:
//!
//! 1. copy (or read) each entry while accumulating the sum; `mean = sum / n`
//! 2. overwrite each entry with its deviation `x - mean`, accumulating the
//!    squared deviation; `std_dev = sqrt(ssd / n)`
//! 3. divide each stored deviation by `std_dev`
//!
//! Deviations are computed once and reused in the third pass, so the result
//! is bit-for-bit identical across [`normalise_row`], [`normalise_row_into`]
//! and [`normalise_row_in_place`].
//!
//! # Constant Rows
//!
//! A constant row has `std_dev == 0`. The third pass then divides `0 / 0`
//! and every output entry is NaN. This is not guarded against; check
//! [`RowStats::is_degenerate`] if it matters to the caller.
//!
//! # Examples
//!
//! ```rust
//! use datatrans_core::normalise::normalise_row;
//!
//! let z = normalise_row(&[1.0_f64, 2.0, 3.0]);
//! assert!((z[0] + 1.224744871391589).abs() < 1e-12);
//! assert_eq!(z[1], 0.0);
//! assert!((z[2] - 1.224744871391589).abs() < 1e-12);
//! ```

use num_traits::Float;

/// Mean and population standard deviation of a row.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowStats<T> {
    /// Arithmetic mean.
    pub mean: T,
    /// Population standard deviation (divisor `n`).
    pub std_dev: T,
}

impl<T: Float> RowStats<T> {
    /// True when the row was constant, so its normalised entries are NaN.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.std_dev == T::zero()
    }
}

#[inline]
fn count<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

/// Normalises `input` into a freshly allocated row.
///
/// This is the reference form timed by the benchmark: one allocation per
/// call, input untouched.
pub fn normalise_row<T: Float>(input: &[T]) -> Vec<T> {
    let mut out = vec![T::zero(); input.len()];
    normalise_row_into(input, &mut out);
    out
}

/// Normalises `input` into `out`, returning the row statistics.
///
/// # Panics
///
/// Panics if `input` and `out` differ in length.
pub fn normalise_row_into<T: Float>(input: &[T], out: &mut [T]) -> RowStats<T> {
    assert_eq!(
        input.len(),
        out.len(),
        "output row length must match input row length"
    );
    let n = count::<T>(input.len());

    let mut sum = T::zero();
    for (d, &x) in out.iter_mut().zip(input) {
        *d = x;
        sum = sum + x;
    }
    let mean = sum / n;

    let std_dev = centre(out, mean, n);
    scale(out, std_dev);

    RowStats { mean, std_dev }
}

/// Normalises `row` in place, returning the statistics of its prior values.
pub fn normalise_row_in_place<T: Float>(row: &mut [T]) -> RowStats<T> {
    let n = count::<T>(row.len());

    let mut sum = T::zero();
    for &x in row.iter() {
        sum = sum + x;
    }
    let mean = sum / n;

    let std_dev = centre(row, mean, n);
    scale(row, std_dev);

    RowStats { mean, std_dev }
}

/// Mean and population standard deviation of `row` without writing output.
pub fn row_stats<T: Float>(row: &[T]) -> RowStats<T> {
    let n = count::<T>(row.len());

    let mut sum = T::zero();
    for &x in row {
        sum = sum + x;
    }
    let mean = sum / n;

    let mut ssd = T::zero();
    for &x in row {
        let ev = x - mean;
        ssd = ssd + ev * ev;
    }

    RowStats {
        mean,
        std_dev: (ssd / n).sqrt(),
    }
}

/// Second pass: replaces each entry by its deviation from `mean` and returns
/// the population standard deviation.
#[inline]
fn centre<T: Float>(row: &mut [T], mean: T, n: T) -> T {
    let mut ssd = T::zero();
    for d in row.iter_mut() {
        let ev = *d - mean;
        ssd = ssd + ev * ev;
        *d = ev;
    }
    (ssd / n).sqrt()
}

/// Third pass.
#[inline]
fn scale<T: Float>(row: &mut [T], std_dev: T) {
    for d in row.iter_mut() {
        *d = *d / std_dev;
    }
}
