//! Row-major matrix of independent `f64` rows.
//!
//! The input matrix is built once and then only read: rows are handed to the
//! normaliser as shared slices. The [`ResultMatrix`] holds one output slot per
//! input row and is overwritten on every benchmark pass.

use crate::error::DataError;

/// Shape of a matrix as (rows, entries per row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixShape {
    /// Number of rows.
    pub n_rows: usize,
    /// Number of entries in every row.
    pub row_len: usize,
}

impl MatrixShape {
    /// Total number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_rows * self.row_len
    }

    /// Returns true if the shape holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Approximate heap footprint of the entries in bytes.
    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.len() * std::mem::size_of::<f64>()
    }
}

/// Rectangular collection of rows, immutable once built.
///
/// # Examples
///
/// ```rust
/// use datatrans_core::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(m.n_rows(), 2);
/// assert_eq!(m.row(1), &[3.0, 4.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
    row_len: usize,
}

impl Matrix {
    /// Builds a matrix from rows, checking it is non-empty and rectangular.
    ///
    /// # Errors
    ///
    /// - [`DataError::EmptyMatrix`] if there are no rows or the rows are empty
    /// - [`DataError::RaggedRow`] if any row's length differs from row 0
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DataError> {
        let row_len = rows.first().map(Vec::len).unwrap_or(0);
        if row_len == 0 {
            return Err(DataError::EmptyMatrix);
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != row_len) {
            return Err(DataError::RaggedRow {
                index,
                expected: row_len,
                actual: row.len(),
            });
        }
        Ok(Self { rows, row_len })
    }

    /// Number of rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of entries in every row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.row_len
    }

    /// Shape of the matrix.
    #[inline]
    pub fn shape(&self) -> MatrixShape {
        MatrixShape {
            n_rows: self.n_rows(),
            row_len: self.row_len,
        }
    }

    /// Row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= n_rows()`.
    #[inline]
    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }

    /// All rows in order.
    #[inline]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Consumes the matrix, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}

/// Output matrix with one slot per input row.
///
/// A slot is `None` until its row has been normalised at least once. Slots
/// are replaced wholesale on each write; earlier contents are dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultMatrix {
    slots: Vec<Option<Vec<f64>>>,
}

impl ResultMatrix {
    /// Creates `n_rows` empty slots.
    pub fn with_rows(n_rows: usize) -> Self {
        Self {
            slots: vec![None; n_rows],
        }
    }

    /// Creates a result matrix whose slots start as copies of `input`.
    ///
    /// Used when rows are normalised in place.
    pub fn seeded_from(input: &Matrix) -> Self {
        Self {
            slots: input.rows().iter().cloned().map(Some).collect(),
        }
    }

    /// Number of slots.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.slots.len()
    }

    /// Stores `row` in slot `index`, replacing any previous contents.
    #[inline]
    pub fn set(&mut self, index: usize, row: Vec<f64>) {
        self.slots[index] = Some(row);
    }

    /// Row in slot `index`, if it has been written.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&[f64]> {
        self.slots.get(index).and_then(|slot| slot.as_deref())
    }

    /// Mutable access to the slots, for bulk and parallel writes.
    #[inline]
    pub fn slots_mut(&mut self) -> &mut [Option<Vec<f64>>] {
        &mut self.slots
    }

    /// Number of slots that have been written.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
