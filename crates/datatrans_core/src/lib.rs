//! # datatrans_core: Data and Normalisation Layer
//!
//! ## Layer 1 (Foundation) Role
//!
//! datatrans_core is the bottom layer of the benchmark workspace, providing:
//! - Seeded uniform random generation (`rng`)
//! - The input and result matrices (`matrix`)
//! - Synthetic matrix generation (`generator`)
//! - Row z-score normalisation (`normalise`)
//! - Error types: `DataError` (`error`)
//!
//! Nothing here does I/O or timing; the driver lives in `datatrans_bench`.
//!
//! ## Usage Example
//!
//! ```rust
//! use datatrans_core::rng::DataRng;
//! use datatrans_core::{generate_matrix, normalise_row};
//!
//! let mut rng = DataRng::from_seed(42);
//! let input = generate_matrix(3, 1000, &mut rng).unwrap();
//!
//! let z = normalise_row(input.row(1));
//! assert_eq!(z.len(), input.row_len());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialise/deserialise `RowStats` and `MatrixShape`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod generator;
pub mod matrix;
pub mod normalise;
pub mod rng;

pub use error::DataError;
pub use generator::generate_matrix;
pub use matrix::{Matrix, MatrixShape, ResultMatrix};
pub use normalise::{normalise_row, normalise_row_in_place, normalise_row_into, row_stats, RowStats};
