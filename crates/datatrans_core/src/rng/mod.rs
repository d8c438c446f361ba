//! # Random Number Generation
//!
//! Seeded pseudo-random generation for synthetic benchmark data.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator is constructed from an explicit
//!   `u64` seed; there is no hidden process-wide source
//! - **Efficiency**: batch operations write into `&mut [f64]` slices with no
//!   allocation
//!
//! ## Usage Example
//!
//! ```rust
//! use datatrans_core::rng::DataRng;
//!
//! let mut rng = DataRng::from_seed(12345);
//!
//! // Uniform values in [0, 1)
//! let value = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&value));
//!
//! // Batch generation into a pre-allocated row
//! let mut row = vec![0.0; 1000];
//! rng.fill_uniform(&mut row);
//! ```

mod prng;

pub use prng::DataRng;
