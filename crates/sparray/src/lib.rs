//! # sparray
//!
//! DOK (dictionary-of-keys) sparse matrices with NumPy-style indexing.
//!
//! This crate provides:
//! - [`SparseMatrix`]: a fixed-shape 2-D matrix storing only explicitly
//!   assigned entries in an ordered coordinate map
//! - Scalar get/set with negative-index normalization
//! - Fancy indexing over paired index arrays (gather/scatter)
//! - Slice and index-array sub-matrix extraction
//! - Reductions: sum, mean, diagonal, stored-coordinate listing
//!
//! Assigning zero to a coordinate keeps it in the store; structural
//! occupancy and numeric value are tracked separately, and only an explicit
//! [`prune`](SparseMatrix::prune) compacts the store.
//!
//! # Examples
//!
//! ```
//! use sparray::SparseMatrix;
//!
//! let mut m: SparseMatrix<f64> = SparseMatrix::zeros((5, 7));
//! m.set(0, 1, 1.0).unwrap();
//! m.set(1, 3, 5.2).unwrap();
//! m.set(-1, -3, 12.2).unwrap(); // (4, 4)
//!
//! assert_eq!(m.nnz(), 3);
//! assert!((m.sum() - 18.4).abs() < 1e-10);
//!
//! let sub = m.extract([0, 1], ..).unwrap();
//! assert_eq!(sub.shape(), (2, 7));
//! assert_eq!(sub.nnz(), 2);
//! ```

#![deny(warnings)]

pub mod dok;
pub mod error;
pub mod indexing;
pub mod reductions;

// Re-exports
pub use dok::SparseMatrix;
pub use error::{SparseError, SparseResult};
pub use indexing::AxisIndex;
