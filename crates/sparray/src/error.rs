//! Error types for sparse matrix operations
//!
//! Every fallible operation in this crate returns [`SparseResult`], with
//! [`SparseError`] covering the four failure classes of the indexing model:
//! shape specifications of the wrong arity, arguments that cannot be coerced
//! to the expected form, coordinates outside an axis, and paired arrays of
//! differing lengths.
//!
//! # Examples
//!
//! ```
//! use sparray::{SparseError, SparseMatrix};
//!
//! let m = SparseMatrix::<f64>::zeros((2, 2));
//! let err = m.get(0, 5).unwrap_err();
//! assert_eq!(
//!     err,
//!     SparseError::OutOfBounds { index: 5, axis: 1, extent: 2 }
//! );
//! ```

use thiserror::Error;

/// Errors raised by [`SparseMatrix`](crate::SparseMatrix) operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SparseError {
    /// Shape specification does not have exactly two components
    #[error("Invalid shape: expected 2 dimensions, got {got}")]
    InvalidShapeArity { got: usize },

    /// An argument cannot be coerced to the expected form
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: &'static str, got: String },

    /// A normalized coordinate falls outside `[0, extent)` on its axis
    #[error("Index {index} out of bounds for axis {axis} with extent {extent}")]
    OutOfBounds {
        index: i64,
        axis: usize,
        extent: usize,
    },

    /// Paired index or value arrays have differing lengths
    #[error("Shape mismatch: paired arrays have lengths {left} and {right}")]
    ShapeMismatch { left: usize, right: usize },
}

/// Result type alias for sparse matrix operations
pub type SparseResult<T> = Result<T, SparseError>;

impl SparseError {
    /// Create an out-of-bounds error for a coordinate on the given axis
    pub fn out_of_bounds(index: i64, axis: usize, extent: usize) -> Self {
        SparseError::OutOfBounds {
            index,
            axis,
            extent,
        }
    }

    /// Create a shape mismatch error for paired arrays
    pub fn shape_mismatch(left: usize, right: usize) -> Self {
        SparseError::ShapeMismatch { left, right }
    }
}
