//! Reductions over the stored entries of a matrix
//!
//! Global reductions run in O(nnz): absent coordinates contribute zero, so
//! only the store needs traversing. `mean` divides by the element capacity,
//! not the entry count, and a zero-size matrix yields NaN rather than an
//! error.
//!
//! # Examples
//!
//! ```
//! use sparray::SparseMatrix;
//!
//! let mut m = SparseMatrix::zeros((5, 7));
//! m.set(0, 1, 1.0).unwrap();
//! m.set(1, 3, 5.0).unwrap();
//!
//! assert_eq!(m.sum(), 6.0);
//! assert_eq!(m.diag().len(), 5);
//!
//! let (rows, cols) = m.nonzero();
//! assert_eq!(rows, vec![0, 1]);
//! assert_eq!(cols, vec![1, 3]);
//! ```

use crate::dok::SparseMatrix;
use ndarray::Array1;
use num_traits::Float;

impl<T: Float> SparseMatrix<T> {
    /// Sum of all elements
    ///
    /// Absent coordinates contribute zero, so this is the sum of stored
    /// values. Empty and zero-size matrices sum to zero.
    ///
    /// # Complexity
    ///
    /// O(nnz)
    pub fn sum(&self) -> T {
        self.iter_nonzero()
            .fold(T::zero(), |acc, (_, _, value)| acc + value)
    }

    /// Arithmetic mean over all elements: `sum() / size()`
    ///
    /// For a zero-size matrix this is 0/0, which is NaN.
    pub fn mean(&self) -> T {
        match T::from(self.size()) {
            Some(denominator) => self.sum() / denominator,
            None => T::nan(),
        }
    }

    /// Main diagonal as a dense array of length `min(nrows, ncols)`
    ///
    /// Entry `k` is the value at `(k, k)`, zero if absent. Empty for a 0×0
    /// matrix.
    pub fn diag(&self) -> Array1<T> {
        let len = self.nrows().min(self.ncols());
        Array1::from_shape_fn(len, |k| self.value_at(k, k))
    }

    /// Coordinates of every stored entry as parallel (rows, cols) sequences
    ///
    /// Stored zeros are present: the sequences list which coordinates
    /// occupy the store, not which values are non-zero. Row-major order,
    /// matching [`iter_nonzero`](Self::iter_nonzero). The output feeds
    /// directly back into [`gather`](Self::gather).
    pub fn nonzero(&self) -> (Vec<i64>, Vec<i64>) {
        let mut rows = Vec::with_capacity(self.nnz());
        let mut cols = Vec::with_capacity(self.nnz());
        for (row, col, _) in self.iter_nonzero() {
            rows.push(row as i64);
            cols.push(col as i64);
        }
        (rows, cols)
    }

    /// Fraction of the element capacity occupied by stored entries
    ///
    /// Zero for a zero-size matrix.
    pub fn density(&self) -> f64 {
        if self.size() == 0 {
            return 0.0;
        }
        self.nnz() as f64 / self.size() as f64
    }
}
