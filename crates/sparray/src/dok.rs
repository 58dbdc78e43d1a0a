//! DOK (Dictionary Of Keys) format for 2D sparse matrices
//!
//! DOK keeps one map entry per explicitly assigned coordinate, which makes it
//! the natural format for incremental construction and random access. The
//! map is ordered, so iteration, rendering, and coordinate listings are
//! deterministic in row-major order.
//!
//! # Format
//!
//! For an m×n sparse matrix:
//! - `store`: `BTreeMap<(usize, usize), T>` - one entry per assigned coordinate
//! - `shape`: (m, n) - dimensions of the matrix, fixed for its lifetime
//!
//! An entry assigned the value zero stays in the store: the structure tracks
//! which coordinates were written, not which values are non-zero. Only
//! [`prune`](SparseMatrix::prune) removes keys.
//!
//! # Examples
//!
//! ```
//! use sparray::SparseMatrix;
//!
//! let mut m = SparseMatrix::zeros((5, 7));
//! m.set(0, 1, 1.0).unwrap();
//! m.set(1, 3, 5.2).unwrap();
//! m.set(3, 3, -0.2).unwrap();
//!
//! assert_eq!(m.nnz(), 3);
//! assert_eq!(m.get(1, 3).unwrap(), 5.2);
//! assert_eq!(m.get(2, 2).unwrap(), 0.0);
//!
//! // Negative indices count from the end of each axis
//! assert_eq!(m.get(-4, -4).unwrap(), 5.2);
//! ```

use crate::error::{SparseError, SparseResult};
use crate::indexing::normalize_index;
use ndarray::Array2;
use num_traits::Float;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Mul;

/// DOK (Dictionary Of Keys) sparse matrix
///
/// A fixed-shape 2-D container mapping coordinates to floating-point values.
/// Coordinates that were never assigned read as zero; coordinates assigned
/// zero remain stored entries until pruned.
///
/// The structure has no interior synchronization: sharing one instance across
/// threads for mutation requires external locking by the caller.
#[derive(Debug, Clone)]
pub struct SparseMatrix<T> {
    /// Stored entries keyed by (row, col); keys are always in-bounds
    store: BTreeMap<(usize, usize), T>,

    /// Shape: (nrows, ncols)
    shape: (usize, usize),
}

impl<T: Float> SparseMatrix<T> {
    /// Create an empty matrix with the given shape
    ///
    /// Degenerate shapes (zero rows and/or zero columns) are valid and
    /// produce a matrix of size 0 with no indexable coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparray::SparseMatrix;
    ///
    /// let m = SparseMatrix::<f64>::zeros((5, 7));
    /// assert_eq!(m.shape(), (5, 7));
    /// assert_eq!(m.size(), 35);
    /// assert_eq!(m.nnz(), 0);
    /// ```
    pub fn zeros(shape: (usize, usize)) -> Self {
        Self {
            store: BTreeMap::new(),
            shape,
        }
    }

    /// Create an empty matrix from a dynamically-sized shape specification
    ///
    /// # Errors
    ///
    /// - [`SparseError::InvalidShapeArity`] if `dims` does not have exactly
    ///   two components
    /// - [`SparseError::TypeMismatch`] if a component is negative
    ///
    /// # Examples
    ///
    /// ```
    /// use sparray::{SparseError, SparseMatrix};
    ///
    /// let m = SparseMatrix::<f64>::from_dims(&[5, 7]).unwrap();
    /// assert_eq!(m.shape(), (5, 7));
    ///
    /// let err = SparseMatrix::<f64>::from_dims(&[5]).unwrap_err();
    /// assert_eq!(err, SparseError::InvalidShapeArity { got: 1 });
    /// ```
    pub fn from_dims(dims: &[i64]) -> SparseResult<Self> {
        if dims.len() != 2 {
            return Err(SparseError::InvalidShapeArity { got: dims.len() });
        }
        let mut extents = [0usize; 2];
        for (axis, &dim) in dims.iter().enumerate() {
            extents[axis] = usize::try_from(dim).map_err(|_| SparseError::TypeMismatch {
                expected: "non-negative dimension",
                got: dim.to_string(),
            })?;
        }
        Ok(Self::zeros((extents[0], extents[1])))
    }

    /// Create a matrix from (row, col, value) triplets
    ///
    /// Coordinates may be negative and are normalized per axis. A later
    /// triplet at the same coordinate overwrites an earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`SparseError::OutOfBounds`] if any coordinate does not
    /// normalize into range.
    pub fn from_entries(shape: (usize, usize), entries: &[(i64, i64, T)]) -> SparseResult<Self> {
        let mut matrix = Self::zeros(shape);
        for &(row, col, value) in entries {
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Create a matrix from a dense array, storing every non-zero element
    pub fn from_dense(dense: &Array2<T>) -> Self {
        let mut matrix = Self::zeros(dense.dim());
        for ((row, col), &value) in dense.indexed_iter() {
            if value != T::zero() {
                matrix.store.insert((row, col), value);
            }
        }
        matrix
    }

    /// Number of stored entries
    ///
    /// A coordinate explicitly assigned zero counts; a coordinate that was
    /// never assigned does not.
    pub fn nnz(&self) -> usize {
        self.store.len()
    }

    /// Shape of the matrix (nrows, ncols)
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.shape.0
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.shape.1
    }

    /// Total element capacity: nrows × ncols
    pub fn size(&self) -> usize {
        self.shape.0 * self.shape.1
    }

    /// Number of dimensions, always 2
    pub fn ndim(&self) -> usize {
        2
    }

    /// Get the value at (row, col)
    ///
    /// Negative coordinates count from the end of their axis. Returns zero
    /// for a coordinate that is in range but has no stored entry.
    ///
    /// # Errors
    ///
    /// Returns [`SparseError::OutOfBounds`] if the normalized coordinate
    /// falls outside the shape on either axis.
    pub fn get(&self, row: i64, col: i64) -> SparseResult<T> {
        let row = normalize_index(row, 0, self.shape.0)?;
        let col = normalize_index(col, 1, self.shape.1)?;
        Ok(self.value_at(row, col))
    }

    /// Set the value at (row, col)
    ///
    /// Inserts a new entry or overwrites an existing one. Assigning zero
    /// still creates (or retains) the store entry; use
    /// [`prune`](Self::prune) to drop zero-valued entries.
    ///
    /// # Errors
    ///
    /// Returns [`SparseError::OutOfBounds`] if the normalized coordinate
    /// falls outside the shape on either axis. The store is not modified on
    /// failure.
    pub fn set(&mut self, row: i64, col: i64, value: T) -> SparseResult<()> {
        let row = normalize_index(row, 0, self.shape.0)?;
        let col = normalize_index(col, 1, self.shape.1)?;
        self.store.insert((row, col), value);
        Ok(())
    }

    /// Drop every stored entry whose value is exactly zero
    ///
    /// This is the only operation that removes keys from the store.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparray::SparseMatrix;
    ///
    /// let mut m = SparseMatrix::zeros((3, 3));
    /// m.set(0, 0, 2.5).unwrap();
    /// m.set(1, 1, 0.0).unwrap();
    /// assert_eq!(m.nnz(), 2);
    ///
    /// m.prune();
    /// assert_eq!(m.nnz(), 1);
    /// ```
    pub fn prune(&mut self) {
        self.store.retain(|_, value| *value != T::zero());
    }

    /// Iterate over stored entries as (row, col, value), row-major
    ///
    /// # Complexity
    ///
    /// O(nnz) for a full traversal, O(1) per step.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.store.iter().map(|(&(row, col), &value)| (row, col, value))
    }

    /// Materialize as a dense array
    ///
    /// # Complexity
    ///
    /// Time: O(nrows × ncols), Space: O(nrows × ncols)
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::zeros(self.shape);
        for (row, col, value) in self.iter_nonzero() {
            dense[(row, col)] = value;
        }
        dense
    }

    /// Stored value at an already-normalized coordinate, zero if absent
    pub(crate) fn value_at(&self, row: usize, col: usize) -> T {
        self.store
            .get(&(row, col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Insert at an already-normalized coordinate, bypassing validation
    pub(crate) fn insert_at(&mut self, row: usize, col: usize, value: T) {
        self.store.insert((row, col), value);
    }
}

/// Scalar multiplication: every stored entry is scaled, absent entries stay
/// absent, and the source is untouched. Stored zeros remain stored, so the
/// result has the same key set as the source.
impl<T: Float> Mul<T> for &SparseMatrix<T> {
    type Output = SparseMatrix<T>;

    fn mul(self, rhs: T) -> SparseMatrix<T> {
        SparseMatrix {
            store: self
                .store
                .iter()
                .map(|(&key, &value)| (key, value * rhs))
                .collect(),
            shape: self.shape,
        }
    }
}

impl<T: Float> Mul<T> for SparseMatrix<T> {
    type Output = SparseMatrix<T>;

    fn mul(self, rhs: T) -> SparseMatrix<T> {
        &self * rhs
    }
}

/// Renders a header line followed by one line per stored entry in ascending
/// (row, col) order.
///
/// # Examples
///
/// ```
/// use sparray::SparseMatrix;
///
/// let mut m = SparseMatrix::zeros((5, 7));
/// m.set(0, 1, 1.0).unwrap();
/// m.set(1, 3, 5.2).unwrap();
///
/// let expected = "SparseMatrix shape:(5, 7) non-zeros:2\n(0, 1) 1\n(1, 3) 5.2\n";
/// assert_eq!(m.to_string(), expected);
/// ```
impl<T: Float + fmt::Display> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "SparseMatrix shape:({}, {}) non-zeros:{}",
            self.shape.0, self.shape.1, self.nnz()
        )?;
        for (row, col, value) in self.iter_nonzero() {
            writeln!(f, "({}, {}) {}", row, col, value)?;
        }
        Ok(())
    }
}
