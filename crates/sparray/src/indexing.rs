//! Indexing and sub-matrix extraction
//!
//! Each axis of an indexing operation is described by an [`AxisIndex`]: a
//! single coordinate, an explicit index sequence, or a half-open slice. The
//! axis form is resolved to concrete positions once, before any dispatch or
//! mutation, so a batch operation either validates completely or leaves the
//! matrix untouched.
//!
//! Coordinates are signed: `-1` refers to the last position of an axis, as
//! in NumPy. Slices clamp to the axis like Python slices; explicit index
//! sequences are bounds-checked element by element.
//!
//! # Examples
//!
//! ```
//! use sparray::SparseMatrix;
//!
//! let m = SparseMatrix::from_entries(
//!     (5, 7),
//!     &[(0, 1, 1.0), (1, 3, 5.2), (3, 3, -0.2), (0, 6, -1.23), (4, 4, 12.2)],
//! )
//! .unwrap();
//!
//! // Rows by index array, all columns
//! let sub = m.extract([0, 1, 3], ..).unwrap();
//! assert_eq!(sub.shape(), (3, 7));
//! assert_eq!(sub.nnz(), 4);
//! assert_eq!(sub.get(2, 3).unwrap(), -0.2);
//!
//! // Paired index arrays, one value per pair
//! let values = m.gather(&[0, 1, 3], &[1, 3, 3]).unwrap();
//! assert_eq!(values[0], 1.0);
//! assert_eq!(values[1], 5.2);
//! ```

use crate::dok::SparseMatrix;
use crate::error::{SparseError, SparseResult};
use ndarray::Array1;
use num_traits::Float;
use std::collections::HashMap;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

/// Normalize a possibly-negative coordinate against an axis extent
///
/// Negative values count from the end of the axis. The normalized value
/// must land in `[0, extent)`.
pub(crate) fn normalize_index(index: i64, axis: usize, extent: usize) -> SparseResult<usize> {
    let shifted = if index < 0 {
        index + extent as i64
    } else {
        index
    };
    if shifted < 0 || shifted >= extent as i64 {
        return Err(SparseError::OutOfBounds {
            index,
            axis,
            extent,
        });
    }
    Ok(shifted as usize)
}

/// Clamp a slice bound to `[0, extent]`, normalizing negatives first
fn clamp_bound(bound: i64, extent: usize) -> usize {
    let shifted = if bound < 0 {
        bound + extent as i64
    } else {
        bound
    };
    shifted.clamp(0, extent as i64) as usize
}

/// Index specification for one axis of a matrix
///
/// The three forms mirror NumPy's scalar, fancy, and slice indexing.
/// `From` conversions cover the common call-site shapes: integers, index
/// arrays, and range literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisIndex {
    /// A single coordinate, possibly negative
    Index(i64),

    /// An explicit index sequence; order and duplicates are preserved
    Indices(Vec<i64>),

    /// A half-open `start..end` slice; `None` bounds take the axis edge
    Slice {
        start: Option<i64>,
        end: Option<i64>,
    },
}

impl AxisIndex {
    /// The full-axis slice (`..`)
    pub fn full() -> Self {
        AxisIndex::Slice {
            start: None,
            end: None,
        }
    }

    /// Resolve to concrete positions along an axis of the given extent
    ///
    /// Scalar and array forms are bounds-checked and fail with
    /// [`SparseError::OutOfBounds`]; slice bounds clamp to the axis.
    pub fn resolve(&self, axis: usize, extent: usize) -> SparseResult<Vec<usize>> {
        match self {
            AxisIndex::Index(index) => Ok(vec![normalize_index(*index, axis, extent)?]),
            AxisIndex::Indices(indices) => indices
                .iter()
                .map(|&index| normalize_index(index, axis, extent))
                .collect(),
            AxisIndex::Slice { start, end } => {
                let lo = clamp_bound(start.unwrap_or(0), extent);
                let hi = clamp_bound(end.unwrap_or(extent as i64), extent);
                if hi <= lo {
                    return Ok(Vec::new());
                }
                Ok((lo..hi).collect())
            }
        }
    }
}

impl From<i64> for AxisIndex {
    fn from(index: i64) -> Self {
        AxisIndex::Index(index)
    }
}

impl From<Vec<i64>> for AxisIndex {
    fn from(indices: Vec<i64>) -> Self {
        AxisIndex::Indices(indices)
    }
}

impl From<&[i64]> for AxisIndex {
    fn from(indices: &[i64]) -> Self {
        AxisIndex::Indices(indices.to_vec())
    }
}

impl<const N: usize> From<[i64; N]> for AxisIndex {
    fn from(indices: [i64; N]) -> Self {
        AxisIndex::Indices(indices.to_vec())
    }
}

impl From<Range<i64>> for AxisIndex {
    fn from(range: Range<i64>) -> Self {
        AxisIndex::Slice {
            start: Some(range.start),
            end: Some(range.end),
        }
    }
}

impl From<RangeFrom<i64>> for AxisIndex {
    fn from(range: RangeFrom<i64>) -> Self {
        AxisIndex::Slice {
            start: Some(range.start),
            end: None,
        }
    }
}

impl From<RangeTo<i64>> for AxisIndex {
    fn from(range: RangeTo<i64>) -> Self {
        AxisIndex::Slice {
            start: None,
            end: Some(range.end),
        }
    }
}

impl From<RangeFull> for AxisIndex {
    fn from(_: RangeFull) -> Self {
        AxisIndex::full()
    }
}

/// Map each distinct source position to the result positions selecting it.
/// Duplicate selections fan one source entry out to several result cells.
fn selection_positions(selected: &[usize]) -> HashMap<usize, Vec<usize>> {
    let mut positions: HashMap<usize, Vec<usize>> = HashMap::new();
    for (result_pos, &source_pos) in selected.iter().enumerate() {
        positions.entry(source_pos).or_default().push(result_pos);
    }
    positions
}

impl<T: Float> SparseMatrix<T> {
    /// Read one value per (row, col) pair of the paired index arrays
    ///
    /// Values come back in input order; an absent coordinate reads as zero.
    ///
    /// # Errors
    ///
    /// - [`SparseError::ShapeMismatch`] if the arrays differ in length
    /// - [`SparseError::OutOfBounds`] if any element fails to normalize into
    ///   range, including any request against a zero-sized axis
    pub fn gather(&self, rows: &[i64], cols: &[i64]) -> SparseResult<Array1<T>> {
        if rows.len() != cols.len() {
            return Err(SparseError::shape_mismatch(rows.len(), cols.len()));
        }
        let mut values = Vec::with_capacity(rows.len());
        for (&row, &col) in rows.iter().zip(cols) {
            let row = normalize_index(row, 0, self.nrows())?;
            let col = normalize_index(col, 1, self.ncols())?;
            values.push(self.value_at(row, col));
        }
        Ok(Array1::from_vec(values))
    }

    /// Assign one value per (row, col) pair of the paired index arrays
    ///
    /// All three slices must have equal length. Every coordinate is
    /// validated before the first insertion, so a failing call leaves the
    /// store unchanged.
    ///
    /// # Errors
    ///
    /// - [`SparseError::ShapeMismatch`] if the slice lengths differ
    /// - [`SparseError::OutOfBounds`] if any coordinate fails to normalize
    pub fn scatter(&mut self, rows: &[i64], cols: &[i64], values: &[T]) -> SparseResult<()> {
        if values.len() != rows.len() {
            return Err(SparseError::shape_mismatch(rows.len(), values.len()));
        }
        let coords = self.normalize_pairs(rows, cols)?;
        for (&(row, col), &value) in coords.iter().zip(values) {
            self.insert_at(row, col, value);
        }
        Ok(())
    }

    /// Assign a single value to every (row, col) pair of the index arrays
    ///
    /// Broadcast form of [`scatter`](Self::scatter), with the same
    /// validate-then-mutate discipline.
    pub fn scatter_value(&mut self, rows: &[i64], cols: &[i64], value: T) -> SparseResult<()> {
        let coords = self.normalize_pairs(rows, cols)?;
        for (row, col) in coords {
            self.insert_at(row, col, value);
        }
        Ok(())
    }

    /// Validate paired index arrays and normalize them to store coordinates
    fn normalize_pairs(&self, rows: &[i64], cols: &[i64]) -> SparseResult<Vec<(usize, usize)>> {
        if rows.len() != cols.len() {
            return Err(SparseError::shape_mismatch(rows.len(), cols.len()));
        }
        rows.iter()
            .zip(cols)
            .map(|(&row, &col)| {
                Ok((
                    normalize_index(row, 0, self.nrows())?,
                    normalize_index(col, 1, self.ncols())?,
                ))
            })
            .collect()
    }

    /// Extract the sub-matrix selected by one [`AxisIndex`] per axis
    ///
    /// The result has shape `(selected rows, selected cols)`. Only
    /// coordinates stored in the source (zero-valued or not) become stored
    /// entries of the result; structurally absent positions stay absent.
    /// Which axis uses which index form does not change the outcome.
    ///
    /// # Complexity
    ///
    /// O(nnz + selection) expected, times the selection multiplicity when
    /// an index appears more than once.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparray::SparseMatrix;
    ///
    /// let mut m = SparseMatrix::zeros((5, 7));
    /// m.set(1, 3, 5.2).unwrap();
    /// m.set(3, 3, -0.2).unwrap();
    ///
    /// let col = m.extract(.., [3]).unwrap();
    /// assert_eq!(col.shape(), (5, 1));
    /// assert_eq!(col.nnz(), 2);
    /// assert_eq!(col.get(1, 0).unwrap(), 5.2);
    /// ```
    pub fn extract(
        &self,
        rows: impl Into<AxisIndex>,
        cols: impl Into<AxisIndex>,
    ) -> SparseResult<SparseMatrix<T>> {
        let row_sel = rows.into().resolve(0, self.nrows())?;
        let col_sel = cols.into().resolve(1, self.ncols())?;
        Ok(self.select(&row_sel, &col_sel))
    }

    /// Copy stored entries inside an already-resolved selection
    fn select(&self, row_sel: &[usize], col_sel: &[usize]) -> SparseMatrix<T> {
        let mut result = SparseMatrix::zeros((row_sel.len(), col_sel.len()));
        let row_positions = selection_positions(row_sel);
        let col_positions = selection_positions(col_sel);
        for (row, col, value) in self.iter_nonzero() {
            if let (Some(row_targets), Some(col_targets)) =
                (row_positions.get(&row), col_positions.get(&col))
            {
                for &i in row_targets {
                    for &j in col_targets {
                        result.insert_at(i, j, value);
                    }
                }
            }
        }
        result
    }

    /// Extract the sub-matrix at the cross product of two index sequences
    ///
    /// `result[(i, j)]` equals `self[(rows[i], cols[j])]`, and the result
    /// stores exactly the source-stored entries that fall inside the
    /// selection. An empty sequence on either axis yields a `(0, 0)` result
    /// regardless of the source shape.
    ///
    /// # Errors
    ///
    /// Returns [`SparseError::OutOfBounds`] if any index fails to normalize.
    pub fn sub_array(&self, rows: &[i64], cols: &[i64]) -> SparseResult<SparseMatrix<T>> {
        if rows.is_empty() || cols.is_empty() {
            return Ok(SparseMatrix::zeros((0, 0)));
        }
        self.extract(rows, cols)
    }

    /// Write a source matrix over the selection described by two axis specs
    ///
    /// The selection grid must match the source shape. Stored entries of the
    /// source are written to their mapped coordinates; positions the source
    /// leaves absent are left untouched, mirroring the stored-entry rule of
    /// [`extract`](Self::extract).
    ///
    /// # Errors
    ///
    /// - [`SparseError::OutOfBounds`] if an axis spec fails to resolve
    /// - [`SparseError::ShapeMismatch`] if the selection and source shapes
    ///   differ on either axis
    pub fn assign(
        &mut self,
        rows: impl Into<AxisIndex>,
        cols: impl Into<AxisIndex>,
        source: &SparseMatrix<T>,
    ) -> SparseResult<()> {
        let row_sel = rows.into().resolve(0, self.nrows())?;
        let col_sel = cols.into().resolve(1, self.ncols())?;
        if row_sel.len() != source.nrows() {
            return Err(SparseError::shape_mismatch(row_sel.len(), source.nrows()));
        }
        if col_sel.len() != source.ncols() {
            return Err(SparseError::shape_mismatch(col_sel.len(), source.ncols()));
        }
        for (row, col, value) in source.iter_nonzero() {
            self.insert_at(row_sel[row], col_sel[col], value);
        }
        Ok(())
    }
}
