//! Property-based tests for the DOK sparse matrix
//!
//! These tests use proptest to verify indexing and reduction semantics
//! against dense baselines built with plain array assignment.

use ndarray::Array2;
use proptest::prelude::*;
use sparray::SparseMatrix;

// ============================================================================
// Test Utilities
// ============================================================================

// Type alias for sparse matrix strategy return type to reduce complexity
type SparseMatrixData = (Vec<(usize, usize)>, Vec<f64>, (usize, usize));

/// Generate a random sparse 2D matrix as coordinate/value lists with
/// controlled entry count (duplicate coordinates overwrite, as in the DOK)
fn sparse_matrix_strategy(
    nrows: usize,
    ncols: usize,
    max_nnz: usize,
) -> impl Strategy<Value = SparseMatrixData> {
    prop::collection::vec((0..nrows, 0..ncols), 0..=max_nnz).prop_flat_map(move |indices| {
        let len = indices.len();
        (
            Just(indices),
            prop::collection::vec(-100.0..100.0f64, len..=len),
            Just((nrows, ncols)),
        )
    })
}

/// Build the matrix and its dense baseline with identical assignment order
fn build_pair(data: &SparseMatrixData) -> (SparseMatrix<f64>, Array2<f64>) {
    let (indices, values, shape) = data;
    let mut matrix = SparseMatrix::zeros(*shape);
    let mut dense = Array2::zeros(*shape);
    for (&(i, j), &v) in indices.iter().zip(values) {
        matrix.set(i as i64, j as i64, v).unwrap();
        dense[(i, j)] = v;
    }
    (matrix, dense)
}

// ============================================================================
// Indexing Properties
// ============================================================================

proptest! {
    /// Property: every coordinate reads back the dense baseline value
    #[test]
    fn prop_get_matches_dense(data in sparse_matrix_strategy(10, 10, 30)) {
        let (matrix, dense) = build_pair(&data);
        for i in 0..10 {
            for j in 0..10 {
                let got = matrix.get(i as i64, j as i64).unwrap();
                prop_assert!((got - dense[(i, j)]).abs() < 1e-9);
            }
        }
    }

    /// Property: negative indices are equivalent to end-relative positives
    #[test]
    fn prop_negative_index_equivalence(data in sparse_matrix_strategy(8, 8, 20)) {
        let (matrix, _) = build_pair(&data);
        for i in 0..8i64 {
            for j in 0..8i64 {
                prop_assert_eq!(
                    matrix.get(i - 8, j - 8).unwrap(),
                    matrix.get(i, j).unwrap()
                );
            }
        }
    }

    /// Property: overwriting a coordinate never changes nnz
    #[test]
    fn prop_overwrite_keeps_nnz(
        data in sparse_matrix_strategy(6, 6, 15),
        value in -100.0..100.0f64,
    ) {
        let (mut matrix, _) = build_pair(&data);
        let nnz = matrix.nnz();
        let (rows, cols) = matrix.nonzero();
        for (&i, &j) in rows.iter().zip(&cols) {
            matrix.set(i, j, value).unwrap();
            prop_assert_eq!(matrix.nnz(), nnz);
        }
    }

    /// Property: assigning zero retains the entry and zeroes the read
    #[test]
    fn prop_zero_write_retains_entry(data in sparse_matrix_strategy(6, 6, 15)) {
        let (mut matrix, _) = build_pair(&data);
        let nnz = matrix.nnz();
        let (rows, cols) = matrix.nonzero();
        for (&i, &j) in rows.iter().zip(&cols) {
            matrix.set(i, j, 0.0).unwrap();
            prop_assert_eq!(matrix.get(i, j).unwrap(), 0.0);
        }
        prop_assert_eq!(matrix.nnz(), nnz);
    }

    /// Property: a clone is fully independent of its source
    #[test]
    fn prop_clone_independence(data in sparse_matrix_strategy(6, 6, 15)) {
        let (mut matrix, _) = build_pair(&data);
        let clone = matrix.clone();
        let before = clone.to_dense();

        matrix.set(0, 0, 555.0).unwrap();
        matrix.set(5, 5, -555.0).unwrap();

        let after = clone.to_dense();
        for i in 0..6 {
            for j in 0..6 {
                prop_assert_eq!(before[(i, j)], after[(i, j)]);
            }
        }
    }

    /// Property: gathering the nonzero coordinates recovers the full sum
    #[test]
    fn prop_nonzero_gather_recovers_sum(data in sparse_matrix_strategy(10, 10, 30)) {
        let (matrix, _) = build_pair(&data);
        let (rows, cols) = matrix.nonzero();
        prop_assert_eq!(rows.len(), matrix.nnz());

        let gathered = matrix.gather(&rows, &cols).unwrap();
        prop_assert!((gathered.sum() - matrix.sum()).abs() < 1e-9);
    }

    /// Property: full-slice extraction is a value-for-value copy
    #[test]
    fn prop_full_extract_is_identity(data in sparse_matrix_strategy(8, 8, 20)) {
        let (matrix, dense) = build_pair(&data);
        let extracted = matrix.extract(.., ..).unwrap();
        prop_assert_eq!(extracted.shape(), matrix.shape());
        prop_assert_eq!(extracted.nnz(), matrix.nnz());

        let back = extracted.to_dense();
        for i in 0..8 {
            for j in 0..8 {
                prop_assert!((back[(i, j)] - dense[(i, j)]).abs() < 1e-9);
            }
        }
    }

    /// Property: sub_array agrees with scalar gets over its index grid
    #[test]
    fn prop_sub_array_matches_scalar_gets(
        data in sparse_matrix_strategy(8, 8, 20),
        rows in prop::collection::vec(0..8i64, 1..5),
        cols in prop::collection::vec(0..8i64, 1..5),
    ) {
        let (matrix, _) = build_pair(&data);
        let sub = matrix.sub_array(&rows, &cols).unwrap();
        prop_assert_eq!(sub.shape(), (rows.len(), cols.len()));

        for (i, &row) in rows.iter().enumerate() {
            for (j, &col) in cols.iter().enumerate() {
                prop_assert_eq!(
                    sub.get(i as i64, j as i64).unwrap(),
                    matrix.get(row, col).unwrap()
                );
            }
        }
    }

    /// Property: slice and index-array axis forms extract the same values
    #[test]
    fn prop_axis_forms_agree(data in sparse_matrix_strategy(8, 8, 20)) {
        let (matrix, _) = build_pair(&data);
        let all_rows: Vec<i64> = (0..8).collect();

        let by_slice = matrix.extract(.., 2..6).unwrap();
        let by_array = matrix.extract(all_rows, [2, 3, 4, 5]).unwrap();

        prop_assert_eq!(by_slice.shape(), by_array.shape());
        prop_assert_eq!(by_slice.nnz(), by_array.nnz());
        for i in 0..8 {
            for j in 0..4 {
                prop_assert_eq!(
                    by_slice.get(i, j).unwrap(),
                    by_array.get(i, j).unwrap()
                );
            }
        }
    }
}

// ============================================================================
// Reduction and Transform Properties
// ============================================================================

proptest! {
    /// Property: sum equals the dense baseline sum
    #[test]
    fn prop_sum_matches_dense(data in sparse_matrix_strategy(10, 10, 30)) {
        let (matrix, dense) = build_pair(&data);
        prop_assert!((matrix.sum() - dense.sum()).abs() < 1e-9);
    }

    /// Property: mean is sum over capacity
    #[test]
    fn prop_mean_is_sum_over_size(data in sparse_matrix_strategy(10, 10, 30)) {
        let (matrix, _) = build_pair(&data);
        let expected = matrix.sum() / matrix.size() as f64;
        prop_assert!((matrix.mean() - expected).abs() < 1e-9);
    }

    /// Property: diag agrees with scalar gets on the main diagonal
    #[test]
    fn prop_diag_matches_gets(data in sparse_matrix_strategy(10, 10, 30)) {
        let (matrix, _) = build_pair(&data);
        let diag = matrix.diag();
        prop_assert_eq!(diag.len(), 10);
        for k in 0..10 {
            prop_assert_eq!(diag[k], matrix.get(k as i64, k as i64).unwrap());
        }
    }

    /// Property: scalar multiplication scales values and preserves structure
    #[test]
    fn prop_scalar_mul(
        data in sparse_matrix_strategy(8, 8, 20),
        factor in -10.0..10.0f64,
    ) {
        let (matrix, dense) = build_pair(&data);
        let scaled = &matrix * factor;

        prop_assert_eq!(scaled.shape(), matrix.shape());
        prop_assert_eq!(scaled.nnz(), matrix.nnz());

        let scaled_dense = scaled.to_dense();
        for i in 0..8 {
            for j in 0..8 {
                prop_assert!((scaled_dense[(i, j)] - dense[(i, j)] * factor).abs() < 1e-9);
            }
        }

        // The source is untouched
        let source_dense = matrix.to_dense();
        for i in 0..8 {
            for j in 0..8 {
                prop_assert_eq!(source_dense[(i, j)], dense[(i, j)]);
            }
        }
    }

    /// Property: dense conversion round-trips after pruning stored zeros
    #[test]
    fn prop_dense_roundtrip(data in sparse_matrix_strategy(8, 8, 20)) {
        let (mut matrix, _) = build_pair(&data);
        matrix.prune();

        let dense = matrix.to_dense();
        let back = SparseMatrix::from_dense(&dense);

        prop_assert_eq!(back.shape(), matrix.shape());
        prop_assert_eq!(back.nnz(), matrix.nnz());
        for i in 0..8 {
            for j in 0..8 {
                prop_assert_eq!(
                    back.get(i, j).unwrap(),
                    matrix.get(i, j).unwrap()
                );
            }
        }
    }
}
