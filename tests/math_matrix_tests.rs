//! Tests for the dense matrix primitives.
//!
//! These tests verify the operations backing the normal-equation
//! solver:
//! - Transpose, multiplication and matrix-vector multiplication
//! - Inversion via LU decomposition with adjacent-swap pivoting
//! - Shape error reporting and cooperative cancellation
//!
//! ## Test Organization
//!
//! 1. **Transpose** - Known cases and the involution property
//! 2. **Multiplication** - Known cases and shape errors
//! 3. **Inverse** - Known cases, algebraic properties, failure modes
//! 4. **Cancellation** - Pre-cancelled tokens abort every operation

use approx::assert_relative_eq;

use regress_rs::math::matrix::{
    inverse, is_regular, multiply, multiply_by_vector, transpose,
};
use regress_rs::prelude::*;

fn m(rows: &[&[f64]]) -> Vec<Vec<f64>> {
    rows.iter().map(|r| r.to_vec()).collect()
}

fn assert_matrix_eq(got: &[Vec<f64>], want: &[Vec<f64>], epsilon: f64) {
    assert_eq!(got.len(), want.len());
    for (gr, wr) in got.iter().zip(want.iter()) {
        assert_eq!(gr.len(), wr.len());
        for (g, w) in gr.iter().zip(wr.iter()) {
            assert_relative_eq!(*g, *w, epsilon = epsilon);
        }
    }
}

// ============================================================================
// Transpose Tests
// ============================================================================

/// Transpose of a square matrix.
#[test]
fn test_transpose_square() {
    let x = m(&[
        &[3.0, 3.0, -4.0, -3.0],
        &[0.0, 6.0, 1.0, 1.0],
        &[5.0, 4.0, 2.0, 1.0],
        &[2.0, 3.0, 3.0, 2.0],
    ]);
    let want = m(&[
        &[3.0, 0.0, 5.0, 2.0],
        &[3.0, 6.0, 4.0, 3.0],
        &[-4.0, 1.0, 2.0, 3.0],
        &[-3.0, 1.0, 1.0, 2.0],
    ]);
    let got = transpose(&x, &CancelToken::default()).unwrap();
    assert_eq!(got, want);
}

/// Transpose of a rectangular matrix.
#[test]
fn test_transpose_rectangular() {
    let x = m(&[
        &[0.0, 1.0, -1.0, 1.0],
        &[2.0, 2.0, 0.0, -2.0],
        &[1.0, 1.0, -2.0, 0.0],
    ]);
    let want = m(&[
        &[0.0, 2.0, 1.0],
        &[1.0, 2.0, 1.0],
        &[-1.0, 0.0, -2.0],
        &[1.0, -2.0, 0.0],
    ]);
    let got = transpose(&x, &CancelToken::default()).unwrap();
    assert_eq!(got, want);
}

/// Transposing twice returns the original matrix exactly.
#[test]
fn test_transpose_involution() {
    let x = m(&[&[1.5, -2.0, 0.25], &[4.0, 0.0, -7.5]]);
    let token = CancelToken::default();
    let back = transpose(&transpose(&x, &token).unwrap(), &token).unwrap();
    assert_eq!(back, x);
}

/// Ragged and empty inputs are rejected.
#[test]
fn test_transpose_invalid_matrix() {
    let token = CancelToken::default();
    let ragged = vec![vec![1.0, 2.0], vec![3.0]];
    assert_eq!(
        transpose(&ragged, &token),
        Err(RegressionError::InvalidMatrix)
    );
    let empty: Vec<Vec<f64>> = Vec::new();
    assert_eq!(
        transpose(&empty, &token),
        Err(RegressionError::InvalidMatrix)
    );
}

/// Regularity check.
#[test]
fn test_is_regular() {
    assert!(is_regular(&m(&[&[1.0, 2.0], &[3.0, 4.0]])));
    assert!(!is_regular(&vec![vec![1.0, 2.0], vec![3.0]]));
    assert!(!is_regular::<f64>(&[]));
    assert!(!is_regular(&vec![Vec::<f64>::new()]));
}

// ============================================================================
// Multiplication Tests
// ============================================================================

/// Known 4x3 · 3x3 product.
#[test]
fn test_multiply_known_product() {
    let a = m(&[
        &[1.0, 0.0, 1.0],
        &[2.0, 1.0, 1.0],
        &[0.0, 1.0, 1.0],
        &[1.0, 1.0, 2.0],
    ]);
    let b = m(&[&[1.0, 2.0, 1.0], &[2.0, 3.0, 1.0], &[4.0, 2.0, 2.0]]);
    let want = m(&[
        &[5.0, 4.0, 3.0],
        &[8.0, 9.0, 5.0],
        &[6.0, 5.0, 3.0],
        &[11.0, 9.0, 6.0],
    ]);
    let got = multiply(&a, &b, &CancelToken::default()).unwrap();
    assert_eq!(got, want);
}

/// Incompatible shapes report both offending dimensions.
#[test]
fn test_multiply_dimension_mismatch() {
    let a = m(&[&[1.0, 2.0, 3.0]]);
    let b = m(&[&[1.0], &[2.0]]);
    assert_eq!(
        multiply(&a, &b, &CancelToken::default()),
        Err(RegressionError::DimensionMismatch {
            left_cols: 3,
            right_rows: 2,
        })
    );
}

/// Irregular operands fail before any arithmetic.
#[test]
fn test_multiply_invalid_matrix() {
    let regular = m(&[&[1.0, 2.0]]);
    let ragged = vec![vec![1.0, 2.0], vec![3.0]];
    let token = CancelToken::default();
    assert_eq!(
        multiply(&regular, &ragged, &token),
        Err(RegressionError::InvalidMatrix)
    );
    assert_eq!(
        multiply(&ragged, &regular, &token),
        Err(RegressionError::InvalidMatrix)
    );
}

/// Known matrix-vector product.
#[test]
fn test_multiply_by_vector_known_product() {
    let a = m(&[&[1.0, -1.0, 2.0], &[0.0, -3.0, 1.0]]);
    let v = [2.0, 1.0, 0.0];
    let got = multiply_by_vector(&a, &v, &CancelToken::default()).unwrap();
    assert_eq!(got, vec![1.0, -3.0]);
}

/// Vector length must match the column count.
#[test]
fn test_multiply_by_vector_dimension_mismatch() {
    let a = m(&[&[1.0, -1.0, 2.0]]);
    assert_eq!(
        multiply_by_vector(&a, &[1.0, 2.0], &CancelToken::default()),
        Err(RegressionError::DimensionMismatch {
            left_cols: 3,
            right_rows: 2,
        })
    );
}

// ============================================================================
// Inverse Tests
// ============================================================================

/// 4x4 inverse without zeros on the main diagonal.
#[test]
fn test_inverse_no_pivoting_needed() {
    let a = m(&[
        &[3.0, 3.0, -4.0, -3.0],
        &[0.0, 6.0, 1.0, 1.0],
        &[5.0, 4.0, 2.0, 1.0],
        &[2.0, 3.0, 3.0, 2.0],
    ]);
    let want = m(&[
        &[-7.0, 5.0, 12.0, -19.0],
        &[3.0, -2.0, -5.0, 8.0],
        &[41.0, -30.0, -69.0, 111.0],
        &[-59.0, 43.0, 99.0, -159.0],
    ]);
    let got = inverse(&a, &CancelToken::default()).unwrap();
    assert_matrix_eq(&got, &want, 1e-6);
}

/// 4x4 inverse requiring an adjacent-row swap for the zero on the main
/// diagonal.
#[test]
fn test_inverse_with_pivoting() {
    let a = m(&[
        &[0.0, 1.0, -1.0, 1.0],
        &[2.0, 2.0, 0.0, -2.0],
        &[1.0, 1.0, -2.0, 0.0],
        &[0.0, 1.0, 2.0, 0.0],
    ]);
    let want = m(&[
        &[-4.0, -2.0, 5.0, 3.0],
        &[2.0, 1.0, -2.0, -1.0],
        &[-1.0, -0.5, 1.0, 1.0],
        &[-2.0, -1.5, 3.0, 2.0],
    ]);
    let got = inverse(&a, &CancelToken::default()).unwrap();
    assert_matrix_eq(&got, &want, 1e-6);
}

/// A · A⁻¹ is the identity.
#[test]
fn test_inverse_times_original_is_identity() {
    let a = m(&[
        &[3.0, 3.0, -4.0, -3.0],
        &[0.0, 6.0, 1.0, 1.0],
        &[5.0, 4.0, 2.0, 1.0],
        &[2.0, 3.0, 3.0, 2.0],
    ]);
    let token = CancelToken::default();
    let inv = inverse(&a, &token).unwrap();
    let product = multiply(&a, &inv, &token).unwrap();
    for (i, row) in product.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            let want = if i == j { 1.0 } else { 0.0 };
            assert_relative_eq!(value, want, epsilon = 1e-6);
        }
    }
}

/// Inverting twice returns the original matrix.
#[test]
fn test_inverse_involution() {
    let a = m(&[
        &[3.0, 3.0, -4.0, -3.0],
        &[0.0, 6.0, 1.0, 1.0],
        &[5.0, 4.0, 2.0, 1.0],
        &[2.0, 3.0, 3.0, 2.0],
    ]);
    let token = CancelToken::default();
    let back = inverse(&inverse(&a, &token).unwrap(), &token).unwrap();
    assert_matrix_eq(&back, &a, 1e-6);
}

/// 1x1 inverse is the reciprocal.
#[test]
fn test_inverse_single_element() {
    let got = inverse(&m(&[&[4.0]]), &CancelToken::default()).unwrap();
    assert_relative_eq!(got[0][0], 0.25);
}

/// Non-square input is not invertible.
#[test]
fn test_inverse_non_square() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    assert_eq!(
        inverse(&a, &CancelToken::default()),
        Err(RegressionError::NonInvertible)
    );
}

/// A singular matrix is detected rather than producing NaN.
#[test]
fn test_inverse_singular() {
    let a = m(&[&[1.0, 1.0], &[1.0, 1.0]]);
    assert_eq!(
        inverse(&a, &CancelToken::default()),
        Err(RegressionError::NonInvertible)
    );
    let zeros = m(&[&[0.0, 0.0], &[0.0, 0.0]]);
    assert_eq!(
        inverse(&zeros, &CancelToken::default()),
        Err(RegressionError::NonInvertible)
    );
}

// ============================================================================
// Cancellation Tests
// ============================================================================

/// A pre-cancelled token aborts every primitive with `Cancelled`.
#[test]
fn test_operations_observe_cancellation() {
    let token = CancelToken::new();
    token.cancel();
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    assert_eq!(transpose(&a, &token), Err(RegressionError::Cancelled));
    assert_eq!(multiply(&a, &a, &token), Err(RegressionError::Cancelled));
    assert_eq!(
        multiply_by_vector(&a, &[1.0, 2.0], &token),
        Err(RegressionError::Cancelled)
    );
    assert_eq!(inverse(&a, &token), Err(RegressionError::Cancelled));
}
