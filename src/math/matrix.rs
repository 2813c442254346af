//! Dense matrix primitives.
//!
//! ## Purpose
//!
//! This module provides the dense linear-algebra operations backing the
//! normal-equation solver: transpose, matrix and matrix-vector
//! multiplication, and inversion via LU decomposition with partial
//! pivoting.
//!
//! ## Design notes
//!
//! * **Row-major `Vec` rows**: a matrix is a slice of equally long
//!   rows. Every entry point re-checks regularity; ragged or empty
//!   input fails with `InvalidMatrix` before any arithmetic.
//! * **Adjacent-swap pivoting**: the decomposition swaps the current
//!   row with the next row only while the diagonal entry is exactly
//!   zero, scanning forward from the pivot row. This is sufficient for
//!   well-conditioned inputs but is not a general-purpose numerically
//!   stable inverse; some singular or degenerate matrices are only
//!   detected when a zero pivot survives the scan.
//! * **Cancellation checkpoints**: every operation polls the token
//!   before each outer-loop iteration (row, column, or decomposition
//!   step). An in-flight inner loop always runs to completion.
//!
//! ## Key concepts
//!
//! * **LU factors in place**: L is stored under the main diagonal with
//!   an implicit unit diagonal; U on and above it.
//! * **Column-by-column solve**: the inverse solves `A·X = P` (P the
//!   row-permuted identity) by forward/back substitution per column.
//!
//! ## Invariants
//!
//! * Output shapes: `transpose` is n×m for m×n input, `multiply` is
//!   m×p for m×n · n×p, `inverse` matches its square input.
//! * Inputs are never mutated.
//!
//! ## Non-goals
//!
//! * This module does not implement sparse storage or blocked/parallel
//!   multiplication.
//! * This module does not fall back to a stabler factorization for
//!   ill-conditioned input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::cancellation::CancelToken;
use crate::primitives::errors::RegressionError;

// ============================================================================
// Shape Checks
// ============================================================================

/// Whether the matrix is non-empty with equally long, non-empty rows.
pub fn is_regular<T: Float>(m: &[Vec<T>]) -> bool {
    if m.is_empty() {
        return false;
    }
    let n = m[0].len();
    n > 0 && m.iter().all(|row| row.len() == n)
}

fn check_regular<T: Float>(m: &[Vec<T>]) -> Result<(), RegressionError> {
    if is_regular(m) {
        Ok(())
    } else {
        Err(RegressionError::InvalidMatrix)
    }
}

// ============================================================================
// Transpose and Multiplication
// ============================================================================

/// Transpose a regular matrix.
pub fn transpose<T: Float>(
    m: &[Vec<T>],
    token: &CancelToken,
) -> Result<Vec<Vec<T>>, RegressionError> {
    check_regular(m)?;
    let rows = m.len();
    let cols = m[0].len();
    let mut t = vec![vec![T::zero(); rows]; cols];
    for (j, t_row) in t.iter_mut().enumerate() {
        token.checkpoint()?;
        for i in 0..rows {
            t_row[i] = m[i][j];
        }
    }
    Ok(t)
}

/// Multiply two regular matrices.
///
/// Fails with `DimensionMismatch` when the left operand's column count
/// does not equal the right operand's row count.
pub fn multiply<T: Float>(
    a: &[Vec<T>],
    b: &[Vec<T>],
    token: &CancelToken,
) -> Result<Vec<Vec<T>>, RegressionError> {
    check_regular(a)?;
    check_regular(b)?;
    let inner = a[0].len();
    if inner != b.len() {
        return Err(RegressionError::DimensionMismatch {
            left_cols: inner,
            right_rows: b.len(),
        });
    }
    let cols = b[0].len();
    let mut c = vec![vec![T::zero(); cols]; a.len()];
    for (i, c_row) in c.iter_mut().enumerate() {
        token.checkpoint()?;
        for j in 0..cols {
            let mut s = T::zero();
            for k in 0..inner {
                s = s + a[i][k] * b[k][j];
            }
            c_row[j] = s;
        }
    }
    Ok(c)
}

/// Multiply a regular matrix by a column vector.
pub fn multiply_by_vector<T: Float>(
    a: &[Vec<T>],
    v: &[T],
    token: &CancelToken,
) -> Result<Vec<T>, RegressionError> {
    check_regular(a)?;
    let inner = a[0].len();
    if inner != v.len() {
        return Err(RegressionError::DimensionMismatch {
            left_cols: inner,
            right_rows: v.len(),
        });
    }
    let mut w = vec![T::zero(); a.len()];
    for (i, out) in w.iter_mut().enumerate() {
        token.checkpoint()?;
        let mut s = T::zero();
        for k in 0..inner {
            s = s + a[i][k] * v[k];
        }
        *out = s;
    }
    Ok(w)
}

// ============================================================================
// Inverse
// ============================================================================

/// Invert a square regular matrix via LU decomposition with partial
/// pivoting restricted to adjacent-row swaps.
///
/// Fails with `NonInvertible` for non-square input or when a zero pivot
/// survives the forward swap scan (singular under this algorithm).
pub fn inverse<T: Float>(
    m: &[Vec<T>],
    token: &CancelToken,
) -> Result<Vec<Vec<T>>, RegressionError> {
    check_regular(m)?;
    let n = m.len();
    if m[0].len() != n {
        return Err(RegressionError::NonInvertible);
    }

    let mut a: Vec<Vec<T>> = m.to_vec();

    // p is a permutation of the identity, tracking the row swaps.
    let mut p = vec![vec![T::zero(); n]; n];
    for (i, row) in p.iter_mut().enumerate() {
        row[i] = T::one();
    }

    // Decompose a = plu: L below the main diagonal (implicit unit
    // diagonal), U on and above it.
    for k in 0..n.saturating_sub(1) {
        token.checkpoint()?;
        // Pivoting: swap with the next row while the diagonal entry is
        // exactly zero, scanning forward from the pivot row.
        for _ in k..n - 1 {
            if a[k][k] != T::zero() {
                break;
            }
            a.swap(k, k + 1);
            p.swap(k, k + 1);
        }
        if a[k][k] == T::zero() {
            return Err(RegressionError::NonInvertible);
        }
        // Elimination.
        for i in k + 1..n {
            let factor = a[i][k] / a[k][k];
            a[i][k] = factor;
            for j in k + 1..n {
                a[i][j] = a[i][j] - factor * a[k][j];
            }
        }
    }
    if a[n - 1][n - 1] == T::zero() {
        return Err(RegressionError::NonInvertible);
    }

    let mut r = vec![vec![T::zero(); n]; n];
    // b is a column of the permuted identity, x the matching column of
    // the inverse. Solve n systems a·x = b.
    let mut x = vec![T::zero(); n];
    for i in 0..n {
        token.checkpoint()?;
        // Forward substitution; dividing by the unit diagonal of L is
        // omitted.
        x[0] = p[0][i];
        for k in 1..n {
            let mut s = T::zero();
            for j in 0..k {
                s = s + a[k][j] * x[j];
            }
            x[k] = p[k][i] - s;
        }
        // Back substitution.
        x[n - 1] = x[n - 1] / a[n - 1][n - 1];
        for k in (0..n - 1).rev() {
            let mut s = T::zero();
            for j in k + 1..n {
                s = s + a[k][j] * x[j];
            }
            x[k] = (x[k] - s) / a[k][k];
        }
        // Write the column into the result.
        for j in 0..n {
            r[j][i] = x[j];
        }
    }
    Ok(r)
}
