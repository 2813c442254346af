//! Tests for the normal-equation driver.
//!
//! These tests verify the analytical solver end to end:
//! - Exact recovery on noise-free data
//! - Coefficients and R² on the 97-example reference dataset
//! - Error propagation from the matrix primitives
//!
//! ## Test Organization
//!
//! 1. **Exact Fits** - Noise-free generating models
//! 2. **Reference Dataset** - Known coefficients and R²
//! 3. **Failures** - Ill-posed sets and cancellation

mod common;

use approx::assert_relative_eq;

use regress_rs::engine::analytical;
use regress_rs::prelude::*;

// ============================================================================
// Exact Fit Tests
// ============================================================================

/// A noise-free linear relation is recovered exactly.
#[test]
fn test_exact_linear_relation() {
    let x = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]];
    let y = vec![3.0, 5.0, 7.0, 9.0]; // y = 1 + 2x
    let ts = TrainingSet::new(x, y).unwrap();
    let fit = analytical::run(&ts, &CancelToken::default()).unwrap();
    assert_relative_eq!(fit.coefficients[0], 1.0, epsilon = 1e-9);
    assert_relative_eq!(fit.coefficients[1], 2.0, epsilon = 1e-9);
    assert_relative_eq!(fit.accuracy, 1.0, epsilon = 1e-9);
}

/// Two features, exact plane.
#[test]
fn test_exact_two_features() {
    let x = vec![
        vec![1.0, 2.0],
        vec![2.0, 1.0],
        vec![3.0, 3.0],
        vec![4.0, 1.0],
    ];
    // y = 0.5 + x1 - 2*x2
    let y: Vec<f64> = x.iter().map(|r| 0.5 + r[0] - 2.0 * r[1]).collect();
    let ts = TrainingSet::new(x, y).unwrap();
    let fit = analytical::run(&ts, &CancelToken::default()).unwrap();
    assert_relative_eq!(fit.coefficients[0], 0.5, epsilon = 1e-9);
    assert_relative_eq!(fit.coefficients[1], 1.0, epsilon = 1e-9);
    assert_relative_eq!(fit.coefficients[2], -2.0, epsilon = 1e-9);
}

// ============================================================================
// Reference Dataset Tests
// ============================================================================

/// Normal-equation training on the n=1, m=97 dataset matches the known
/// coefficients and coefficient of determination.
#[test]
fn test_reference_dataset() {
    let (x, y) = common::load_training_set("n1_m97.csv");
    let ts = TrainingSet::new(x, y).unwrap();
    let fit = analytical::run(&ts, &CancelToken::default()).unwrap();
    assert_relative_eq!(fit.coefficients[0], -3.896, epsilon = 1e-2);
    assert_relative_eq!(fit.coefficients[1], 1.193, epsilon = 1e-2);
    assert_relative_eq!(fit.accuracy, 0.702, epsilon = 1e-3);
}

// ============================================================================
// Failure Tests
// ============================================================================

/// Fewer examples than features is ill-posed.
#[test]
fn test_underdetermined_set_rejected() {
    let ts = TrainingSet::new(vec![vec![1.0, 2.0]], vec![5.0]).unwrap();
    assert_eq!(
        analytical::run(&ts, &CancelToken::default()),
        Err(RegressionError::InvalidTrainingSet)
    );
}

/// A pre-cancelled token aborts the solve chain.
#[test]
fn test_cancellation() {
    let ts = TrainingSet::new(vec![vec![1.0], vec![2.0]], vec![1.0, 2.0]).unwrap();
    let token = CancelToken::new();
    token.cancel();
    assert_eq!(
        analytical::run(&ts, &token),
        Err(RegressionError::Cancelled)
    );
}
