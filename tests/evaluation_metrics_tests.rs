//! Tests for the accuracy metrics.
//!
//! These tests verify R² and classification accuracy over augmented
//! training matrices.
//!
//! ## Test Organization
//!
//! 1. **R²** - Perfect, partial, and degenerate fits
//! 2. **Classification** - Hit fractions

use approx::assert_relative_eq;

use regress_rs::evaluation::metrics::{classification_accuracy, r_squared, Metric};
use regress_rs::prelude::*;

// ============================================================================
// R² Tests
// ============================================================================

/// A perfect fit scores 1.
#[test]
fn test_r_squared_perfect_fit() {
    let x = vec![vec![1.0, 1.0], vec![1.0, 2.0], vec![1.0, 3.0]];
    let y = [3.0, 5.0, 7.0]; // y = 1 + 2x
    let r2 = r_squared(&LinearObjective, &x, &y, &[1.0, 2.0]).unwrap();
    assert_relative_eq!(r2, 1.0);
}

/// Hand-computed partial fit.
///
/// Predictions [1, 2, 3] against targets [2, 2, 3]: SSR = 1,
/// SST = 2/3, so R² = -0.5.
#[test]
fn test_r_squared_known_value() {
    let x = vec![vec![1.0, 1.0], vec![1.0, 2.0], vec![1.0, 3.0]];
    let y = [2.0, 2.0, 3.0];
    let r2 = r_squared(&LinearObjective, &x, &y, &[0.0, 1.0]).unwrap();
    assert_relative_eq!(r2, -0.5, epsilon = 1e-12);
}

/// Zero target variance is defined as a perfect score, not a division
/// by zero.
#[test]
fn test_r_squared_constant_targets() {
    let x = vec![vec![1.0, 1.0], vec![1.0, 2.0]];
    let y = [5.0, 5.0];
    let r2 = r_squared(&LinearObjective, &x, &y, &[5.0, 0.0]).unwrap();
    assert_relative_eq!(r2, 1.0);
}

// ============================================================================
// Classification Tests
// ============================================================================

/// Saturated sigmoid predictions round to their labels.
#[test]
fn test_classification_all_correct() {
    let x = vec![vec![1.0, -10.0], vec![1.0, 10.0]];
    let y = [0.0, 1.0];
    let accuracy = classification_accuracy(&LogisticObjective, &x, &y, &[0.0, 1.0]).unwrap();
    assert_relative_eq!(accuracy, 1.0);
}

/// One of two misclassified examples halves the accuracy.
#[test]
fn test_classification_half_correct() {
    let x = vec![vec![1.0, -10.0], vec![1.0, 10.0]];
    let y = [1.0, 1.0];
    let accuracy = classification_accuracy(&LogisticObjective, &x, &y, &[0.0, 1.0]).unwrap();
    assert_relative_eq!(accuracy, 0.5);
}

/// The metric selector dispatches to the right formula.
#[test]
fn test_metric_dispatch() {
    let x = vec![vec![1.0, -10.0], vec![1.0, 10.0]];
    let y = [0.0, 1.0];
    let accuracy = Metric::Classification
        .compute(&LogisticObjective, &x, &y, &[0.0, 1.0])
        .unwrap();
    assert_relative_eq!(accuracy, 1.0);

    let x = vec![vec![1.0, 1.0], vec![1.0, 2.0], vec![1.0, 3.0]];
    let y = [3.0, 5.0, 7.0];
    let r2 = Metric::RSquared
        .compute(&LinearObjective, &x, &y, &[1.0, 2.0])
        .unwrap();
    assert_relative_eq!(r2, 1.0);
}
