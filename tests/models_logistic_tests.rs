//! Tests for the logistic regression model wrapper.
//!
//! These tests verify binary classification end to end:
//! - Training on separable data, with and without scaling
//! - Class and probability prediction
//! - Label validation and `NotTrained` behavior
//!
//! ## Test Organization
//!
//! 1. **Separable Data** - Fit, predict, accuracy
//! 2. **Scaling** - Prediction through stored parameters
//! 3. **Validation** - Labels, untrained queries

use approx::assert_relative_eq;

use regress_rs::prelude::*;

fn separable_data() -> (Vec<Vec<f64>>, Vec<f64>) {
    (
        vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]],
        vec![0.0, 0.0, 1.0, 1.0],
    )
}

// ============================================================================
// Separable Data Tests
// ============================================================================

/// A separable set is classified perfectly.
#[test]
fn test_fit_separable() {
    let (x, y) = separable_data();
    let options = TrainingOptions::new()
        .learning_rate(0.1)
        .convergence(ConvergencePolicy::Iterative(5000));
    let mut model = LogisticRegression::gradient_descent(options);
    model.fit(&x, &y).unwrap();
    assert!(model.is_trained());
    assert_relative_eq!(model.accuracy().unwrap(), 1.0);
    assert_eq!(model.predict(&[1.0]).unwrap(), 0.0);
    assert_eq!(model.predict(&[4.0]).unwrap(), 1.0);
    assert_eq!(model.predict(&[3.5]).unwrap(), 1.0);
}

/// Probabilities order with the feature and straddle the boundary.
#[test]
fn test_predict_proba() {
    let (x, y) = separable_data();
    let options = TrainingOptions::new()
        .learning_rate(0.1)
        .convergence(ConvergencePolicy::Iterative(5000));
    let mut model = LogisticRegression::gradient_descent(options);
    model.fit(&x, &y).unwrap();
    let low = model.predict_proba(&[1.0]).unwrap();
    let high = model.predict_proba(&[4.0]).unwrap();
    assert!(low < 0.5, "p(1.0) = {}", low);
    assert!(high > 0.5, "p(4.0) = {}", high);
    assert!(low < high);
    let coefficients = model.coefficients().unwrap();
    assert_eq!(coefficients.len(), 2);
    // Positive slope: larger features push towards class 1.
    assert!(coefficients[1] > 0.0);
}

// ============================================================================
// Scaling Tests
// ============================================================================

/// Standardized training still answers raw-space queries.
#[test]
fn test_fit_with_standardization() {
    let (x, y) = separable_data();
    let options = TrainingOptions::new()
        .learning_rate(0.5)
        .convergence(ConvergencePolicy::Iterative(2000))
        .scaling(ScalingTechnique::Standardization);
    let mut model = LogisticRegression::gradient_descent(options);
    model.fit(&x, &y).unwrap();
    assert_relative_eq!(model.accuracy().unwrap(), 1.0);
    assert_eq!(model.predict(&[1.0]).unwrap(), 0.0);
    assert_eq!(model.predict(&[4.0]).unwrap(), 1.0);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Non-binary labels are rejected before training.
#[test]
fn test_invalid_labels() {
    let x = vec![vec![1.0], vec![2.0]];
    let y = vec![0.5, 2.0];
    let options = TrainingOptions::new();
    let mut model = LogisticRegression::gradient_descent(options);
    assert_eq!(model.fit(&x, &y), Err(RegressionError::InvalidTrainingSet));
    assert!(!model.is_trained());
}

/// Every accessor fails with `NotTrained` before fitting.
#[test]
fn test_untrained_queries() {
    let model = LogisticRegression::<f64>::gradient_descent(TrainingOptions::new());
    assert_eq!(model.predict(&[1.0]), Err(RegressionError::NotTrained));
    assert_eq!(model.predict_proba(&[1.0]), Err(RegressionError::NotTrained));
    assert_eq!(model.accuracy(), Err(RegressionError::NotTrained));
    assert_eq!(
        model.coefficients().err(),
        Some(RegressionError::NotTrained)
    );
}
