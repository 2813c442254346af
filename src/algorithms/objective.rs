//! Hypothesis and cost functions for the supported model families.
//!
//! ## Purpose
//!
//! This module defines the capability interface the gradient-descent
//! machinery is parameterized over: a hypothesis (prediction) function
//! and its matching cost function. The engine never knows which model
//! family it is fitting; linear and logistic regression plug in here.
//!
//! ## Design notes
//!
//! * **Values, not inheritance**: an `Objective` is passed into the
//!   engine by reference; steppers and convergers stay generic.
//! * **Length discipline**: `evaluate` expects the feature vector to be
//!   already augmented with the dummy feature, so its length equals the
//!   coefficient count; anything else is `InvalidFeatureVector`.
//!
//! ## Key concepts
//!
//! * **Linear**: h(x) = θ·x, least-mean-squares cost Σ(h−y)²/2m.
//! * **Logistic**: h(x) = 1/(1+e^(−θ·x)), cross-entropy cost
//!   Σ(−y·ln h − (1−y)·ln(1−h))/m.
//!
//! ## Non-goals
//!
//! * This module does not implement regularized variants.
//! * This module does not clip or otherwise guard the sigmoid; callers
//!   relying on extreme inputs get IEEE semantics.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;

// ============================================================================
// Objective Trait
// ============================================================================

/// Hypothesis/cost pair driving gradient descent for one model family.
pub trait Objective<T: Float> {
    /// Evaluate the hypothesis for one (augmented) feature vector.
    fn evaluate(&self, x: &[T], coefficients: &[T]) -> Result<T, RegressionError>;

    /// Evaluate the cost over a whole (augmented) design matrix.
    fn cost(&self, x: &[Vec<T>], y: &[T], coefficients: &[T]) -> Result<T, RegressionError>;
}

fn dot<T: Float>(x: &[T], coefficients: &[T]) -> Result<T, RegressionError> {
    if x.len() != coefficients.len() {
        return Err(RegressionError::InvalidFeatureVector {
            expected: coefficients.len(),
            got: x.len(),
        });
    }
    let mut z = T::zero();
    for i in 0..coefficients.len() {
        z = z + x[i] * coefficients[i];
    }
    Ok(z)
}

// ============================================================================
// Linear Objective
// ============================================================================

/// Identity-linear hypothesis with least-mean-squares cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearObjective;

impl<T: Float> Objective<T> for LinearObjective {
    fn evaluate(&self, x: &[T], coefficients: &[T]) -> Result<T, RegressionError> {
        dot(x, coefficients)
    }

    fn cost(&self, x: &[Vec<T>], y: &[T], coefficients: &[T]) -> Result<T, RegressionError> {
        let m = x.len();
        let mut c = T::zero();
        for i in 0..m {
            let h = self.evaluate(&x[i], coefficients)?;
            let d = h - y[i];
            c = c + d * d;
        }
        Ok(c / T::from(2 * m).unwrap_or_else(T::one))
    }
}

// ============================================================================
// Logistic Objective
// ============================================================================

/// Sigmoid-linear hypothesis with cross-entropy cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogisticObjective;

impl<T: Float> Objective<T> for LogisticObjective {
    fn evaluate(&self, x: &[T], coefficients: &[T]) -> Result<T, RegressionError> {
        let z = dot(x, coefficients)?;
        Ok(T::one() / (T::one() + (-z).exp()))
    }

    fn cost(&self, x: &[Vec<T>], y: &[T], coefficients: &[T]) -> Result<T, RegressionError> {
        let m = x.len();
        let mut c = T::zero();
        for i in 0..m {
            let h = self.evaluate(&x[i], coefficients)?;
            c = c - y[i] * h.ln() - (T::one() - y[i]) * (T::one() - h).ln();
        }
        Ok(c / T::from(m).unwrap_or_else(T::one))
    }
}
