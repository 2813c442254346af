//! Accuracy metrics for trained models.
//!
//! ## Purpose
//!
//! This module computes the residual-based accuracy attached to a model
//! after training: the coefficient of determination for continuous
//! targets and the classification accuracy for discrete ones.
//!
//! ## Design notes
//!
//! * **Metric as a value**: drivers select the metric with the `Metric`
//!   enum; the formulas themselves are free functions usable directly.
//! * **Zero-variance targets**: when SST is zero every prediction error
//!   is relative to a constant target; R² is defined as 1 in that case
//!   rather than dividing by zero.
//!
//! ## Key concepts
//!
//! * **R²**: `1 − SSR/SST`, `SSR = Σ(y_i − ŷ_i)²`,
//!   `SST = Σ(y_i − ȳ)²`.
//! * **Classification accuracy**: fraction of examples where the
//!   rounded hypothesis equals the target.
//!
//! ## Non-goals
//!
//! * This module does not compute precision/recall or multi-class
//!   metrics.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::objective::Objective;
use crate::primitives::errors::RegressionError;

// ============================================================================
// Metric Selection
// ============================================================================

/// Accuracy metric attached to a trained model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Coefficient of determination, for continuous targets.
    RSquared,

    /// Fraction of correctly classified examples, for discrete targets.
    Classification,
}

impl Metric {
    /// Compute this metric over an (augmented) training matrix.
    pub fn compute<T: Float, O: Objective<T>>(
        &self,
        objective: &O,
        x: &[Vec<T>],
        y: &[T],
        coefficients: &[T],
    ) -> Result<T, RegressionError> {
        match self {
            Self::RSquared => r_squared(objective, x, y, coefficients),
            Self::Classification => classification_accuracy(objective, x, y, coefficients),
        }
    }
}

// ============================================================================
// Formulas
// ============================================================================

/// Coefficient of determination of the hypothesis over the training
/// set.
pub fn r_squared<T: Float, O: Objective<T>>(
    objective: &O,
    x: &[Vec<T>],
    y: &[T],
    coefficients: &[T],
) -> Result<T, RegressionError> {
    let m = T::from(y.len()).unwrap_or_else(T::one);
    let mut mean = T::zero();
    for &v in y {
        mean = mean + v;
    }
    mean = mean / m;

    let mut ssr = T::zero();
    let mut sst = T::zero();
    for (row, &target) in x.iter().zip(y.iter()) {
        let predicted = objective.evaluate(row, coefficients)?;
        let r = target - predicted;
        ssr = ssr + r * r;
        let d = target - mean;
        sst = sst + d * d;
    }
    if sst == T::zero() {
        return Ok(T::one());
    }
    Ok(T::one() - ssr / sst)
}

/// Fraction of examples whose rounded hypothesis equals the target.
pub fn classification_accuracy<T: Float, O: Objective<T>>(
    objective: &O,
    x: &[Vec<T>],
    y: &[T],
    coefficients: &[T],
) -> Result<T, RegressionError> {
    let mut hits = T::zero();
    for (row, &target) in x.iter().zip(y.iter()) {
        let predicted = objective.evaluate(row, coefficients)?;
        if predicted.round() == target {
            hits = hits + T::one();
        }
    }
    Ok(hits / T::from(y.len()).unwrap_or_else(T::one))
}
