//! Normal-equation solver.
//!
//! ## Purpose
//!
//! This module is the analytical entry point of the engine: it computes
//! linear-regression coefficients in closed form,
//! `θ = (XᵗX)⁻¹ Xᵗ y`, and attaches the coefficient of determination.
//!
//! ## Design notes
//!
//! * **Primitive chain**: transpose → multiply → inverse → multiply →
//!   multiply-by-vector, each step cancellation-aware; any primitive
//!   failure aborts the chain and is propagated verbatim.
//! * **No partial results**: a failed step yields no coefficients.
//!
//! ## Key concepts
//!
//! * **Dummy augmentation**: the intercept column is prepended before
//!   solving, so the coefficient vector has one more entry than the raw
//!   feature count.
//!
//! ## Non-goals
//!
//! * This module does not regularize; a singular `XᵗX` surfaces as
//!   `NonInvertible`.
//! * This module does not handle discrete targets.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::objective::LinearObjective;
use crate::engine::validator::Validator;
use crate::evaluation::metrics::r_squared;
use crate::math::matrix::{inverse, multiply, multiply_by_vector, transpose};
use crate::primitives::cancellation::CancelToken;
use crate::primitives::errors::RegressionError;
use crate::primitives::training::TrainingSet;

// ============================================================================
// Driver
// ============================================================================

/// Result of an analytical solve.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticalFit<T: Float> {
    /// Coefficients including the intercept term.
    pub coefficients: Vec<T>,

    /// Coefficient of determination over the training set.
    pub accuracy: T,
}

/// Train linear-regression coefficients by solving the normal equation.
pub fn run<T: Float>(
    ts: &TrainingSet<T>,
    token: &CancelToken,
) -> Result<AnalyticalFit<T>, RegressionError> {
    Validator::validate_training_set(ts)?;
    let mut augmented = ts.clone();
    augmented.add_dummy_feature();
    let x = augmented.design_matrix();
    let y = augmented.target_vector();
    let coefficients = solve_normal_equation(x, y, token)?;
    let accuracy = r_squared(&LinearObjective, x, y, &coefficients)?;
    Ok(AnalyticalFit {
        coefficients,
        accuracy,
    })
}

/// Solve the normal equation for an augmented design matrix.
///
/// The normal equation minimizes the least-squares cost by explicitly
/// taking its derivatives with respect to the coefficients and setting
/// them to zero.
pub fn solve_normal_equation<T: Float>(
    x: &[Vec<T>],
    y: &[T],
    token: &CancelToken,
) -> Result<Vec<T>, RegressionError> {
    let xt = transpose(x, token)?;
    let p = multiply(&xt, x, token)?;
    let p = inverse(&p, token)?;
    let p = multiply(&p, &xt, token)?;
    multiply_by_vector(&p, y, token)
}
