//! Gradient-descent driver.
//!
//! ## Purpose
//!
//! This module is the numerical entry point of the engine: it prepares
//! the training data (scaling, dummy augmentation), wires a stepper to
//! the convergence controller, and attaches the accuracy metric to the
//! result.
//!
//! ## Design notes
//!
//! * **Scale first, then augment**: scaling parameters are computed on
//!   the raw feature columns, so their length equals the raw feature
//!   count; the dummy column is prepended afterwards and never scaled.
//! * **Objective-agnostic**: the model family enters purely through the
//!   injected `Objective` and the chosen accuracy `Metric`.
//! * **Accuracy in the trained space**: the metric is evaluated against
//!   the scaled, augmented matrix the coefficients live in; predictions
//!   for the original examples are unchanged because prediction scales
//!   raw inputs with the returned parameters first.
//!
//! ## Non-goals
//!
//! * This module does not retry after `CannotConverge`; choosing a
//!   smaller learning rate is the caller's call.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::converger::converge;
use crate::algorithms::objective::Objective;
use crate::algorithms::stepper::GradientStepper;
use crate::engine::options::TrainingOptions;
use crate::engine::validator::Validator;
use crate::evaluation::metrics::Metric;
use crate::math::scaling::{scale_design_matrix, ScalingParams, ScalingResult};
use crate::primitives::cancellation::CancelToken;
use crate::primitives::errors::RegressionError;
use crate::primitives::training::TrainingSet;

// ============================================================================
// Driver
// ============================================================================

/// Result of a gradient-descent solve.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericalFit<T: Float> {
    /// Coefficients including the intercept term, in the scaled space.
    pub coefficients: Vec<T>,

    /// Parameters mapping raw feature vectors into the trained space.
    pub scaling: ScalingParams<T>,

    /// Accuracy metric over the training set.
    pub accuracy: T,
}

/// Train coefficients with gradient descent under the given options.
pub fn run<T, O>(
    objective: &O,
    metric: Metric,
    options: &TrainingOptions<T>,
    ts: &TrainingSet<T>,
    token: &CancelToken,
) -> Result<NumericalFit<T>, RegressionError>
where
    T: Float,
    O: Objective<T>,
{
    Validator::validate_training_set(ts)?;
    Validator::validate_options(options)?;

    let ScalingResult { x: scaled, params } =
        scale_design_matrix(options.scaling, ts.design_matrix())?;
    let mut prepared = ts.with_design_matrix(scaled);
    prepared.add_dummy_feature();
    let x = prepared.design_matrix();
    let y = prepared.target_vector();

    let mut stepper = GradientStepper::new(options.variant, objective, x, y, options.learning_rate);
    let coefficients = converge(
        options.convergence,
        &mut stepper,
        |x, y, coefficients| objective.cost(x, y, coefficients),
        token,
    )?;
    let accuracy = metric.compute(objective, x, y, &coefficients)?;

    Ok(NumericalFit {
        coefficients,
        scaling: params,
        accuracy,
    })
}
