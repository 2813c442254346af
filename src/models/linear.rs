//! Linear regression model.
//!
//! ## Purpose
//!
//! This module provides the user-facing linear regression model: a
//! configured solver (normal equation or gradient descent) plus the
//! trained state it produces.
//!
//! ## Design notes
//!
//! * **Untrained until fitted**: queries before `fit` fail with
//!   `NotTrained`; the trained state, once produced, never mutates.
//! * **Prediction in the trained space**: `predict` scales the raw
//!   feature vector with the stored parameters and prepends the dummy
//!   feature before evaluating the hypothesis. For normal-equation and
//!   unscaled fits the stored parameters are the identity, so the same
//!   path serves every configuration.
//!
//! ## Key concepts
//!
//! * **Accuracy**: the coefficient of determination R² over the
//!   training set.
//!
//! ## Non-goals
//!
//! * This module does not persist models.
//! * This module does not cross-validate or split data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::objective::{LinearObjective, Objective};
use crate::engine::options::TrainingOptions;
use crate::engine::{analytical, numerical};
use crate::evaluation::metrics::Metric;
use crate::math::scaling::{scale_vector, ScalingParams};
use crate::primitives::cancellation::CancelToken;
use crate::primitives::errors::RegressionError;
use crate::primitives::training::{add_dummy, TrainingSet};

// ============================================================================
// Solver Selection
// ============================================================================

#[derive(Debug, Clone)]
enum SolverMethod<T: Float> {
    NormalEquation,
    GradientDescent(TrainingOptions<T>),
}

#[derive(Debug, Clone)]
struct Trained<T: Float> {
    coefficients: Vec<T>,
    scaling: ScalingParams<T>,
    accuracy: T,
}

// ============================================================================
// LinearRegression
// ============================================================================

/// Linear regression over continuous targets.
#[derive(Debug, Clone)]
pub struct LinearRegression<T: Float> {
    method: SolverMethod<T>,
    cancel: CancelToken,
    state: Option<Trained<T>>,
}

impl<T: Float> LinearRegression<T> {
    /// A model trained analytically by solving the normal equation.
    pub fn normal_equation() -> Self {
        Self {
            method: SolverMethod::NormalEquation,
            cancel: CancelToken::default(),
            state: None,
        }
    }

    /// A model trained numerically with gradient descent.
    pub fn gradient_descent(options: TrainingOptions<T>) -> Self {
        Self {
            method: SolverMethod::GradientDescent(options),
            cancel: CancelToken::default(),
            state: None,
        }
    }

    /// Attach a cancellation token observed during training.
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Train the model on feature rows and continuous targets.
    pub fn fit(&mut self, x: &[Vec<T>], y: &[T]) -> Result<(), RegressionError> {
        let ts = TrainingSet::new(x.to_vec(), y.to_vec())?;
        let trained = match &self.method {
            SolverMethod::NormalEquation => {
                let fit = analytical::run(&ts, &self.cancel)?;
                Trained {
                    scaling: ScalingParams::identity(ts.feature_count()),
                    coefficients: fit.coefficients,
                    accuracy: fit.accuracy,
                }
            }
            SolverMethod::GradientDescent(options) => {
                let fit = numerical::run(
                    &LinearObjective,
                    Metric::RSquared,
                    options,
                    &ts,
                    &self.cancel,
                )?;
                Trained {
                    coefficients: fit.coefficients,
                    scaling: fit.scaling,
                    accuracy: fit.accuracy,
                }
            }
        };
        self.state = Some(trained);
        Ok(())
    }

    /// Predict the target for a raw feature vector.
    pub fn predict(&self, x: &[T]) -> Result<T, RegressionError> {
        let state = self.trained()?;
        let scaled = scale_vector(x, &state.scaling)?;
        LinearObjective.evaluate(&add_dummy(&scaled), &state.coefficients)
    }

    /// The trained coefficients, intercept first.
    pub fn coefficients(&self) -> Result<&[T], RegressionError> {
        Ok(&self.trained()?.coefficients)
    }

    /// The coefficient of determination over the training set.
    pub fn accuracy(&self) -> Result<T, RegressionError> {
        Ok(self.trained()?.accuracy)
    }

    /// Whether the model has been trained.
    pub fn is_trained(&self) -> bool {
        self.state.is_some()
    }

    fn trained(&self) -> Result<&Trained<T>, RegressionError> {
        self.state.as_ref().ok_or(RegressionError::NotTrained)
    }
}

impl<T: Float + fmt::Display> fmt::Display for LinearRegression<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.trained() {
            Err(e) => write!(f, "{}", e),
            Ok(state) => {
                write!(f, "y = {}", state.coefficients[0])?;
                for (i, coefficient) in state.coefficients[1..].iter().enumerate() {
                    write!(f, " + x{}*{}", i + 1, coefficient)?;
                }
                Ok(())
            }
        }
    }
}
