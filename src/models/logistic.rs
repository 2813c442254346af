//! Logistic regression model.
//!
//! ## Purpose
//!
//! This module provides the user-facing binary classifier: sigmoid
//! hypothesis trained with gradient descent, predictions rounded to
//! class labels.
//!
//! ## Design notes
//!
//! * **Binary labels only**: targets must be exactly 0 or 1; anything
//!   else is `InvalidTrainingSet` before training starts.
//! * **Gradient descent only**: the cross-entropy cost has no closed
//!   form, so there is no analytical constructor.
//!
//! ## Key concepts
//!
//! * **Accuracy**: the fraction of training examples whose rounded
//!   hypothesis equals the label.
//!
//! ## Non-goals
//!
//! * This module does not handle multi-class targets.
//! * This module does not calibrate probabilities.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::objective::{LogisticObjective, Objective};
use crate::engine::numerical;
use crate::engine::options::TrainingOptions;
use crate::engine::validator::Validator;
use crate::evaluation::metrics::Metric;
use crate::math::scaling::{scale_vector, ScalingParams};
use crate::primitives::cancellation::CancelToken;
use crate::primitives::errors::RegressionError;
use crate::primitives::training::{add_dummy, TrainingSet};

// ============================================================================
// LogisticRegression
// ============================================================================

#[derive(Debug, Clone)]
struct Trained<T: Float> {
    coefficients: Vec<T>,
    scaling: ScalingParams<T>,
    accuracy: T,
}

/// Binary logistic regression trained with gradient descent.
#[derive(Debug, Clone)]
pub struct LogisticRegression<T: Float> {
    options: TrainingOptions<T>,
    cancel: CancelToken,
    state: Option<Trained<T>>,
}

impl<T: Float> LogisticRegression<T> {
    /// A classifier trained with the given gradient-descent options.
    pub fn gradient_descent(options: TrainingOptions<T>) -> Self {
        Self {
            options,
            cancel: CancelToken::default(),
            state: None,
        }
    }

    /// Attach a cancellation token observed during training.
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Train the classifier on feature rows and binary labels.
    pub fn fit(&mut self, x: &[Vec<T>], y: &[T]) -> Result<(), RegressionError> {
        Validator::validate_binary_labels(y)?;
        let ts = TrainingSet::new(x.to_vec(), y.to_vec())?;
        let fit = numerical::run(
            &LogisticObjective,
            Metric::Classification,
            &self.options,
            &ts,
            &self.cancel,
        )?;
        self.state = Some(Trained {
            coefficients: fit.coefficients,
            scaling: fit.scaling,
            accuracy: fit.accuracy,
        });
        Ok(())
    }

    /// Predict the class label (0 or 1) for a raw feature vector.
    pub fn predict(&self, x: &[T]) -> Result<T, RegressionError> {
        Ok(self.predict_proba(x)?.round())
    }

    /// Predict the positive-class probability for a raw feature vector.
    pub fn predict_proba(&self, x: &[T]) -> Result<T, RegressionError> {
        let state = self.trained()?;
        let scaled = scale_vector(x, &state.scaling)?;
        LogisticObjective.evaluate(&add_dummy(&scaled), &state.coefficients)
    }

    /// The trained coefficients, intercept first.
    pub fn coefficients(&self) -> Result<&[T], RegressionError> {
        Ok(&self.trained()?.coefficients)
    }

    /// The classification accuracy over the training set.
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
