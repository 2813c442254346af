//! Input validation for training configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before a solve
//! starts. It checks training-set well-posedness and configuration
//! parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: validation stops at the first error encountered.
//! * **Efficiency**: checks are ordered from cheap to expensive.
//! * **Generics**: validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Well-posedness**: both solvers require strictly more examples
//!   than raw feature columns; the normal equation is singular
//!   otherwise and gradient descent would be underdetermined.
//! * **Parameter bounds**: the learning rate and the automatic
//!   convergence threshold must be finite and positive.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair invalid inputs.
//! * This module does not perform the solve itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::converger::ConvergencePolicy;
use crate::engine::options::TrainingOptions;
use crate::primitives::errors::RegressionError;
use crate::primitives::training::TrainingSet;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for training configuration and input data.
///
/// Provides static methods returning `Result<(), RegressionError>`,
/// failing fast on the first violation.
pub struct Validator;

impl Validator {
    /// Validate a training set for solving.
    ///
    /// The set's constructor already guarantees regularity and matching
    /// target length; this additionally requires more examples than raw
    /// feature columns.
    pub fn validate_training_set<T: Float>(ts: &TrainingSet<T>) -> Result<(), RegressionError> {
        if ts.example_count() <= ts.feature_count() {
            return Err(RegressionError::InvalidTrainingSet);
        }
        Ok(())
    }

    /// Validate gradient-descent training options.
    pub fn validate_options<T: Float>(options: &TrainingOptions<T>) -> Result<(), RegressionError> {
        let lr = options.learning_rate;
        if !lr.is_finite() || lr <= T::zero() {
            return Err(RegressionError::InvalidLearningRate(
                lr.to_f64().unwrap_or(f64::NAN),
            ));
        }
        if let ConvergencePolicy::Automatic(threshold) = options.convergence {
            if !threshold.is_finite() || threshold <= T::zero() {
                return Err(RegressionError::InvalidThreshold(
                    threshold.to_f64().unwrap_or(f64::NAN),
                ));
            }
        }
        Ok(())
    }

    /// Validate that every target is a binary class label (0 or 1).
    pub fn validate_binary_labels<T: Float>(y: &[T]) -> Result<(), RegressionError> {
        for &label in y {
            if label != T::zero() && label != T::one() {
                return Err(RegressionError::InvalidTrainingSet);
            }
        }
        Ok(())
    }
}
