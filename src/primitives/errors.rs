//! Error types for the regression engine.
//!
//! ## Purpose
//!
//! This module defines the single error enum shared by every layer of the
//! crate. All fallible operations return `Result<_, RegressionError>` and
//! propagate failures to the immediate caller; nothing is silently
//! recovered inside the engine.
//!
//! ## Design notes
//!
//! * **Context-carrying variants**: shape errors record the offending
//!   dimensions so callers can report them without re-deriving.
//! * **No retry logic**: a failure in any solve step aborts the whole
//!   chain. Retrying (e.g. with a smaller learning rate after
//!   `CannotConverge`) is the caller's responsibility.
//! * **Cancellation is not a computation error**: `Cancelled` is kept
//!   distinct from `CannotConverge` and the shape errors so callers can
//!   tell an interrupted solve from a failed one.
//!
//! ## Non-goals
//!
//! * This module does not wrap I/O or data-format errors; training-set
//!   ingestion lives outside the engine.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Error Enum
// ============================================================================

/// Errors reported by the regression engine.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// A matrix operand is empty or has ragged rows.
    InvalidMatrix,

    /// Operand shapes are incompatible for multiplication.
    DimensionMismatch {
        /// Column count of the left operand.
        left_cols: usize,
        /// Row count (or length) of the right operand.
        right_rows: usize,
    },

    /// The matrix is not square, or is singular under the adjacent-swap
    /// pivoting used by `inverse`.
    NonInvertible,

    /// A feature vector's length disagrees with the coefficients or
    /// scaling parameters it is used with.
    InvalidFeatureVector {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// A design matrix cannot be scaled (irregular, or a column with
    /// zero range/variance).
    InvalidDesignMatrix,

    /// Scaling parameter vectors U and S have different lengths.
    InvalidScalingParameters,

    /// The training set is inconsistent: ragged feature vectors, target
    /// length mismatch, or too few examples relative to features.
    InvalidTrainingSet,

    /// Gradient descent diverged: a coefficient became NaN/infinite, or
    /// the cost function stopped decreasing under automatic convergence.
    /// Usually means the learning rate is too large.
    CannotConverge,

    /// The learning rate is not a finite positive number.
    InvalidLearningRate(f64),

    /// The automatic-convergence threshold is not a finite positive
    /// number.
    InvalidThreshold(f64),

    /// An unrecognized gradient descent variant name.
    UnsupportedVariant(String),

    /// An unrecognized convergence policy name.
    UnsupportedConvergenceType(String),

    /// An unrecognized feature scaling technique name.
    UnsupportedScalingTechnique(String),

    /// Cooperative cancellation was observed before the computation
    /// finished.
    Cancelled,

    /// A model query was made before training completed.
    NotTrained,
}

impl fmt::Display for RegressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMatrix => write!(f, "invalid matrix: empty or ragged rows"),
            Self::DimensionMismatch {
                left_cols,
                right_rows,
            } => write!(
                f,
                "dimension mismatch: left operand has {} columns, right operand has {} rows",
                left_cols, right_rows
            ),
            Self::NonInvertible => write!(f, "matrix is not invertible"),
            Self::InvalidFeatureVector { expected, got } => write!(
                f,
                "invalid feature vector: expected length {}, got {}",
                expected, got
            ),
            Self::InvalidDesignMatrix => write!(f, "invalid design matrix"),
            Self::InvalidScalingParameters => {
                write!(f, "scaling parameter vectors have different lengths")
            }
            Self::InvalidTrainingSet => write!(f, "invalid training set"),
            Self::CannotConverge => write!(f, "cannot converge"),
            Self::InvalidLearningRate(lr) => write!(f, "invalid learning rate: {}", lr),
            Self::InvalidThreshold(t) => write!(f, "invalid convergence threshold: {}", t),
            Self::UnsupportedVariant(s) => {
                write!(f, "unsupported gradient descent variant: {}", s)
            }
            Self::UnsupportedConvergenceType(s) => {
                write!(f, "unsupported convergence type: {}", s)
            }
            Self::UnsupportedScalingTechnique(s) => {
                write!(f, "unsupported scaling technique: {}", s)
            }
            Self::Cancelled => write!(f, "computation cancelled"),
            Self::NotTrained => write!(f, "model is not trained"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RegressionError {}
