//! Training-set container.
//!
//! ## Purpose
//!
//! This module provides the `TrainingSet` data structure: a design
//! matrix of feature-vector rows paired with a target vector, checked
//! for consistency at construction.
//!
//! ## Design notes
//!
//! * **Rows as vectors**: the design matrix is a sequence of rows, each
//!   an owned `Vec<T>`. Regularity (every row the same length) is a
//!   constructor invariant.
//! * **Idempotent augmentation**: the dummy feature (constant 1 giving
//!   the model an intercept term) is prepended exactly once no matter
//!   how many times `add_dummy_feature` is called.
//! * **Read-only after construction**: the engine never mutates a
//!   training set besides the one-shot augmentation.
//!
//! ## Invariants
//!
//! * `x` is non-empty and regular; `y.len() == x.len()`.
//! * `feature_count` reports the column count *excluding* the dummy
//!   column.
//!
//! ## Non-goals
//!
//! * This module does not parse or load data; ingestion is an external
//!   collaborator.
//! * This module does not validate well-posedness (rows vs. columns);
//!   that is the engine validator's job.

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
// TrainingSet
// ============================================================================

/// A consistency-checked training set: design matrix plus targets.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet<T: Float> {
    x: Vec<Vec<T>>,
    y: Vec<T>,
    dummy_added: bool,
}

impl<T: Float> TrainingSet<T> {
    /// Build a training set from rows of features and a target vector.
    ///
    /// Fails with `InvalidTrainingSet` if the matrix is empty, any row
    /// is empty or ragged, or the target length disagrees with the row
    /// count. Values themselves are not inspected.
    pub fn new(x: Vec<Vec<T>>, y: Vec<T>) -> Result<Self, RegressionError> {
        if x.is_empty() || x.len() != y.len() {
            return Err(RegressionError::InvalidTrainingSet);
        }
        let n = x[0].len();
        if n == 0 || x.iter().any(|row| row.len() != n) {
            return Err(RegressionError::InvalidTrainingSet);
        }
        Ok(Self {
            x,
            y,
            dummy_added: false,
        })
    }

    /// The design matrix rows.
    pub fn design_matrix(&self) -> &[Vec<T>] {
        &self.x
    }

    /// The target vector.
    pub fn target_vector(&self) -> &[T] {
        &self.y
    }

    /// Number of training examples (rows).
    pub fn example_count(&self) -> usize {
        self.x.len()
    }

    /// Number of features per example, excluding the dummy column.
    pub fn feature_count(&self) -> usize {
        if self.dummy_added {
            self.x[0].len() - 1
        } else {
            self.x[0].len()
        }
    }

    /// Whether the dummy feature has been prepended.
    pub fn dummy_added(&self) -> bool {
        self.dummy_added
    }

    /// Prepend the dummy feature (constant 1) to every row, exactly
    /// once.
    pub fn add_dummy_feature(&mut self) {
        if self.dummy_added {
            return;
        }
        for row in &mut self.x {
            row.insert(0, T::one());
        }
        self.dummy_added = true;
    }

    /// Replace the design matrix with a scaled counterpart of the same
    /// shape, preserving targets and the augmentation flag.
    pub(crate) fn with_design_matrix(&self, x: Vec<Vec<T>>) -> Self {
        Self {
            x,
            y: self.y.clone(),
            dummy_added: self.dummy_added,
        }
    }
}

/// Prepend the dummy feature to a single raw feature vector.
pub fn add_dummy<T: Float>(x: &[T]) -> Vec<T> {
    let mut v = Vec::with_capacity(x.len() + 1);
    v.push(T::one());
    v.extend_from_slice(x);
    v
}
