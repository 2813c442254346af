//! Gradient-descent step functions.
//!
//! ## Purpose
//!
//! This module implements the per-iteration coefficient update for both
//! gradient descent variants. A stepper owns the current coefficient
//! vector and, for the stochastic variant, a cursor over the training
//! examples; the convergence controller drives it.
//!
//! ## Design notes
//!
//! * **Tagged variant over shared state**: instead of one type per
//!   variant, a single `GradientStepper` carries a
//!   `GradientDescentVariant` tag and dispatches the step rule over the
//!   same state record, keeping ownership explicit.
//! * **Standard descent direction**: `θ'_j = θ_j − α·pd_j` with
//!   `pd_j = Σ_i (h(x_i, θ) − y_i)·x_i[j]`. The 1/m factor of the cost
//!   gradient is folded into the learning rate, as in the classic LMS
//!   update rule.
//! * **Divergence detection**: any NaN or infinite new coefficient
//!   fails the step with `CannotConverge`; a stepper never publishes a
//!   poisoned vector.
//!
//! ## Key concepts
//!
//! * **Batch**: the partial derivative accumulates over every example.
//! * **Stochastic**: one example per step; the cursor wraps to the
//!   first example after the last (an epoch boundary, not surfaced as
//!   an event).
//!
//! ## Invariants
//!
//! * The coefficient vector length equals the (augmented) column count
//!   of the design matrix and never changes.
//! * A failed step leaves the previous coefficients in place.
//!
//! ## Non-goals
//!
//! * This module does not decide when to stop; see the converger.
//! * This module does not shuffle examples for the stochastic variant.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt;
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::objective::Objective;
use crate::primitives::errors::RegressionError;

// ============================================================================
// Variant
// ============================================================================

/// Gradient descent step variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientDescentVariant {
    /// Accumulate the partial derivative over the full training set per
    /// step.
    #[default]
    Batch,

    /// Update from a single example per step, cycling through the set.
    Stochastic,
}

impl fmt::Display for GradientDescentVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Batch => write!(f, "batch gradient descent"),
            Self::Stochastic => write!(f, "stochastic gradient descent"),
        }
    }
}

impl FromStr for GradientDescentVariant {
    type Err = RegressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "batch" => Ok(Self::Batch),
            "stochastic" => Ok(Self::Stochastic),
            other => Err(RegressionError::UnsupportedVariant(String::from(other))),
        }
    }
}

// ============================================================================
// Stepper
// ============================================================================

/// The interface the convergence controller drives.
pub trait Stepper<T: Float> {
    /// Take a single step towards the cost-function minimum.
    fn take_step(&mut self) -> Result<(), RegressionError>;

    /// Current coefficients calculated so far.
    fn coefficients(&self) -> &[T];

    /// Design matrix used in the calculations.
    fn design_matrix(&self) -> &[Vec<T>];

    /// Target vector used in the calculations.
    fn target_vector(&self) -> &[T];
}

/// Gradient-descent stepper over borrowed training data.
///
/// Coefficients start at zero; `cursor` is only advanced by the
/// stochastic variant.
#[derive(Debug)]
pub struct GradientStepper<'a, T: Float, O: Objective<T>> {
    objective: &'a O,
    x: &'a [Vec<T>],
    y: &'a [T],
    learning_rate: T,
    coefficients: Vec<T>,
    variant: GradientDescentVariant,
    cursor: usize,
}

impl<'a, T: Float, O: Objective<T>> GradientStepper<'a, T, O> {
    /// Create a stepper for the given variant over an augmented design
    /// matrix and its targets.
    pub fn new(
        variant: GradientDescentVariant,
        objective: &'a O,
        x: &'a [Vec<T>],
        y: &'a [T],
        learning_rate: T,
    ) -> Self {
        Self {
            objective,
            x,
            y,
            learning_rate,
            coefficients: vec![T::zero(); x[0].len()],
            variant,
            cursor: 0,
        }
    }

    fn batch_step(&self) -> Result<Vec<T>, RegressionError> {
        let mut next = vec![T::zero(); self.coefficients.len()];
        for (j, out) in next.iter_mut().enumerate() {
            // Partial derivative of the cost with respect to θ_j.
            let mut pd = T::zero();
            for i in 0..self.x.len() {
                let h = self.objective.evaluate(&self.x[i], &self.coefficients)?;
                pd = pd + (h - self.y[i]) * self.x[i][j];
            }
            *out = self.coefficients[j] - self.learning_rate * pd;
            if !out.is_finite() {
                return Err(RegressionError::CannotConverge);
            }
        }
        Ok(next)
    }

    fn stochastic_step(&mut self) -> Result<Vec<T>, RegressionError> {
        let i = self.cursor;
        let mut next = vec![T::zero(); self.coefficients.len()];
        for (j, out) in next.iter_mut().enumerate() {
            let h = self.objective.evaluate(&self.x[i], &self.coefficients)?;
            *out = self.coefficients[j] - self.learning_rate * (h - self.y[i]) * self.x[i][j];
            if !out.is_finite() {
                return Err(RegressionError::CannotConverge);
            }
        }
        self.cursor += 1;
        if self.cursor == self.y.len() {
            self.cursor = 0;
        }
        Ok(next)
    }
}

impl<'a, T: Float, O: Objective<T>> Stepper<T> for GradientStepper<'a, T, O> {
    fn take_step(&mut self) -> Result<(), RegressionError> {
        let next = match self.variant {
            GradientDescentVariant::Batch => self.batch_step()?,
            GradientDescentVariant::Stochastic => self.stochastic_step()?,
        };
        self.coefficients = next;
        Ok(())
    }

    fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    fn design_matrix(&self) -> &[Vec<T>] {
        self.x
    }

    fn target_vector(&self) -> &[T] {
        self.y
    }
}
