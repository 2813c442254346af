//! Training configuration for the gradient-descent driver.
//!
//! ## Purpose
//!
//! This module defines the in-process configuration object consumed by
//! the numerical driver: learning rate, step variant, convergence
//! policy, and feature scaling technique.
//!
//! ## Design notes
//!
//! * **Value semantics**: options are plain data passed by value; no
//!   file or wire format is involved.
//! * **Fluent construction**: defaults plus chainable setters, and two
//!   shorthand constructors matching the two convergence policies.
//! * **Validated late**: bounds are checked by the engine validator at
//!   fit time, not at construction.
//!
//! ## Non-goals
//!
//! * This module does not configure the normal-equation solver, which
//!   has no tunables.

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::converger::ConvergencePolicy;
use crate::algorithms::stepper::GradientDescentVariant;
use crate::math::scaling::ScalingTechnique;

// ============================================================================
// TrainingOptions
// ============================================================================

/// Configuration for gradient-descent training.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingOptions<T: Float> {
    /// Step size multiplier, must be a finite positive number.
    pub learning_rate: T,

    /// Batch or stochastic stepping.
    pub variant: GradientDescentVariant,

    /// Fixed iteration count or automatic cost-decrease threshold.
    pub convergence: ConvergencePolicy<T>,

    /// Feature scaling applied before descent.
    pub scaling: ScalingTechnique,
}

impl<T: Float> Default for TrainingOptions<T> {
    fn default() -> Self {
        Self {
            learning_rate: T::from(0.01).unwrap_or_else(T::one),
            variant: GradientDescentVariant::Batch,
            convergence: ConvergencePolicy::Iterative(1000),
            scaling: ScalingTechnique::None,
        }
    }
}

impl<T: Float> TrainingOptions<T> {
    /// Create options with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with an iterative convergence indicator.
    pub fn with_iterative_convergence(
        learning_rate: T,
        variant: GradientDescentVariant,
        iterations: usize,
    ) -> Self {
        Self {
            learning_rate,
            variant,
            convergence: ConvergencePolicy::Iterative(iterations),
            scaling: ScalingTechnique::None,
        }
    }

    /// Options with an automatic convergence indicator.
    pub fn with_automatic_convergence(
        learning_rate: T,
        variant: GradientDescentVariant,
        threshold: T,
    ) -> Self {
        Self {
            learning_rate,
            variant,
            convergence: ConvergencePolicy::Automatic(threshold),
            scaling: ScalingTechnique::None,
        }
    }

    /// Set the learning rate.
    pub fn learning_rate(mut self, learning_rate: T) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the gradient descent variant.
    pub fn variant(mut self, variant: GradientDescentVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the convergence policy.
    pub fn convergence(mut self, convergence: ConvergencePolicy<T>) -> Self {
        self.convergence = convergence;
        self
    }

    /// Set the feature scaling technique.
    pub fn scaling(mut self, scaling: ScalingTechnique) -> Self {
        self.scaling = scaling;
        self
    }
}

impl<T: Float + fmt::Display> fmt::Display for TrainingOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "learning rate: {}, variant: {}, ", self.learning_rate, self.variant)?;
        match self.convergence {
            ConvergencePolicy::Iterative(n) => write!(f, "convergence: after {} iterations", n)?,
            ConvergencePolicy::Automatic(t) => {
                write!(f, "convergence: automatic, threshold={}", t)?
            }
        }
        write!(f, ", scaling: {}", self.scaling)
    }
}
