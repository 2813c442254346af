//! Convergence control for gradient descent.
//!
//! ## Purpose
//!
//! This module drives a stepper until a stopping criterion is met:
//! either a fixed iteration count, or an automatic test on the relative
//! decrease of the cost function.
//!
//! ## Design notes
//!
//! * **Fail fast**: a failed step aborts immediately; remaining
//!   iterations are not attempted.
//! * **Strict automatic policy**: the relative decrease
//!   `r = 1 − newCost/oldCost` must stay positive. A cost that
//!   increases or stalls (`r ≤ 0`) is `CannotConverge` — gradient
//!   descent with a sound learning rate decreases the cost every batch
//!   step. A previous cost of exactly zero means the minimum was
//!   already reached and converges immediately.
//! * **Cancellation per iteration**: the token is polled once per loop
//!   iteration, before the step is taken.
//!
//! ## Key concepts
//!
//! * **Plateau detection**: `0 < r < threshold` means the cost still
//!   decreases but by too little to continue; the current coefficients
//!   are returned.
//!
//! ## Invariants
//!
//! * The automatic loop has no internal iteration cap; bounding it is
//!   the caller's business (deadline token or iterative policy).
//!
//! ## Non-goals
//!
//! * This module does not adapt the learning rate.
//! * This module does not checkpoint or restart a run.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::stepper::Stepper;
use crate::primitives::cancellation::CancelToken;
use crate::primitives::errors::RegressionError;

// ============================================================================
// Policy
// ============================================================================

/// Stopping criterion for the convergence loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConvergencePolicy<T: Float> {
    /// Execute exactly this many steps.
    Iterative(usize),

    /// Stop once the relative cost decrease per step falls below this
    /// threshold.
    Automatic(T),
}

impl<T: Float> FromStr for ConvergencePolicy<T> {
    type Err = RegressionError;

    /// Parse `"iterative:<count>"` or `"automatic:<threshold>"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn unsupported(input: &str) -> RegressionError {
            RegressionError::UnsupportedConvergenceType(String::from(input))
        }
        let (kind, value) = s.split_once(':').ok_or_else(|| unsupported(s))?;
        match kind {
            "iterative" => value
                .parse::<usize>()
                .map(Self::Iterative)
                .map_err(|_| unsupported(s)),
            "automatic" => value
                .parse::<f64>()
                .ok()
                .and_then(T::from)
                .map(Self::Automatic)
                .ok_or_else(|| unsupported(s)),
            _ => Err(unsupported(s)),
        }
    }
}

// ============================================================================
// Convergence Loop
// ============================================================================

/// Drive `stepper` under `policy` until convergence, a failure, or
/// cancellation.
///
/// `cost` is only consulted by the automatic policy.
pub fn converge<T, S, C>(
    policy: ConvergencePolicy<T>,
    stepper: &mut S,
    cost: C,
    token: &CancelToken,
) -> Result<Vec<T>, RegressionError>
where
    T: Float,
    S: Stepper<T>,
    C: Fn(&[Vec<T>], &[T], &[T]) -> Result<T, RegressionError>,
{
    match policy {
        ConvergencePolicy::Iterative(count) => converge_after(stepper, count, token),
        ConvergencePolicy::Automatic(threshold) => {
            converge_automatically(stepper, cost, threshold, token)
        }
    }
}

/// Iterative convergence: take exactly `count` steps.
fn converge_after<T, S>(
    stepper: &mut S,
    count: usize,
    token: &CancelToken,
) -> Result<Vec<T>, RegressionError>
where
    T: Float,
    S: Stepper<T>,
{
    for _ in 0..count {
        token.checkpoint()?;
        stepper.take_step()?;
    }
    Ok(stepper.coefficients().to_vec())
}

/// Automatic convergence: step until the cost decrease per step drops
/// below `threshold`.
fn converge_automatically<T, S, C>(
    stepper: &mut S,
    cost: C,
    threshold: T,
    token: &CancelToken,
) -> Result<Vec<T>, RegressionError>
where
    T: Float,
    S: Stepper<T>,
    C: Fn(&[Vec<T>], &[T], &[T]) -> Result<T, RegressionError>,
{
    loop {
        token.checkpoint()?;
        let previous = stepper.coefficients().to_vec();
        stepper.take_step()?;
        let old_cost = cost(stepper.design_matrix(), stepper.target_vector(), &previous)?;
        let new_cost = cost(
            stepper.design_matrix(),
            stepper.target_vector(),
            stepper.coefficients(),
        )?;
        if old_cost == T::zero() {
            // Already at a perfect minimum before this step.
            return Ok(stepper.coefficients().to_vec());
        }
        if !new_cost.is_finite() {
            return Err(RegressionError::CannotConverge);
        }
        let decrease = T::one() - new_cost / old_cost;
        if decrease <= T::zero() {
            return Err(RegressionError::CannotConverge);
        }
        if decrease < threshold {
            return Ok(stepper.coefficients().to_vec());
        }
    }
}
