//! # regress-rs — Linear and Logistic Regression for Rust
//!
//! A small, dependency-light regression engine that fits linear and
//! logistic models to labeled tabular data using two alternative
//! solvers: a closed-form normal-equation solver and an iterative
//! gradient-descent solver.
//!
//! **Key features:**
//! - Closed-form training via the normal equation `θ = (XᵗX)⁻¹ Xᵗ y`,
//!   backed by dense matrix primitives (LU inverse with partial
//!   pivoting)
//! - Gradient descent with batch and stochastic step variants
//! - Two convergence policies: fixed iteration count, or automatic
//!   stopping on a cost-decrease threshold
//! - Feature scaling (normalization / standardization) with parameters
//!   reusable at prediction time
//! - Divergence detection — an excessive learning rate yields
//!   `CannotConverge`, never a silent NaN model
//! - Cooperative cancellation of long-running solves (explicit token or
//!   deadline)
//! - R² for continuous targets, classification accuracy for discrete
//!   ones
//!
//! ## Quick Start
//!
//! ### Normal equation
//!
//! ```rust
//! use regress_rs::prelude::*;
//!
//! let x: Vec<Vec<f64>> = vec![vec![1.0], vec![2.0], vec![3.0]];
//! let y = vec![2.0, 4.0, 6.0];
//!
//! let mut model = LinearRegression::normal_equation();
//! model.fit(&x, &y)?;
//!
//! assert!((model.predict(&[4.0])? - 8.0).abs() < 1e-9);
//! assert!(model.accuracy()? > 0.999);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ### Gradient descent
//!
//! ```rust
//! use regress_rs::prelude::*;
//!
//! let x: Vec<Vec<f64>> = vec![vec![1.0], vec![2.0], vec![3.0]];
//! let y = vec![2.0, 4.0, 6.0];
//!
//! let options = TrainingOptions::new()
//!     .learning_rate(0.01)
//!     .variant(Batch)
//!     .convergence(ConvergencePolicy::Iterative(1000))
//!     .scaling(ScalingTechnique::Standardization);
//!
//! let mut model = LinearRegression::gradient_descent(options);
//! model.fit(&x, &y)?;
//!
//! assert!((model.predict(&[4.0])? - 8.0).abs() < 1e-3);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ### Logistic regression
//!
//! ```rust
//! use regress_rs::prelude::*;
//!
//! let x = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]];
//! let y = vec![0.0, 0.0, 1.0, 1.0];
//!
//! let options = TrainingOptions::new()
//!     .learning_rate(0.1)
//!     .convergence(ConvergencePolicy::Iterative(5000));
//!
//! let mut model = LogisticRegression::gradient_descent(options);
//! model.fit(&x, &y)?;
//!
//! assert_eq!(model.predict(&[3.5])?, 1.0);
//! assert!(model.predict_proba(&[1.0])? < 0.5);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, RegressionError>`; the
//! `?` operator is idiomatic. Model queries made before `fit` fail with
//! `RegressionError::NotTrained`; a learning rate large enough to blow
//! the coefficients up to NaN/infinity fails with
//! `RegressionError::CannotConverge`. Failures are returned to the
//! immediate caller and never silently recovered — retrying with, say,
//! a smaller learning rate is the caller's decision.
//!
//! ## Cancellation
//!
//! A solve can be interrupted between outer-loop iterations through a
//! shared token:
//!
//! ```rust
//! use regress_rs::prelude::*;
//! use std::time::Duration;
//!
//! let token = CancelToken::with_deadline(Duration::from_secs(5));
//! let mut model: LinearRegression<f64> = LinearRegression::normal_equation().cancel_token(token);
//! # let _ = model;
//! ```
//!
//! An interrupted call returns `RegressionError::Cancelled`, distinct
//! from every computation error. `run_interruptible` additionally moves
//! the whole training call onto a worker thread and joins it under a
//! wall-clock timeout.
//!
//! ## Configuration
//!
//! | Parameter         | Default           | Options                                | Description                          |
//! |-------------------|-------------------|----------------------------------------|--------------------------------------|
//! | **learning_rate** | 0.01              | finite, > 0                            | Step size multiplier                 |
//! | **variant**       | `Batch`           | `Batch`, `Stochastic`                  | Examples per descent step            |
//! | **convergence**   | `Iterative(1000)` | `Iterative(n)`, `Automatic(threshold)` | Stopping criterion                   |
//! | **scaling**       | `None`            | `None`, `Normalization`, `Standardization` | Feature scaling before descent   |
//!
//! The normal-equation solver has no tunables.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate is `no_std`-compatible; disable default features to drop
//! the standard-library dependency (deadline tokens and the
//! interruptible runner are `std`-only):
//!
//! ```toml
//! [dependencies]
//! regress-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Numerical Notes
//!
//! * The matrix inverse uses LU decomposition with partial pivoting
//!   restricted to adjacent-row swaps. This is sufficient for
//!   well-conditioned training data but is not a general-purpose
//!   numerically stable inverse; degenerate matrices surface as
//!   `NonInvertible`.
//! * The batch update accumulates the cost gradient over all examples
//!   without dividing by the example count; the 1/m factor is folded
//!   into the learning rate, as in the classic LMS rule.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Modules
// ============================================================================

// The matrix primitives, scaler, stepper and converger are part of the
// crate's contract, not implementation details; every layer is public.

// Layer 1: Primitives - errors, cancellation, training-set container.
pub mod primitives;

// Layer 2: Math - dense matrix primitives and feature scaling.
pub mod math;

// Layer 3: Algorithms - objectives, steppers, convergence control.
pub mod algorithms;

// Layer 4: Evaluation - accuracy metrics.
pub mod evaluation;

// Layer 5: Engine - validation and the two solver drivers.
pub mod engine;

// Layer 6: Models - user-facing linear and logistic wrappers.
pub mod models;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// Intended to be wildcard-imported for convenient access to the most
/// commonly used types:
///
/// ```
/// use regress_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithms::converger::ConvergencePolicy;
    pub use crate::algorithms::objective::{LinearObjective, LogisticObjective, Objective};
    pub use crate::algorithms::stepper::{
        GradientDescentVariant,
        GradientDescentVariant::{Batch, Stochastic},
    };
    pub use crate::engine::options::TrainingOptions;
    pub use crate::evaluation::metrics::Metric;
    pub use crate::math::scaling::{
        ScalingParams, ScalingTechnique,
        ScalingTechnique::{Normalization, Standardization},
    };
    pub use crate::models::linear::LinearRegression;
    pub use crate::models::logistic::LogisticRegression;
    pub use crate::primitives::cancellation::CancelToken;
    #[cfg(feature = "std")]
    pub use crate::primitives::cancellation::run_interruptible;
    pub use crate::primitives::errors::RegressionError;
    pub use crate::primitives::training::TrainingSet;
}

