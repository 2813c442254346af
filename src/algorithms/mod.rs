//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the gradient-descent machinery:
//! - The hypothesis/cost capability interface and the linear and
//!   logistic objectives
//! - The batch and stochastic step functions
//! - The convergence controller
//!
//! # Architecture
//!
//! ```text
//! Layer 6: Models
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Hypothesis/cost pairs for the supported model families.
pub mod objective;

/// Batch and stochastic gradient-descent step functions.
pub mod stepper;

/// Iterative and automatic convergence control.
pub mod converger;
