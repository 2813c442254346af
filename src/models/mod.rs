//! Layer 6: Models
//!
//! # Purpose
//!
//! This layer contains the user-facing model wrappers:
//! - Linear regression (normal equation or gradient descent)
//! - Logistic regression (gradient descent)
//!
//! Each wraps a configured solver plus the trained state it produces
//! and answers prediction queries.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: Models ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear regression over continuous targets.
pub mod linear;

/// Binary logistic regression.
pub mod logistic;
