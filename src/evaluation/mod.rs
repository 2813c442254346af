//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer computes the accuracy attached to trained models:
//! coefficient of determination and classification accuracy.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: Models
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Residual-based accuracy metrics.
pub mod metrics;
