//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental building blocks shared by every
//! other layer:
//! - The crate-wide error enum
//! - The cooperative cancellation token
//! - The training-set container
//!
//! These carry no numerical-algorithm logic of their own.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Crate-wide error enum.
pub mod errors;

/// Cooperative cancellation token and interruptible runner.
pub mod cancellation;

/// Training-set container and dummy-feature augmentation.
pub mod training;
