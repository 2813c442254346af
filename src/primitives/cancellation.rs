//! Cooperative cancellation for long-running solves.
//!
//! ## Purpose
//!
//! This module provides the cancellation token polled by the matrix
//! primitives and the convergence loop, plus a `std`-only helper for
//! running a training closure under a wall-clock timeout.
//!
//! ## Design notes
//!
//! * **Poll-based**: the engine is single-threaded; cancellation is
//!   observed at coarse checkpoints (outer-loop boundaries), never
//!   mid-inner-loop, so an in-flight step always runs to completion.
//! * **Shared flag**: the token is a cheap `Arc<AtomicBool>` clone; one
//!   side cancels, the computing side polls.
//! * **Deadline without threads**: `with_deadline` records an `Instant`
//!   checked on every poll, so a timeout needs no watcher thread.
//!
//! ## Key concepts
//!
//! * **Checkpoint**: `checkpoint()` turns an observed cancellation into
//!   `RegressionError::Cancelled`, the only place that error originates.
//!
//! ## Non-goals
//!
//! * This module does not preempt a running inner loop.
//! * This module does not implement async/await integration.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "std")]
use std::sync::mpsc;
#[cfg(feature = "std")]
use std::thread;
#[cfg(feature = "std")]
use std::time::{Duration, Instant};

// Internal dependencies
use crate::primitives::errors::RegressionError;

// ============================================================================
// CancelToken
// ============================================================================

/// Cancellation token shared between a caller and a running solve.
///
/// Cloning is cheap and all clones observe the same flag. The default
/// token is never cancelled, so uninterruptible call sites can pass
/// `&CancelToken::default()` without special-casing.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
    #[cfg(feature = "std")]
    deadline: Option<Instant>,
}

impl CancelToken {
    /// Create a token that is cancelled only by an explicit `cancel()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a token that additionally cancels itself once `timeout`
    /// has elapsed.
    #[cfg(feature = "std")]
    pub fn with_deadline(timeout: Duration) -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// Request cancellation. Every clone of this token observes it.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested (or the deadline passed).
    pub fn is_cancelled(&self) -> bool {
        if self.flag.load(Ordering::Relaxed) {
            return true;
        }
        #[cfg(feature = "std")]
        if let Some(deadline) = self.deadline {
            return Instant::now() >= deadline;
        }
        false
    }

    /// Poll the token at a loop boundary.
    pub fn checkpoint(&self) -> Result<(), RegressionError> {
        if self.is_cancelled() {
            return Err(RegressionError::Cancelled);
        }
        Ok(())
    }
}

// ============================================================================
// Interruptible Runner
// ============================================================================

/// Run a training closure on a worker thread under a wall-clock timeout.
///
/// The closure receives a [`CancelToken`]; when the timeout elapses the
/// token is cancelled and the worker is joined, so the call returns as
/// soon as the computation reaches its next checkpoint. The worker is
/// never detached.
#[cfg(feature = "std")]
pub fn run_interruptible<T, F>(timeout: Duration, f: F) -> Result<T, RegressionError>
where
    T: Send + 'static,
    F: FnOnce(CancelToken) -> Result<T, RegressionError> + Send + 'static,
{
    let token = CancelToken::new();
    let worker_token = token.clone();
    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || {
        let _ = tx.send(f(worker_token));
    });
    match rx.recv_timeout(timeout) {
        Ok(result) => {
            let _ = handle.join();
            result
        }
        Err(_) => {
            token.cancel();
            let _ = handle.join();
            Err(RegressionError::Cancelled)
        }
    }
}
