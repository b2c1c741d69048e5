//! Per-task time budgets.
//!
//! A [`Deadline`] is created when a document's scoring task starts and is
//! threaded through parsing, collection and scoring. Long loops call
//! [`Deadline::check`] at iteration boundaries, so an expired budget stops only
//! the task that owns it. There is no global timer and no signal handling.

use std::time::{Duration, Instant};

/// Error returned once a task's budget is exhausted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("time budget exhausted")]
pub struct Timeout;

/// Point in time after which a task must give up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Deadline {
    expires_at: Option<Instant>,
}

impl Deadline {
    /// A deadline that never expires.
    pub const NONE: Deadline = Deadline { expires_at: None };

    /// Expire `budget` from now. Budgets too large to represent never expire.
    pub fn after(budget: Duration) -> Self {
        Deadline {
            expires_at: Instant::now().checked_add(budget),
        }
    }

    /// Expire at a fixed instant.
    pub fn at(instant: Instant) -> Self {
        Deadline {
            expires_at: Some(instant),
        }
    }

    /// Time left, or `None` for an unbounded deadline.
    ///
    /// Returns `Some(Duration::ZERO)` once expired.
    pub fn remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|at| at.saturating_duration_since(Instant::now()))
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }

    /// `Err(Timeout)` once the deadline has passed.
    #[inline]
    pub fn check(&self) -> Result<(), Timeout> {
        if self.is_expired() {
            Err(Timeout)
        } else {
            Ok(())
        }
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Deadline::NONE
    }
}
