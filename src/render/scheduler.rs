//! Frame scheduler: the one pending frame deadline.
//!
//! A window has at most one wakeup outstanding. Asking for a frame while one
//! is already pending keeps whichever deadline is earlier, so frames driven
//! by input never start a second chain of autoscroll frames.

use std::time::{Duration, Instant};

/// Single pending frame deadline.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameScheduler {
    deadline: Option<Instant>,
}

impl FrameScheduler {
    /// Create a scheduler with nothing pending.
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Ask for a frame at `at`; an earlier pending deadline wins.
    pub fn schedule(&mut self, at: Instant) {
        self.deadline = Some(self.deadline.map_or(at, |pending| pending.min(at)));
    }

    /// The pending deadline.
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the pending deadline, zero if it has passed.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|at| at.saturating_duration_since(now))
    }

    /// Clear the deadline if it is at or before `now`; returns whether it was due.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(at) if at <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether nothing is pending.
    pub const fn is_empty(&self) -> bool {
        self.deadline.is_none()
    }
}
