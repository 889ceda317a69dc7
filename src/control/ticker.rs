//! Autoscroll ticker: advances the scroll offset once per frame.
//!
//! The ticker never sleeps or spawns anything. When auto-scroll is active it
//! returns a [`FrameRequest`] and the caller forwards it to whatever delivers
//! frames; when auto-scroll is off it returns nothing and cadence falls back
//! to input-driven redraws.

use super::state::ControlState;
use std::time::{Duration, Instant};

/// Delay between auto-scroll frames: two seconds split into 100 steps.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(2000 / 100);

/// Ask the windowing layer for another frame no earlier than `at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest {
    /// Deadline for the next frame.
    pub at: Instant,
}

/// Per-frame auto-scroll step.
#[derive(Debug, Clone, Copy)]
pub struct AutoscrollTicker {
    delay: Duration,
}

impl Default for AutoscrollTicker {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_DELAY)
    }
}

impl AutoscrollTicker {
    /// Create a ticker with the given frame delay.
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Delay between auto-scroll frames.
    #[inline]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Run one tick at `now`.
    pub fn tick(&self, state: &mut ControlState, now: Instant) -> Option<FrameRequest> {
        if !state.auto_scroll_enabled() {
            return None;
        }
        state.scroll_by(state.auto_scroll_speed());
        log::trace!("autoscroll tick, offset {}", state.scroll_offset());
        Some(FrameRequest { at: now + self.delay })
    }
}
