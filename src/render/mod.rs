//! Rendering: the capability the frame driver hands its state to.
//!
//! The engine only sees the [`Renderer`] trait. [`TerminalRenderer`] is the
//! real implementation; tests drive the engine with a recording renderer and
//! a hand-advanced clock instead.

mod paint;
mod scheduler;
mod terminal;

pub use paint::{paint_page, Palette};
pub use scheduler::FrameScheduler;
pub use terminal::{RenderStats, TerminalRenderer};

use crate::control::ControlState;
use crate::source::Paragraphs;
use std::io;
use std::time::Instant;

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Presentation parameters after input and the autoscroll tick.
    pub state: &'a ControlState,
    /// Text being presented.
    pub paragraphs: &'a Paragraphs,
}

/// Paints frames and delivers future frame events.
pub trait Renderer {
    /// The renderer's notion of now; frame requests are relative to it.
    fn current_time(&self) -> Instant;

    /// Ask for a frame event no earlier than `at`. Fire-and-forget.
    fn schedule_frame(&mut self, at: Instant);

    /// Draw one frame.
    fn paint(&mut self, frame: &Frame<'_>) -> io::Result<()>;
}
