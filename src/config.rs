//! Configuration for a teleprompter session.

use crate::control::{ControlDefaults, Dp, DEFAULT_FRAME_DELAY};
use crate::layout::CellMetrics;
use crate::render::Palette;
use crate::source::DEFAULT_PADDING_LINES;
use std::time::Duration;

/// Everything tunable about a session. Only the file path is exposed on the
/// command line; the rest uses these defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Initial presentation parameters.
    pub defaults: ControlDefaults,
    /// Delay between auto-scroll frames.
    pub frame_delay: Duration,
    /// Blank lines appended after the text.
    pub padding_lines: usize,
    /// Size of a terminal cell in dp.
    pub metrics: CellMetrics,
    /// Page colors.
    pub palette: Palette,
    /// Distance reported for one mouse wheel notch.
    pub wheel_step: Dp,
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Whether to capture the mouse (needed for wheel scrolling).
    pub enable_mouse: bool,
    /// Whether to use the alternate screen buffer.
    pub alternate_screen: bool,
    /// Terminal window title.
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: ControlDefaults::default(),
            frame_delay: DEFAULT_FRAME_DELAY,
            padding_lines: DEFAULT_PADDING_LINES,
            metrics: CellMetrics::default(),
            palette: Palette::default(),
            wheel_step: 10.0,
            input_poll_timeout: Duration::from_millis(10),
            enable_mouse: true,
            alternate_screen: true,
            title: "TelePrompter".to_string(),
        }
    }
}
