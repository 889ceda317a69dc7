//! Control state: every presentation parameter the engine mutates.

/// Device-independent distance (scroll offset, band position, widths).
pub type Dp = f32;

/// Scalable text unit used for the font size.
pub type Sp = f32;

/// Initial values for a fresh [`ControlState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlDefaults {
    /// Top of the reading-focus band.
    pub focus_bar_position: Dp,
    /// Height of the reading-focus band.
    pub focus_bar_height: Dp,
    /// Width of the centred text column.
    pub text_column_width: Dp,
    /// Label font size.
    pub font_size: Sp,
    /// Auto-scroll increment per frame.
    pub auto_scroll_speed: Dp,
}

impl Default for ControlDefaults {
    fn default() -> Self {
        Self {
            focus_bar_position: 170.0,
            focus_bar_height: 50.0,
            text_column_width: 550.0,
            font_size: 35.0,
            auto_scroll_speed: 1.0,
        }
    }
}

/// Mutable presentation parameters for one session.
///
/// Only `scroll_offset` and `auto_scroll_speed` carry a lower bound of zero.
/// Font size, column width and the focus band are deliberately unbounded in
/// both directions; the renderer copes with degenerate values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlState {
    scroll_offset: Dp,
    focus_bar_position: Dp,
    focus_bar_height: Dp,
    text_column_width: Dp,
    font_size: Sp,
    auto_scroll_enabled: bool,
    auto_scroll_speed: Dp,
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new(ControlDefaults::default())
    }
}

impl ControlState {
    /// Create a state at the top of the text with auto-scroll off.
    pub fn new(defaults: ControlDefaults) -> Self {
        Self {
            scroll_offset: 0.0,
            focus_bar_position: defaults.focus_bar_position,
            focus_bar_height: defaults.focus_bar_height,
            text_column_width: defaults.text_column_width,
            font_size: defaults.font_size,
            auto_scroll_enabled: false,
            auto_scroll_speed: defaults.auto_scroll_speed.max(0.0),
        }
    }

    /// Vertical scroll position of the paragraph list.
    #[inline]
    pub const fn scroll_offset(&self) -> Dp {
        self.scroll_offset
    }

    /// Top of the reading-focus band.
    #[inline]
    pub const fn focus_bar_position(&self) -> Dp {
        self.focus_bar_position
    }

    /// Height of the reading-focus band.
    #[inline]
    pub const fn focus_bar_height(&self) -> Dp {
        self.focus_bar_height
    }

    /// Width of the centred text column.
    #[inline]
    pub const fn text_column_width(&self) -> Dp {
        self.text_column_width
    }

    /// Current label font size.
    #[inline]
    pub const fn font_size(&self) -> Sp {
        self.font_size
    }

    /// Whether the ticker advances the scroll offset each frame.
    #[inline]
    pub const fn auto_scroll_enabled(&self) -> bool {
        self.auto_scroll_enabled
    }

    /// Scroll increment applied per frame while auto-scroll is on.
    #[inline]
    pub const fn auto_scroll_speed(&self) -> Dp {
        self.auto_scroll_speed
    }

    /// Move the scroll offset by `delta`, never below zero.
    pub(crate) fn scroll_by(&mut self, delta: Dp) {
        self.scroll_offset = (self.scroll_offset + delta).max(0.0);
    }

    /// Resize text and the focus band together, the band at 1.5x the rate.
    pub(crate) fn grow_font(&mut self, delta: Sp) {
        self.font_size += delta;
        self.focus_bar_height += delta * 1.5;
    }

    pub(crate) fn widen_column(&mut self, delta: Dp) {
        self.text_column_width += delta;
    }

    pub(crate) fn move_focus_bar(&mut self, delta: Dp) {
        self.focus_bar_position += delta;
    }

    pub(crate) fn toggle_auto_scroll(&mut self) {
        self.auto_scroll_enabled = !self.auto_scroll_enabled;
        if self.auto_scroll_speed == 0.0 {
            self.auto_scroll_enabled = true;
            self.auto_scroll_speed += 1.0;
        }
    }

    pub(crate) fn speed_up(&mut self) {
        self.auto_scroll_enabled = true;
        self.auto_scroll_speed += 1.0;
    }

    /// Slow down by one; at zero speed this switches auto-scroll off instead.
    pub(crate) fn slow_down(&mut self) {
        if self.auto_scroll_speed > 0.0 {
            self.auto_scroll_speed = (self.auto_scroll_speed - 1.0).max(0.0);
        } else {
            self.auto_scroll_enabled = false;
        }
    }
}
