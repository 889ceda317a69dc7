//! Commands: the closed set of things a presenter can ask for.

use super::state::{Dp, Sp};

/// One classified control request, with its magnitude already resolved.
///
/// Magnitudes are signed only for [`Command::PointerScroll`]; every other
/// variant carries a non-negative amount and encodes the direction in the
/// variant itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Grow the label font (and the focus band with it).
    IncreaseFontSize(Sp),
    /// Shrink the label font (and the focus band with it).
    DecreaseFontSize(Sp),
    /// Start or stop auto-scroll.
    ToggleAutoScroll,
    /// Move the text back towards the start.
    ScrollUp(Dp),
    /// Move the text forward.
    ScrollDown(Dp),
    /// Add one unit of auto-scroll speed and enable auto-scroll.
    IncreaseAutoScrollSpeed,
    /// Remove one unit of auto-scroll speed, or stop when already at zero.
    DecreaseAutoScrollSpeed,
    /// Widen the text column.
    IncreaseColumnWidth(Dp),
    /// Narrow the text column.
    DecreaseColumnWidth(Dp),
    /// Raise the focus band.
    MoveFocusBarUp(Dp),
    /// Lower the focus band.
    MoveFocusBarDown(Dp),
    /// Wheel scroll; positive moves the text forward.
    PointerScroll(Dp),
}

impl Command {
    /// Short human-readable name, used in logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::IncreaseFontSize(_) => "increase-font-size",
            Self::DecreaseFontSize(_) => "decrease-font-size",
            Self::ToggleAutoScroll => "toggle-auto-scroll",
            Self::ScrollUp(_) => "scroll-up",
            Self::ScrollDown(_) => "scroll-down",
            Self::IncreaseAutoScrollSpeed => "increase-speed",
            Self::DecreaseAutoScrollSpeed => "decrease-speed",
            Self::IncreaseColumnWidth(_) => "increase-column-width",
            Self::DecreaseColumnWidth(_) => "decrease-column-width",
            Self::MoveFocusBarUp(_) => "focus-bar-up",
            Self::MoveFocusBarDown(_) => "focus-bar-down",
            Self::PointerScroll(_) => "pointer-scroll",
        }
    }
}

/// Base magnitude for discrete adjustments.
///
/// Keys use 1, or 6 with Shift held. The pointer wheel uses 1, or a flat 3
/// with Shift held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSize(f32);

impl StepSize {
    /// Unmodified step.
    pub const BASE: Self = Self(1.0);
    /// Amount Shift adds to a key step.
    pub const KEY_BOOST: f32 = 5.0;
    /// Fixed wheel step while Shift is held.
    pub const POINTER_BOOSTED: Self = Self(3.0);

    /// Step for a key press.
    pub fn for_key(boosted: bool) -> Self {
        if boosted {
            Self(Self::BASE.0 + Self::KEY_BOOST)
        } else {
            Self::BASE
        }
    }

    /// Step for a wheel event.
    pub const fn for_pointer(boosted: bool) -> Self {
        if boosted {
            Self::POINTER_BOOSTED
        } else {
            Self::BASE
        }
    }

    /// Raw magnitude.
    #[inline]
    pub const fn get(self) -> f32 {
        self.0
    }

    /// Magnitude scaled by `factor`.
    #[inline]
    pub fn times(self, factor: f32) -> f32 {
        self.0 * factor
    }
}
