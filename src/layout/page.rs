//! Page layout: where the paragraphs and the focus band land on screen.
//!
//! Control state is expressed in device-independent units. The terminal has
//! fixed-size cells, so this module maps every distance onto rows and
//! columns through [`CellMetrics`]:
//!
//! - the text column is `text_column_width / cell_width` columns wide,
//!   centred in the viewport;
//! - every wrapped line advances `font_size × line_height` dp, so a larger
//!   font spreads lines further apart;
//! - the scroll offset and the focus band are divided by `cell_height`.

use super::rect::Rect;
use super::wrap::{display_width, wrap};
use crate::control::{ControlState, Dp};
use crate::source::Paragraphs;

/// Size of one terminal cell in device-independent units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    /// Width of a column.
    pub cell_width: Dp,
    /// Height of a row.
    pub cell_height: Dp,
    /// Line pitch as a multiple of the font size.
    pub line_height: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_width: 8.0,
            cell_height: 16.0,
            line_height: 1.25,
        }
    }
}

impl CellMetrics {
    /// Whole columns covered by `distance`, never negative.
    pub fn columns(&self, distance: Dp) -> u16 {
        if self.cell_width <= 0.0 {
            return 0;
        }
        (distance / self.cell_width).floor().clamp(0.0, f32::from(u16::MAX)) as u16
    }

    /// Row containing the point `distance` below the top.
    pub fn row_floor(&self, distance: Dp) -> i64 {
        (distance / self.cell_height).floor() as i64
    }

    /// First row fully below the point `distance` below the top.
    pub fn row_ceil(&self, distance: Dp) -> i64 {
        (distance / self.cell_height).ceil() as i64
    }
}

/// One wrapped line of text placed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedLine<'a> {
    /// Column of the first grapheme.
    pub x: u16,
    /// Row.
    pub y: u16,
    /// Text to draw.
    pub text: &'a str,
    /// Index of the paragraph this line came from.
    pub paragraph: usize,
}

/// Screen geometry for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout<'a> {
    /// Whole screen.
    pub viewport: Rect,
    /// Centred text column.
    pub column: Rect,
    /// Rows covered by the focus band; empty when off screen.
    pub focus_band: Rect,
    /// Visible lines, top to bottom.
    pub lines: Vec<PlacedLine<'a>>,
}

impl<'a> PageLayout<'a> {
    /// Lay out `paragraphs` for a `width` × `height` screen.
    pub fn compute(
        state: &ControlState,
        paragraphs: &'a Paragraphs,
        metrics: &CellMetrics,
        width: u16,
        height: u16,
    ) -> Self {
        let viewport = Rect::from_size(width, height);
        let column = viewport.centered_columns(metrics.columns(state.text_column_width()));

        let band_top = state.focus_bar_position();
        let band_bottom = band_top + state.focus_bar_height();
        let focus_band = viewport.rows(metrics.row_floor(band_top), metrics.row_ceil(band_bottom));

        let lines = place_lines(state, paragraphs, metrics, column);
        Self {
            viewport,
            column,
            focus_band,
            lines,
        }
    }

    /// Whether row `y` is inside the focus band.
    pub const fn in_focus(&self, y: u16) -> bool {
        y >= self.focus_band.y && y < self.focus_band.bottom()
    }
}

fn place_lines<'a>(
    state: &ControlState,
    paragraphs: &'a Paragraphs,
    metrics: &CellMetrics,
    column: Rect,
) -> Vec<PlacedLine<'a>> {
    let mut placed = Vec::new();
    let pitch = state.font_size() * metrics.line_height;
    if pitch <= 0.0 || column.is_empty() {
        return placed;
    }

    // Glyphs sit in the middle of their line pitch.
    let inset = ((pitch - metrics.cell_height) / 2.0).max(0.0);
    let max_width = usize::from(column.width);
    let bottom = i64::from(column.height);
    let mut top: Dp = -state.scroll_offset();

    for (index, paragraph) in paragraphs.iter().enumerate() {
        for text in wrap(paragraph, max_width) {
            let row = metrics.row_floor(top + inset);
            top += pitch;
            if row < 0 {
                continue;
            }
            if row >= bottom {
                return placed;
            }
            let used = display_width(text).min(max_width) as u16;
            placed.push(PlacedLine {
                x: column.x + (column.width - used) / 2,
                y: column.y + row as u16,
                text,
                paragraph: index,
            });
        }
    }
    placed
}
