//! Painting a [`PageLayout`] into a [`Buffer`].

use crate::buffer::{Buffer, Cell, Modifiers, Rgb};
use crate::layout::PageLayout;
use unicode_segmentation::UnicodeSegmentation;

/// Colors used to paint a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background.
    pub background: Rgb,
    /// Text color.
    pub text: Rgb,
    /// Focus band color, already blended over the background.
    pub focus_band: Rgb,
    /// Style for text inside the focus band.
    pub focus_text: Modifiers,
}

impl Default for Palette {
    fn default() -> Self {
        let background = Rgb::from_u32(0xFF_FE_E0);
        Self {
            background,
            text: Rgb::BLACK,
            focus_band: Rgb::new(0xFF, 0, 0).over(0x66, background),
            focus_text: Modifiers::BOLD,
        }
    }
}

/// Paint background, focus band and text, in that order.
///
/// The band is painted under the text, so lines crossing it stay readable.
pub fn paint_page(buffer: &mut Buffer, layout: &PageLayout<'_>, palette: &Palette) {
    buffer.fill(Cell::blank(palette.background));
    if !layout.focus_band.is_empty() {
        buffer.fill_rows_bg(layout.focus_band.y, layout.focus_band.bottom(), palette.focus_band);
    }

    for line in &layout.lines {
        let modifiers = if layout.in_focus(line.y) {
            palette.focus_text
        } else {
            Modifiers::empty()
        };
        let mut x = line.x;
        for grapheme in line.text.graphemes(true) {
            if x >= layout.column.right() {
                break;
            }
            let used = buffer.put_grapheme(x, line.y, grapheme, palette.text, modifiers);
            x += used.max(1);
        }
    }
}
