//! Buffer: a row-major grid of cells covering the terminal.

use super::cell::{Cell, Glyph, Modifiers, Rgb};
use unicode_width::UnicodeWidthStr;

/// A grid of cells representing the terminal screen.
///
/// Graphemes too long for inline storage live in `spill`, which is cleared
/// together with the cells.
#[derive(Clone)]
pub struct Buffer {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
    spill: Vec<String>,
}

impl Buffer {
    /// Create a buffer filled with [`Cell::EMPTY`].
    ///
    /// A zero-sized buffer is allowed; it simply has no cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: vec![Cell::EMPTY; usize::from(width) * usize::from(height)],
            width,
            height,
            spill: Vec::new(),
        }
    }

    /// Width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the buffer has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Cell at (x, y), or `None` out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Overwrite the cell at (x, y). Returns `false` out of bounds.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        match self.index_of(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Paint every cell with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
        self.spill.clear();
    }

    /// Paint rows `top..bottom` with background `bg`, keeping their glyphs.
    pub fn fill_rows_bg(&mut self, top: u16, bottom: u16, bg: Rgb) {
        let width = usize::from(self.width);
        let top = usize::from(top.min(self.height));
        let bottom = usize::from(bottom.min(self.height));
        if top >= bottom {
            return;
        }
        for cell in &mut self.cells[top * width..bottom * width] {
            *cell = cell.with_bg(bg);
        }
    }

    /// Write a grapheme at (x, y) keeping the cell's background.
    ///
    /// Control characters are drawn as spaces. A double-width grapheme that
    /// would not fit before the right edge is dropped. Returns the number of
    /// columns used.
    pub fn put_grapheme(&mut self, x: u16, y: u16, grapheme: &str, fg: Rgb, modifiers: Modifiers) -> u16 {
        let Some(idx) = self.index_of(x, y) else {
            return 0;
        };
        let bg = self.cells[idx].bg();

        let grapheme = if grapheme.chars().any(char::is_control) { " " } else { grapheme };
        let width = grapheme.width().min(2) as u8;
        if width == 2 && self.index_of(x + 1, y).is_none() {
            return 0;
        }

        let cell = Cell::from_grapheme(grapheme).unwrap_or_else(|| {
            self.spill.push(grapheme.to_string());
            Cell::spilled((self.spill.len() - 1) as u32, width)
        });
        self.cells[idx] = cell.with_fg(fg).with_bg(bg).with_modifiers(modifiers);

        if width == 2 {
            let next = idx + 1;
            self.cells[next] = Cell::continuation().with_bg(self.cells[next].bg());
        }
        u16::from(width)
    }

    /// Text displayed by the cell at (x, y), resolving spilled graphemes.
    pub fn grapheme_at(&self, x: u16, y: u16) -> Option<&str> {
        self.resolve(self.get(x, y)?)
    }

    /// Text displayed by `cell`, which must belong to this buffer.
    pub fn resolve<'a>(&'a self, cell: &'a Cell) -> Option<&'a str> {
        match cell.glyph() {
            Glyph::Spilled { index, .. } => self.spill.get(index as usize).map(String::as_str),
            Glyph::Inline { .. } => cell.grapheme(),
            Glyph::Continuation => None,
        }
    }

    /// Resize, discarding content. New cells are [`Cell::EMPTY`].
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height {
            return;
        }
        *self = Self::new(width, height);
    }

    /// Copy content from a buffer of the same size.
    pub fn copy_from(&mut self, other: &Self) {
        debug_assert_eq!(self.width, other.width);
        debug_assert_eq!(self.height, other.height);
        self.cells.copy_from_slice(&other.cells);
        self.spill.clone_from(&other.spill);
    }

    /// Row `y` as a plain string, one entry per column (continuations skipped).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.grapheme_at(x, y))
            .collect()
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("spilled", &self.spill.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_new() {
        let buffer = Buffer::new(80, 24);
        assert_eq!(buffer.width(), 80);
        assert_eq!(buffer.height(), 24);
        assert_eq!(buffer.len(), 80 * 24);
    }

    #[test]
    fn test_zero_sized_buffer() {
        let mut buffer = Buffer::new(0, 0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.put_grapheme(0, 0, "a", Rgb::BLACK, Modifiers::empty()), 0);
    }

    #[test]
    fn test_bounds() {
        let buffer = Buffer::new(80, 24);
        assert!(buffer.get(79, 23).is_some());
        assert!(buffer.get(80, 23).is_none());
        assert!(buffer.get(79, 24).is_none());
    }

    #[test]
    fn test_put_grapheme_keeps_background() {
        let mut buffer = Buffer::new(10, 2);
        let cream = Rgb::from_u32(0xFF_FE_E0);
        buffer.fill(Cell::blank(cream));

        assert_eq!(buffer.put_grapheme(2, 1, "A", Rgb::BLACK, Modifiers::empty()), 1);
        let cell = buffer.get(2, 1).unwrap();
        assert_eq!(cell.grapheme(), Some("A"));
        assert_eq!(cell.bg(), cream);
        assert_eq!(cell.fg(), Rgb::BLACK);
    }

    #[test]
    fn test_wide_grapheme() {
        let mut buffer = Buffer::new(10, 1);
        assert_eq!(buffer.put_grapheme(5, 0, "日", Rgb::BLACK, Modifiers::empty()), 2);
        assert_eq!(buffer.grapheme_at(5, 0), Some("日"));
        assert!(buffer.get(6, 0).unwrap().is_continuation());

        // No room at the right edge.
        assert_eq!(buffer.put_grapheme(9, 0, "日", Rgb::BLACK, Modifiers::empty()), 0);
    }

    #[test]
    fn test_spilled_grapheme() {
        let mut buffer = Buffer::new(10, 1);
        let family = "👨‍👩‍👧‍👦";
        assert!(buffer.put_grapheme(0, 0, family, Rgb::BLACK, Modifiers::empty()) > 0);
        assert_eq!(buffer.grapheme_at(0, 0), Some(family));

        buffer.fill(Cell::EMPTY);
        assert_eq!(buffer.grapheme_at(0, 0), Some(" "));
    }

    #[test]
    fn test_control_chars_become_spaces() {
        let mut buffer = Buffer::new(4, 1);
        assert_eq!(buffer.put_grapheme(0, 0, "\t", Rgb::BLACK, Modifiers::empty()), 1);
        assert_eq!(buffer.grapheme_at(0, 0), Some(" "));
    }

    #[test]
    fn test_fill_rows_bg() {
        let mut buffer = Buffer::new(3, 4);
        let red = Rgb::new(255, 0, 0);
        buffer.put_grapheme(1, 1, "x", Rgb::WHITE, Modifiers::empty());
        buffer.fill_rows_bg(1, 3, red);

        assert_eq!(buffer.get(0, 0).unwrap().bg(), Rgb::BLACK);
        assert_eq!(buffer.get(1, 1).unwrap().bg(), red);
        assert_eq!(buffer.grapheme_at(1, 1), Some("x"));
        assert_eq!(buffer.get(2, 2).unwrap().bg(), red);
        assert_eq!(buffer.get(0, 3).unwrap().bg(), Rgb::BLACK);

        // Out-of-range rows are clipped.
        buffer.fill_rows_bg(3, 40, red);
        assert_eq!(buffer.get(0, 3).unwrap().bg(), red);
    }

    #[test]
    fn test_resize_clears() {
        let mut buffer = Buffer::new(8, 2);
        buffer.put_grapheme(0, 0, "x", Rgb::WHITE, Modifiers::empty());
        buffer.resize(20, 5);
        assert_eq!(buffer.len(), 100);
        assert_eq!(buffer.grapheme_at(0, 0), Some(" "));
    }

    #[test]
    fn test_row_text() {
        let mut buffer = Buffer::new(6, 1);
        buffer.put_grapheme(1, 0, "h", Rgb::WHITE, Modifiers::empty());
        buffer.put_grapheme(2, 0, "i", Rgb::WHITE, Modifiers::empty());
        assert_eq!(buffer.row_text(0), " hi   ");
    }
}
