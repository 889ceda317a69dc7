//! Rect: a rectangle in terminal cells.

/// A rectangle defined by position and size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate (column) of the top-left corner.
    pub x: u16,
    /// Y coordinate (row) of the top-left corner.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from a terminal size (full screen).
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Zero-sized rectangle.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Check if the rectangle is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// A horizontally centred slice of this rectangle, `width` columns wide.
    ///
    /// The width is clamped to this rectangle's width.
    #[must_use]
    pub const fn centered_columns(&self, width: u16) -> Self {
        let width = if width < self.width { width } else { self.width };
        Self::new(self.x + (self.width - width) / 2, self.y, width, self.height)
    }

    /// Rows `top..bottom` of this rectangle, clipped to it.
    #[must_use]
    pub fn rows(&self, top: i64, bottom: i64) -> Self {
        let top = top.clamp(0, i64::from(self.height)) as u16;
        let bottom = bottom.clamp(i64::from(top), i64::from(self.height)) as u16;
        Self::new(self.x, self.y + top, self.width, bottom - top)
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let rect = Rect::new(2, 3, 4, 5);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 7));
        assert!(!rect.contains(6, 7));
        assert!(!rect.contains(5, 8));
    }

    #[test]
    fn test_centered_columns() {
        let screen = Rect::from_size(80, 24);
        assert_eq!(screen.centered_columns(60), Rect::new(10, 0, 60, 24));
        assert_eq!(screen.centered_columns(61), Rect::new(9, 0, 61, 24));
        assert_eq!(screen.centered_columns(200), screen);
        assert!(screen.centered_columns(0).is_empty());
    }

    #[test]
    fn test_rows_clip() {
        let screen = Rect::from_size(80, 24);
        assert_eq!(screen.rows(10, 14), Rect::new(0, 10, 80, 4));
        assert_eq!(screen.rows(-3, 2), Rect::new(0, 0, 80, 2));
        assert_eq!(screen.rows(20, 99), Rect::new(0, 20, 80, 4));
        assert!(screen.rows(30, 40).is_empty());
        assert!(screen.rows(5, 2).is_empty());
    }
}
