//! Cell: one terminal column on one row.
//!
//! A cell stores its grapheme inline when the UTF-8 encoding fits in four
//! bytes, which covers every single code point. Longer clusters (emoji ZWJ
//! sequences, stacked combining marks) are spilled into the owning
//! [`Buffer`](super::Buffer) and referenced by index.

use bitflags::bitflags;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Composite `self` with the given alpha over an opaque `base`.
    #[must_use]
    pub fn over(self, alpha: u8, base: Self) -> Self {
        let mix = |top: u8, bottom: u8| {
            let a = u16::from(alpha);
            let value = (u16::from(top) * a + u16::from(bottom) * (255 - a) + 127) / 255;
            value as u8
        };
        Self::new(mix(self.r, base.r), mix(self.g, base.g), mix(self.b, base.b))
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

bitflags! {
    /// Text style modifiers.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0001_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// What a cell displays.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Glyph {
    /// A grapheme stored in place.
    Inline {
        /// UTF-8 bytes, zero padded.
        bytes: [u8; 4],
        /// Number of used bytes.
        len: u8,
        /// Display width in columns.
        width: u8,
    },
    /// A grapheme stored in the buffer's spill table.
    Spilled {
        /// Index into the spill table.
        index: u32,
        /// Display width in columns.
        width: u8,
    },
    /// Right half of a double-width grapheme in the previous column.
    Continuation,
}

impl Glyph {
    /// A plain space.
    pub const SPACE: Self = Self::Inline {
        bytes: [b' ', 0, 0, 0],
        len: 1,
        width: 1,
    };

    /// Display width in columns (0 for continuations).
    #[inline]
    pub const fn width(&self) -> u8 {
        match self {
            Self::Inline { width, .. } | Self::Spilled { width, .. } => *width,
            Self::Continuation => 0,
        }
    }
}

/// A single terminal cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    glyph: Glyph,
    fg: Rgb,
    bg: Rgb,
    modifiers: Modifiers,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// A space with white text on black.
    pub const EMPTY: Self = Self::blank(Rgb::BLACK);

    /// A space painted with `bg`.
    pub const fn blank(bg: Rgb) -> Self {
        Self {
            glyph: Glyph::SPACE,
            fg: Rgb::WHITE,
            bg,
            modifiers: Modifiers::empty(),
        }
    }

    /// Create a cell holding a single character.
    pub fn from_char(c: char) -> Self {
        let mut bytes = [0u8; 4];
        let len = c.encode_utf8(&mut bytes).len() as u8;
        let width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0) as u8;
        Self {
            glyph: Glyph::Inline { bytes, len, width },
            ..Self::EMPTY
        }
    }

    /// Create a cell from a grapheme cluster, or `None` if it must be spilled.
    pub fn from_grapheme(grapheme: &str) -> Option<Self> {
        let src = grapheme.as_bytes();
        if src.len() > 4 {
            return None;
        }
        let mut bytes = [0u8; 4];
        bytes[..src.len()].copy_from_slice(src);
        let width = unicode_width::UnicodeWidthStr::width(grapheme).min(2) as u8;
        Some(Self {
            glyph: Glyph::Inline {
                bytes,
                len: src.len() as u8,
                width,
            },
            ..Self::EMPTY
        })
    }

    /// Create a cell pointing at spill-table entry `index`.
    pub const fn spilled(index: u32, width: u8) -> Self {
        Self {
            glyph: Glyph::Spilled { index, width },
            ..Self::EMPTY
        }
    }

    /// Create the right half of a double-width grapheme.
    pub const fn continuation() -> Self {
        Self {
            glyph: Glyph::Continuation,
            ..Self::EMPTY
        }
    }

    /// What this cell displays.
    #[inline]
    pub const fn glyph(&self) -> Glyph {
        self.glyph
    }

    /// The inline grapheme, or `None` for spilled and continuation cells.
    pub fn grapheme(&self) -> Option<&str> {
        match &self.glyph {
            Glyph::Inline { bytes, len, .. } => std::str::from_utf8(&bytes[..*len as usize]).ok(),
            _ => None,
        }
    }

    /// Whether this is the right half of a wide grapheme.
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        matches!(self.glyph, Glyph::Continuation)
    }

    /// Foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.fg
    }

    /// Background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.bg
    }

    /// Text modifiers.
    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Builder: set the foreground color.
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Builder: set the background color.
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Builder: set the modifiers.
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}
