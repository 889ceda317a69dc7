//! Diffing: turn the change between two buffers into ANSI output.
//!
//! Only changed cells are written. The cursor is moved only when the next
//! changed cell is not where the previous write left it, and SGR sequences
//! are emitted only when the style actually changes.

use super::{Buffer, Cell, Modifiers, Rgb};
use std::io::Write;

/// What the terminal currently has selected, as far as we know.
#[derive(Debug, Clone, Default)]
pub struct DiffState {
    cursor: Option<(u16, u16)>,
    style: Option<Style>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Style {
    fg: Rgb,
    bg: Rgb,
    modifiers: Modifiers,
}

impl Style {
    const fn of(cell: &Cell) -> Self {
        Self {
            fg: cell.fg(),
            bg: cell.bg(),
            modifiers: cell.modifiers(),
        }
    }
}

impl DiffState {
    /// Start with unknown cursor position and style.
    pub const fn new() -> Self {
        Self {
            cursor: None,
            style: None,
        }
    }

    /// Forget everything, e.g. after a full redraw or a resize.
    pub fn reset(&mut self) {
        self.cursor = None;
        self.style = None;
    }
}

/// Counters from one diff pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Cells that differed.
    pub cells_changed: usize,
    /// Cursor moves emitted.
    pub cursor_moves: usize,
    /// SGR style changes emitted.
    pub style_changes: usize,
}

/// Append the ANSI sequences that turn `current` into `next`.
pub fn render_diff(current: &Buffer, next: &Buffer, output: &mut Vec<u8>, state: &mut DiffState) -> DiffStats {
    debug_assert_eq!(current.width(), next.width());
    debug_assert_eq!(current.height(), next.height());

    let mut stats = DiffStats::default();
    let width = next.width();

    for (i, (old, new)) in current.cells().iter().zip(next.cells()).enumerate() {
        let unchanged = old == new && current.resolve(old) == next.resolve(new);
        if unchanged || new.is_continuation() {
            continue;
        }
        let x = (i % usize::from(width)) as u16;
        let y = (i / usize::from(width)) as u16;
        stats.cells_changed += 1;

        if state.cursor != Some((x, y)) {
            move_cursor(output, x, y);
            stats.cursor_moves += 1;
        }
        let style = Style::of(new);
        if state.style != Some(style) {
            write_style(output, style);
            state.style = Some(style);
            stats.style_changes += 1;
        }
        write_glyph(output, new, next);
        state.cursor = Some((x.saturating_add(u16::from(new.glyph().width().max(1))), y));
    }

    stats
}

/// Append a full repaint of `buffer`, ignoring what is on screen.
pub fn render_full(buffer: &Buffer, output: &mut Vec<u8>, state: &mut DiffState) {
    output.extend_from_slice(b"\x1b[0m\x1b[H");
    state.reset();

    for y in 0..buffer.height() {
        move_cursor(output, 0, y);
        for x in 0..buffer.width() {
            let Some(cell) = buffer.get(x, y) else {
                continue;
            };
            if cell.is_continuation() {
                continue;
            }
            let style = Style::of(cell);
            if state.style != Some(style) {
                write_style(output, style);
                state.style = Some(style);
            }
            write_glyph(output, cell, buffer);
        }
    }
    state.cursor = None;
}

/// Move the cursor, using the short home and column-1 forms when possible.
fn move_cursor(output: &mut Vec<u8>, x: u16, y: u16) {
    let row = u32::from(y) + 1;
    let col = u32::from(x) + 1;
    if row == 1 && col == 1 {
        output.extend_from_slice(b"\x1b[H");
    } else if col == 1 {
        let _ = write!(output, "\x1b[{row}H");
    } else {
        let _ = write!(output, "\x1b[{row};{col}H");
    }
}

/// Select a complete style. Always resets first so removed modifiers clear.
fn write_style(output: &mut Vec<u8>, style: Style) {
    output.extend_from_slice(b"\x1b[0");
    for (flag, code) in [
        (Modifiers::BOLD, b";1".as_slice()),
        (Modifiers::DIM, b";2"),
        (Modifiers::ITALIC, b";3"),
        (Modifiers::UNDERLINE, b";4"),
        (Modifiers::REVERSED, b";7"),
    ] {
        if style.modifiers.contains(flag) {
            output.extend_from_slice(code);
        }
    }
    let (fg, bg) = (style.fg, style.bg);
    let _ = write!(
        output,
        ";38;2;{};{};{};48;2;{};{};{}m",
        fg.r, fg.g, fg.b, bg.r, bg.g, bg.b
    );
}

fn write_glyph(output: &mut Vec<u8>, cell: &Cell, buffer: &Buffer) {
    match buffer.resolve(cell) {
        Some(text) => output.extend_from_slice(text.as_bytes()),
        None => output.push(b' '),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put(buffer: &mut Buffer, x: u16, y: u16, text: &str) {
        buffer.put_grapheme(x, y, text, Rgb::WHITE, Modifiers::empty());
    }

    #[test]
    fn test_identical_buffers_emit_nothing() {
        let a = Buffer::new(10, 5);
        let b = Buffer::new(10, 5);
        let mut output = Vec::new();
        let stats = render_diff(&a, &b, &mut output, &mut DiffState::new());
        assert_eq!(stats.cells_changed, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_single_change() {
        let a = Buffer::new(10, 5);
        let mut b = Buffer::new(10, 5);
        put(&mut b, 5, 2, "X");

        let mut output = Vec::new();
        let stats = render_diff(&a, &b, &mut output, &mut DiffState::new());
        assert_eq!(stats.cells_changed, 1);
        assert_eq!(stats.cursor_moves, 1);
        let text = String::from_utf8_lossy(&output);
        assert!(text.starts_with("\x1b[3;6H"));
        assert!(text.ends_with('X'));
    }

    #[test]
    fn test_adjacent_cells_share_one_move_and_style() {
        let a = Buffer::new(10, 5);
        let mut b = Buffer::new(10, 5);
        put(&mut b, 0, 1, "A");
        put(&mut b, 1, 1, "B");
        put(&mut b, 2, 1, "C");

        let mut output = Vec::new();
        let stats = render_diff(&a, &b, &mut output, &mut DiffState::new());
        assert_eq!(stats.cells_changed, 3);
        assert_eq!(stats.cursor_moves, 1);
        assert_eq!(stats.style_changes, 1);
        assert!(String::from_utf8_lossy(&output).ends_with("ABC"));
    }

    #[test]
    fn test_background_change_is_a_change() {
        let a = Buffer::new(4, 1);
        let mut b = Buffer::new(4, 1);
        b.fill_rows_bg(0, 1, Rgb::new(1, 2, 3));

        let mut output = Vec::new();
        let stats = render_diff(&a, &b, &mut output, &mut DiffState::new());
        assert_eq!(stats.cells_changed, 4);
        assert!(String::from_utf8_lossy(&output).contains("48;2;1;2;3m"));
    }

    #[test]
    fn test_wide_char_advances_two_columns() {
        let a = Buffer::new(6, 1);
        let mut b = Buffer::new(6, 1);
        put(&mut b, 0, 0, "日");
        put(&mut b, 2, 0, "x");

        let mut output = Vec::new();
        let stats = render_diff(&a, &b, &mut output, &mut DiffState::new());
        assert_eq!(stats.cells_changed, 2);
        assert_eq!(stats.cursor_moves, 1);
    }

    #[test]
    fn test_cursor_move_forms() {
        let mut output = Vec::new();
        move_cursor(&mut output, 0, 0);
        assert_eq!(&output, b"\x1b[H");

        output.clear();
        move_cursor(&mut output, 0, 5);
        assert_eq!(&output, b"\x1b[6H");

        output.clear();
        move_cursor(&mut output, 10, 5);
        assert_eq!(&output, b"\x1b[6;11H");
    }

    #[test]
    fn test_style_includes_modifiers() {
        let mut output = Vec::new();
        write_style(
            &mut output,
            Style {
                fg: Rgb::BLACK,
                bg: Rgb::WHITE,
                modifiers: Modifiers::BOLD | Modifiers::UNDERLINE,
            },
        );
        assert_eq!(&output, b"\x1b[0;1;4;38;2;0;0;0;48;2;255;255;255m");
    }

    #[test]
    fn test_render_full() {
        let mut buffer = Buffer::new(3, 2);
        put(&mut buffer, 0, 0, "A");
        put(&mut buffer, 1, 0, "B");
        put(&mut buffer, 2, 1, "C");

        let mut output = Vec::new();
        let mut state = DiffState::new();
        render_full(&buffer, &mut output, &mut state);

        let text = String::from_utf8_lossy(&output);
        assert!(text.starts_with("\x1b[0m\x1b[H"));
        assert!(text.contains("AB "));
        assert!(text.contains("\x1b[2H"));
        assert!(text.ends_with("  C"));
    }
}
