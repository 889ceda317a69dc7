//! Greedy word wrapping by display width.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Columns occupied by `text`. Control characters count as one column,
/// since the buffer draws them as spaces.
pub fn display_width(text: &str) -> usize {
    text.graphemes(true)
        .map(|g| if g.chars().any(char::is_control) { 1 } else { g.width() })
        .sum()
}

/// Break `text` into lines no wider than `max_width` columns.
///
/// Lines break at whitespace; whitespace at a break is dropped. A word wider
/// than the whole line is split between graphemes. An empty or all-blank
/// paragraph still yields one empty line. A zero width yields no lines.
pub fn wrap(text: &str, max_width: usize) -> Vec<&str> {
    let mut lines = Vec::new();
    if max_width == 0 {
        return lines;
    }

    // Current line is text[start..end] and is `width` columns wide; `gap` is
    // the whitespace seen since `end`.
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut width = 0;
    let mut gap = 0;

    for (idx, segment) in text.split_word_bound_indices() {
        if segment.chars().all(char::is_whitespace) {
            if start.is_some() {
                gap += display_width(segment);
            }
            continue;
        }

        let segment_width = display_width(segment);
        if let Some(line_start) = start {
            if width + gap + segment_width <= max_width {
                end = idx + segment.len();
                width += gap + segment_width;
                gap = 0;
                continue;
            }
            lines.push(&text[line_start..end]);
        }
        gap = 0;

        let mut piece_start = idx;
        let mut piece_width = 0;
        for (offset, grapheme) in segment.grapheme_indices(true) {
            let grapheme_width = display_width(grapheme);
            if piece_width > 0 && piece_width + grapheme_width > max_width {
                lines.push(&text[piece_start..idx + offset]);
                piece_start = idx + offset;
                piece_width = 0;
            }
            piece_width += grapheme_width;
        }
        start = Some(piece_start);
        end = idx + segment.len();
        width = piece_width;
    }

    if let Some(line_start) = start {
        lines.push(&text[line_start..end]);
    }
    if lines.is_empty() {
        lines.push("");
    }
    lines
}
