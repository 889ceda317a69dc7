//! Text source: turns a file into the paragraph list shown on screen.

use crate::error::{Error, Result};
use std::fs;
use std::ops::Index;
use std::path::Path;

/// Blank lines appended after the text so the last real line can scroll
/// fully off screen.
pub const DEFAULT_PADDING_LINES: usize = 10;

/// Ordered, immutable list of display lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraphs {
    lines: Vec<String>,
}

impl Paragraphs {
    /// Wrap an existing list of lines as-is.
    pub const fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split text on `\n` and append `padding` empty lines.
    ///
    /// A trailing `\r` on each line is dropped so CRLF files display cleanly.
    pub fn from_text(text: &str, padding: usize) -> Self {
        let mut lines: Vec<String> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        lines.extend(std::iter::repeat_with(String::new).take(padding));
        Self { lines }
    }

    /// Number of lines, padding included.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether there are no lines at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Iterate over the lines in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl Index<usize> for Paragraphs {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.lines[index]
    }
}

/// Read `path` into a paragraph list padded with `padding` blank lines.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn load_paragraphs_with_padding(path: impl AsRef<Path>, padding: usize) -> Result<Paragraphs> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Error::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;
    let paragraphs = Paragraphs::from_text(&String::from_utf8_lossy(&bytes), padding);
    log::info!("loaded {} lines from {}", paragraphs.len(), path.display());
    Ok(paragraphs)
}

/// Read `path` into a paragraph list with the default padding.
pub fn load_paragraphs(path: impl AsRef<Path>) -> Result<Paragraphs> {
    load_paragraphs_with_padding(path, DEFAULT_PADDING_LINES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_split_and_pad() {
        let paragraphs = Paragraphs::from_text("one\ntwo\n\nthree", 10);
        assert_eq!(paragraphs.len(), 14);
        assert_eq!(&paragraphs[0], "one");
        assert_eq!(&paragraphs[2], "");
        assert_eq!(&paragraphs[3], "three");
        assert!(paragraphs.iter().skip(4).all(str::is_empty));
    }

    #[test]
    fn test_trailing_newline_keeps_empty_line() {
        let paragraphs = Paragraphs::from_text("only\n", 0);
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs.get(1), Some(""));
    }

    #[test]
    fn test_crlf_is_stripped() {
        let paragraphs = Paragraphs::from_text("a\r\nb\r\n", 0);
        assert_eq!(paragraphs.get(0), Some("a"));
        assert_eq!(paragraphs.get(1), Some("b"));
    }

    #[test]
    fn test_empty_file_is_only_padding() {
        let paragraphs = Paragraphs::from_text("", DEFAULT_PADDING_LINES);
        assert_eq!(paragraphs.len(), 11);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Good evening.\nThank you for coming.").unwrap();

        let paragraphs = load_paragraphs(file.path()).unwrap();
        assert_eq!(paragraphs.len(), 2 + DEFAULT_PADDING_LINES);
        assert_eq!(paragraphs.get(1), Some("Thank you for coming."));
    }

    #[test]
    fn test_missing_file_is_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("speech.txt");

        let err = load_paragraphs(&missing).unwrap_err();
        match err {
            Error::SourceRead { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }
}
