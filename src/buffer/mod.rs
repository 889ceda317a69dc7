//! Buffer module: the cell grid the terminal renderer paints into.
//!
//! - [`Cell`]: one column on one row
//! - [`Buffer`]: the full screen
//! - [`diff`]: minimal ANSI output between two buffers

mod cell;
#[allow(clippy::module_inception)]
mod buffer;
pub mod diff;

pub use buffer::Buffer;
pub use cell::{Cell, Glyph, Modifiers, Rgb};
