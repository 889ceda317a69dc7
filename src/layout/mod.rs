//! Layout module: mapping the presentation state onto terminal cells.
//!
//! Layout is recomputed every frame from the control state; there is no
//! retained tree, just a flat list of placed lines and two rectangles.

mod page;
mod rect;
mod wrap;

pub use page::{CellMetrics, PageLayout, PlacedLine};
pub use rect::Rect;
pub use wrap::{display_width, wrap};
