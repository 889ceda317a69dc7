//! Input plumbing between the terminal and the frame loop.
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │  Frame Loop  │
//! └──────────────┘  crossbeam channel  └──────────────┘
//! ```
//!
//! The frame loop is the only owner of the control state; the input thread
//! never touches it.

mod input;
mod messages;

pub use input::{convert_event, InputActor};
pub use messages::{InputEvent, KeyCode, KeyEvent, KeyModifiers, KeyState, PointerEvent, PointerKind};
