//! Presentation control engine.
//!
//! Everything here is pure computation over a [`ControlState`] value:
//!
//! ```text
//! InputEvent ──▶ classify ──▶ Command ──▶ ControlState::apply
//!                                               │
//!                         AutoscrollTicker::tick ◀┘──▶ Option<FrameRequest>
//! ```
//!
//! Nothing in this module touches the terminal, the clock or the filesystem.

mod apply;
mod classify;
mod command;
mod state;
mod ticker;

pub use classify::{classify, classify_key, classify_pointer, COLUMN_FACTOR, SCROLL_FACTOR};
pub use command::{Command, StepSize};
pub use state::{ControlDefaults, ControlState, Dp, Sp};
pub use ticker::{AutoscrollTicker, FrameRequest, DEFAULT_FRAME_DELAY};
