//! # Teleprompter
//!
//! Scrolls a speech through the terminal at a pace the presenter controls
//! from the keyboard or the mouse wheel.
//!
//! ## Core Concepts
//!
//! - **Control state**: one plain value holding scroll offset, auto-scroll
//!   speed, font size, column width and the focus band
//! - **Classify → apply → tick**: each frame turns input events into
//!   commands, applies them, then advances auto-scroll once
//! - **Injected renderer**: the engine only talks to a [`Renderer`] trait,
//!   so it runs headless under test
//! - **Double-buffered output**: the terminal renderer writes only the cells
//!   that changed since the last frame
//!
//! ## Example
//!
//! ```rust,ignore
//! use teleprompter::{Config, Session};
//!
//! let config = Config::default();
//! let session = Session::open("speech.txt", &config)?;
//! teleprompter::terminal::present(session, config)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod buffer;
pub mod config;
pub mod control;
pub mod driver;
pub mod error;
pub mod layout;
pub mod render;
pub mod source;
pub mod terminal;

// Re-exports for convenience
pub use actor::{InputEvent, KeyCode, KeyEvent, KeyModifiers, PointerEvent};
pub use config::Config;
pub use control::{classify, AutoscrollTicker, Command, ControlDefaults, ControlState, FrameRequest};
pub use driver::{FrameDriver, Session};
pub use error::{Error, Result};
pub use render::{Frame, Renderer, TerminalRenderer};
pub use source::{load_paragraphs, Paragraphs};
