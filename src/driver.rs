//! Frame driver: runs one frame of classify → apply → tick → paint.

use crate::actor::InputEvent;
use crate::config::Config;
use crate::control::{classify, AutoscrollTicker, ControlDefaults, ControlState};
use crate::error::Result;
use crate::render::{Frame, Renderer};
use crate::source::{load_paragraphs_with_padding, Paragraphs};
use std::io;
use std::path::{Path, PathBuf};

/// One presentation: the text, where it came from, and the control state.
#[derive(Debug, Clone)]
pub struct Session {
    path: PathBuf,
    paragraphs: Paragraphs,
    state: ControlState,
}

impl Session {
    /// Start a session over already loaded text.
    pub fn new(path: impl Into<PathBuf>, paragraphs: Paragraphs, defaults: ControlDefaults) -> Self {
        Self {
            path: path.into(),
            paragraphs,
            state: ControlState::new(defaults),
        }
    }

    /// Load `path` and start a session with the configured defaults.
    pub fn open(path: impl AsRef<Path>, config: &Config) -> Result<Self> {
        let path = path.as_ref();
        let paragraphs = load_paragraphs_with_padding(path, config.padding_lines)?;
        Ok(Self::new(path, paragraphs, config.defaults))
    }

    /// File being presented.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Text being presented.
    pub const fn paragraphs(&self) -> &Paragraphs {
        &self.paragraphs
    }

    /// Current presentation parameters.
    pub const fn state(&self) -> &ControlState {
        &self.state
    }
}

/// Owns the session and the renderer and turns input into frames.
pub struct FrameDriver<R: Renderer> {
    session: Session,
    ticker: AutoscrollTicker,
    renderer: R,
    frames: u64,
}

impl<R: Renderer> FrameDriver<R> {
    /// Create a driver. Nothing is painted until the first [`frame`](Self::frame).
    pub const fn new(session: Session, ticker: AutoscrollTicker, renderer: R) -> Self {
        Self {
            session,
            ticker,
            renderer,
            frames: 0,
        }
    }

    /// Process one frame.
    ///
    /// Every event is classified and applied in order, then the autoscroll
    /// ticker runs once, then the renderer paints the result.
    pub fn frame<I>(&mut self, events: I) -> io::Result<()>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if let Some(command) = classify(&event) {
                self.session.state.apply(command);
                log::debug!("{} -> {:?}", command.name(), self.session.state);
            }
        }

        let now = self.renderer.current_time();
        if let Some(request) = self.ticker.tick(&mut self.session.state, now) {
            self.renderer.schedule_frame(request.at);
        }

        self.frames += 1;
        self.renderer.paint(&Frame {
            state: &self.session.state,
            paragraphs: &self.session.paragraphs,
        })
    }

    /// The session being presented.
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Current presentation parameters.
    pub const fn state(&self) -> &ControlState {
        &self.session.state
    }

    /// Frames processed so far.
    pub const fn frame_count(&self) -> u64 {
        self.frames
    }

    /// The renderer.
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The renderer, mutably (resize, scheduler access).
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Take the driver apart.
    pub fn into_parts(self) -> (Session, R) {
        (self.session, self.renderer)
    }
}
