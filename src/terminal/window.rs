//! Terminal window: owns the terminal modes and the frame loop.
//!
//! Opening the window enters raw mode and the alternate screen and starts
//! the input thread; closing it undoes all of that. A frame runs whenever
//! input arrives or a scheduled deadline passes.

use crate::actor::{InputActor, InputEvent};
use crate::config::Config;
use crate::driver::FrameDriver;
use crate::error::{Error, Result};
use crate::render::TerminalRenderer;
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError};
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use std::io::{self, Stdout, Write};
use std::time::Instant;

/// What the frame loop should do after looking at a batch of events.
enum Batch {
    Frame(Vec<InputEvent>),
    Close,
}

/// Raw-mode terminal session.
pub struct TerminalWindow {
    config: Config,
    input_rx: Receiver<InputEvent>,
    input_actor: Option<InputActor>,
    open: bool,
}

impl TerminalWindow {
    /// Take over the terminal.
    pub fn open(config: Config) -> Result<Self> {
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        let setup = (|| -> io::Result<()> {
            if config.alternate_screen {
                execute!(stdout, EnterAlternateScreen)?;
            }
            if config.enable_mouse {
                execute!(stdout, EnableMouseCapture)?;
            }
            execute!(stdout, cursor::Hide, SetTitle(&config.title))
        })();

        let (input_tx, input_rx) = bounded::<InputEvent>(64);
        let actor = setup.and_then(|()| InputActor::spawn(input_tx, config.input_poll_timeout, config.wheel_step));

        let mut window = Self {
            config,
            input_rx,
            input_actor: None,
            open: true,
        };
        match actor {
            Ok(actor) => {
                window.input_actor = Some(actor);
                Ok(window)
            }
            Err(e) => {
                let _ = window.restore();
                Err(Error::Terminal(e))
            }
        }
    }

    /// Current terminal size in columns and rows.
    pub fn size() -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    /// Run frames until the presenter closes the window.
    pub fn run(&mut self, driver: &mut FrameDriver<TerminalRenderer<Stdout>>) -> Result<()> {
        driver.frame(std::iter::empty())?;

        loop {
            let batch = self.next_batch(driver)?;
            let events = match batch {
                Batch::Frame(events) => events,
                Batch::Close => return Ok(()),
            };
            driver.renderer_mut().scheduler_mut().take_due(Instant::now());
            driver.frame(events)?;
        }
    }

    /// Block until there is something to draw, then collect pending input.
    fn next_batch(&self, driver: &mut FrameDriver<TerminalRenderer<Stdout>>) -> Result<Batch> {
        let timeout = driver.renderer().scheduler().time_until_next(Instant::now());
        let first = match timeout {
            Some(timeout) => match self.input_rx.recv_timeout(timeout) {
                Ok(event) => Some(event),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => return Ok(Batch::Close),
            },
            None => match self.input_rx.recv() {
                Ok(event) => Some(event),
                Err(_) => return Ok(Batch::Close),
            },
        };

        let mut events = Vec::new();
        for event in first.into_iter().chain(self.input_rx.try_iter()) {
            match event {
                InputEvent::Key(key) if key.is_close_request() => {
                    log::info!("close requested");
                    return Ok(Batch::Close);
                }
                InputEvent::Resize { width, height } => {
                    log::debug!("resize to {width}x{height}");
                    driver.renderer_mut().resize(width, height);
                }
                InputEvent::Error(message) => log::warn!("input error: {message}"),
                InputEvent::Shutdown => return Ok(Batch::Close),
                other => events.push(other),
            }
        }
        Ok(Batch::Frame(events))
    }

    /// Give the terminal back. Errors here are window-destroy failures.
    pub fn close(mut self) -> Result<()> {
        self.restore().map_err(Error::WindowDestroy)
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;

        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }

        let mut stdout = io::stdout();
        execute!(stdout, cursor::Show)?;
        if self.config.enable_mouse {
            execute!(stdout, DisableMouseCapture)?;
        }
        if self.config.alternate_screen {
            execute!(stdout, LeaveAlternateScreen)?;
        }
        stdout.flush()?;
        terminal::disable_raw_mode()
    }
}

impl Drop for TerminalWindow {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::error!("failed to restore terminal: {e}");
        }
    }
}
