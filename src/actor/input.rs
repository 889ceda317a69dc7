//! Input Actor: dedicated thread polling terminal events.
//!
//! crossterm's blocking `read` would stall the frame loop, so a small thread
//! polls with a timeout, converts events into [`InputEvent`]s and forwards
//! them over a channel. The frame loop drains that channel once per frame.

use super::messages::{InputEvent, KeyCode, KeyEvent, KeyModifiers, KeyState, PointerEvent, PointerKind};
use crate::control::Dp;
use crossbeam_channel::{SendTimeoutError, Sender};
use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Input actor that polls terminal events.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// `wheel_step` is the distance in dp reported for one wheel notch.
    pub fn spawn(sender: Sender<InputEvent>, poll_timeout: Duration, wheel_step: Dp) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("teleprompter-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout, wheel_step);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop(sender: &Sender<InputEvent>, shutdown: &AtomicBool, poll_timeout: Duration, wheel_step: Dp) {
        while !shutdown.load(Ordering::Relaxed) {
            let event = match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => convert_event(event, wheel_step),
                    Err(e) => Some(InputEvent::Error(e.to_string())),
                },
                Ok(false) => None,
                Err(e) => Some(InputEvent::Error(e.to_string())),
            };
            if let Some(event) = event {
                if !forward(sender, event, poll_timeout) {
                    return;
                }
            }
        }
        let _ = sender.try_send(InputEvent::Shutdown);
    }
}

/// Send one event to the frame loop, giving up after `timeout`.
///
/// Returns `false` once the frame loop has hung up. An event that could not
/// be delivered in time is dropped with a warning, so the thread can go back
/// to checking the shutdown flag.
fn forward(sender: &Sender<InputEvent>, event: InputEvent, timeout: Duration) -> bool {
    match sender.send_timeout(event, timeout) {
        Ok(()) => true,
        Err(SendTimeoutError::Timeout(event)) => {
            log::warn!("input channel full, dropped {event:?}");
            true
        }
        Err(SendTimeoutError::Disconnected(_)) => false,
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Convert a crossterm event. Events the teleprompter never uses map to `None`.
pub fn convert_event(event: Event, wheel_step: Dp) -> Option<InputEvent> {
    match event {
        Event::Key(key) => {
            let state = match key.kind {
                KeyEventKind::Press => KeyState::Press,
                KeyEventKind::Repeat => KeyState::Repeat,
                KeyEventKind::Release => KeyState::Release,
            };
            Some(InputEvent::Key(KeyEvent {
                code: convert_key_code(key.code)?,
                modifiers: convert_modifiers(key.modifiers),
                state,
            }))
        }
        Event::Mouse(mouse) => {
            let kind = match mouse.kind {
                MouseEventKind::Down(_) => PointerKind::Press,
                MouseEventKind::Up(_) => PointerKind::Release,
                MouseEventKind::Moved | MouseEventKind::Drag(_) => PointerKind::Move,
                MouseEventKind::ScrollDown => PointerKind::Scroll(wheel_step),
                MouseEventKind::ScrollUp => PointerKind::Scroll(-wheel_step),
                MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => return None,
            };
            Some(InputEvent::Pointer(PointerEvent {
                x: mouse.column,
                y: mouse.row,
                kind,
                modifiers: convert_modifiers(mouse.modifiers),
            }))
        }
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        Event::Paste(text) => Some(InputEvent::Paste(text)),
        Event::FocusGained | Event::FocusLost => None,
    }
}

fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
    Some(match code {
        event::KeyCode::Char(c) => KeyCode::Char(c),
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Esc => KeyCode::Esc,
        _ => return None,
    })
}

fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    out.set(KeyModifiers::SHIFT, mods.contains(event::KeyModifiers::SHIFT));
    out.set(KeyModifiers::CONTROL, mods.contains(event::KeyModifiers::CONTROL));
    out.set(KeyModifiers::ALT, mods.contains(event::KeyModifiers::ALT));
    out.set(KeyModifiers::SUPER, mods.contains(event::KeyModifiers::SUPER));
    out
}
