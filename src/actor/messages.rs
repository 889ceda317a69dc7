//! Message types sent from the input thread to the frame loop.

use crate::control::Dp;
use bitflags::bitflags;

/// Key codes the teleprompter cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Esc,
}

bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0001;
        /// Control key.
        const CONTROL = 0b0010;
        /// Alt/Option key.
        const ALT = 0b0100;
        /// Super/Command/Windows key.
        const SUPER = 0b1000;
    }
}

/// Transition of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyState {
    /// Key went down.
    Press,
    /// Key is held and auto-repeating.
    Repeat,
    /// Key came back up.
    Release,
}

/// Keyboard event details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers held during the event.
    pub modifiers: KeyModifiers,
    /// Press, repeat or release.
    pub state: KeyState,
}

impl KeyEvent {
    /// A key press with the given modifiers.
    pub const fn press(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            code,
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Whether this event asks the window to close (Esc, `q`, Ctrl+C).
    pub fn is_close_request(&self) -> bool {
        if self.state != KeyState::Press {
            return false;
        }
        match self.code {
            KeyCode::Esc => true,
            KeyCode::Char('q') => !self.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT),
            KeyCode::Char('c') => self.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
    }
}

/// Kind of pointer activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerKind {
    /// Button pressed.
    Press,
    /// Button released.
    Release,
    /// Pointer moved, with or without a button held.
    Move,
    /// Wheel scrolled by a vertical delta in dp; positive moves forward.
    Scroll(Dp),
}

/// Pointer event details.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Column of the pointer.
    pub x: u16,
    /// Row of the pointer.
    pub y: u16,
    /// What happened.
    pub kind: PointerKind,
    /// Modifiers held during the event.
    pub modifiers: KeyModifiers,
}

impl PointerEvent {
    /// A wheel event at the origin.
    pub const fn scroll(delta: Dp, modifiers: KeyModifiers) -> Self {
        Self {
            x: 0,
            y: 0,
            kind: PointerKind::Scroll(delta),
            modifiers,
        }
    }
}

/// Events from the input thread.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Keyboard activity.
    Key(KeyEvent),

    /// Mouse activity.
    Pointer(PointerEvent),

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Text pasted into the terminal; not consumed by the engine.
    Paste(String),

    /// Input thread encountered an error.
    Error(String),

    /// Input thread is shutting down.
    Shutdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_requests() {
        assert!(KeyEvent::press(KeyCode::Esc, KeyModifiers::empty()).is_close_request());
        assert!(KeyEvent::press(KeyCode::Char('q'), KeyModifiers::empty()).is_close_request());
        assert!(KeyEvent::press(KeyCode::Char('c'), KeyModifiers::CONTROL).is_close_request());
        assert!(!KeyEvent::press(KeyCode::Char('c'), KeyModifiers::empty()).is_close_request());
        assert!(!KeyEvent::press(KeyCode::Char('Q'), KeyModifiers::SHIFT).is_close_request());
    }

    #[test]
    fn test_release_never_closes() {
        let event = KeyEvent {
            code: KeyCode::Esc,
            modifiers: KeyModifiers::empty(),
            state: KeyState::Release,
        };
        assert!(!event.is_close_request());
    }
}
