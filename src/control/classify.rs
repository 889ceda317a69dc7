//! Input classifier: raw input events in, [`Command`]s out.
//!
//! Key bindings (letters are case-insensitive):
//!
//! | Key     | Command                   | Magnitude  |
//! |---------|---------------------------|------------|
//! | `+`     | increase font size        | step       |
//! | `-`     | decrease font size        | step       |
//! | `Space` | toggle auto-scroll        |            |
//! | `K`     | scroll up                 | step × 4   |
//! | `J`     | scroll down               | step × 4   |
//! | `F`     | faster                    | 1          |
//! | `S`     | slower                    | 1          |
//! | `W`     | wider column              | step × 10  |
//! | `N`     | narrower column           | step × 10  |
//! | `U`     | focus band up             | step       |
//! | `D`     | focus band down           | step       |
//! | wheel   | pointer scroll            | delta × wheel step |
//!
//! Shift (and nothing else) boosts the step.

use super::command::{Command, StepSize};
use crate::actor::{InputEvent, KeyCode, KeyEvent, KeyModifiers, KeyState, PointerEvent, PointerKind};

/// Scroll keys move by this many steps.
pub const SCROLL_FACTOR: f32 = 4.0;
/// Column width keys move by this many steps.
pub const COLUMN_FACTOR: f32 = 10.0;

/// Classify any input event. Events that carry no command return `None`.
pub fn classify(event: &InputEvent) -> Option<Command> {
    match event {
        InputEvent::Key(key) => classify_key(key),
        InputEvent::Pointer(pointer) => classify_pointer(pointer),
        _ => None,
    }
}

/// Classify a keyboard event. Only presses produce commands.
pub fn classify_key(event: &KeyEvent) -> Option<Command> {
    if event.state != KeyState::Press {
        return None;
    }
    let KeyCode::Char(c) = event.code else {
        return None;
    };

    // Terminals report the letter as typed; an upper-case letter means Shift.
    let mut modifiers = event.modifiers;
    if c.is_ascii_uppercase() {
        modifiers |= KeyModifiers::SHIFT;
    }
    let step = StepSize::for_key(modifiers == KeyModifiers::SHIFT);

    let command = match c.to_ascii_uppercase() {
        '+' => Command::IncreaseFontSize(step.get()),
        '-' => Command::DecreaseFontSize(step.get()),
        ' ' => Command::ToggleAutoScroll,
        'K' => Command::ScrollUp(step.times(SCROLL_FACTOR)),
        'J' => Command::ScrollDown(step.times(SCROLL_FACTOR)),
        'F' => Command::IncreaseAutoScrollSpeed,
        'S' => Command::DecreaseAutoScrollSpeed,
        'W' => Command::IncreaseColumnWidth(step.times(COLUMN_FACTOR)),
        'N' => Command::DecreaseColumnWidth(step.times(COLUMN_FACTOR)),
        'U' => Command::MoveFocusBarUp(step.get()),
        'D' => Command::MoveFocusBarDown(step.get()),
        _ => return None,
    };
    Some(command)
}

/// Classify a pointer event. Only wheel movement produces a command.
pub fn classify_pointer(event: &PointerEvent) -> Option<Command> {
    let PointerKind::Scroll(delta) = event.kind else {
        return None;
    };
    let step = StepSize::for_pointer(event.modifiers == KeyModifiers::SHIFT);
    Some(Command::PointerScroll(step.times(delta)))
}
