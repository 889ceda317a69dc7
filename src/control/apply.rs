//! Command applier: one [`Command`] in, next [`ControlState`] out.

use super::command::Command;
use super::state::ControlState;

impl ControlState {
    /// Apply a command in place. Total: every command is valid in every state.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::IncreaseFontSize(step) => self.grow_font(step),
            Command::DecreaseFontSize(step) => self.grow_font(-step),
            Command::ToggleAutoScroll => self.toggle_auto_scroll(),
            Command::ScrollUp(amount) => self.scroll_by(-amount),
            Command::ScrollDown(amount) | Command::PointerScroll(amount) => self.scroll_by(amount),
            Command::IncreaseAutoScrollSpeed => self.speed_up(),
            Command::DecreaseAutoScrollSpeed => self.slow_down(),
            Command::IncreaseColumnWidth(amount) => self.widen_column(amount),
            Command::DecreaseColumnWidth(amount) => self.widen_column(-amount),
            Command::MoveFocusBarUp(amount) => self.move_focus_bar(-amount),
            Command::MoveFocusBarDown(amount) => self.move_focus_bar(amount),
        }
    }

    /// Return the state after applying `command`, leaving `self` untouched.
    #[must_use]
    pub fn applied(mut self, command: Command) -> Self {
        self.apply(command);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_font_size_moves_band_height() {
        let before = ControlState::default();
        let after = before.applied(Command::IncreaseFontSize(6.0));
        assert_eq!(after.font_size(), before.font_size() + 6.0);
        assert_eq!(after.focus_bar_height(), before.focus_bar_height() + 9.0);

        let back = after.applied(Command::DecreaseFontSize(6.0));
        assert_eq!(back, before);
    }

    #[test]
    fn test_font_size_can_go_negative() {
        let mut state = ControlState::default();
        for _ in 0..40 {
            state.apply(Command::DecreaseFontSize(1.0));
        }
        assert_eq!(state.font_size(), -5.0);
        assert_eq!(state.focus_bar_height(), 50.0 - 60.0);
    }

    #[test]
    fn test_toggle_flips() {
        let mut state = ControlState::default();
        state.apply(Command::ToggleAutoScroll);
        assert!(state.auto_scroll_enabled());
        state.apply(Command::ToggleAutoScroll);
        assert!(!state.auto_scroll_enabled());
        assert_eq!(state.auto_scroll_speed(), 1.0);
    }

    #[test]
    fn test_toggle_at_zero_speed_starts_motion() {
        let mut state = ControlState::default();
        state.apply(Command::DecreaseAutoScrollSpeed);
        assert_eq!(state.auto_scroll_speed(), 0.0);

        // Disabled at zero speed.
        state.apply(Command::ToggleAutoScroll);
        assert!(state.auto_scroll_enabled());
        assert_eq!(state.auto_scroll_speed(), 1.0);

        // Enabled at zero speed: still forced on.
        let mut state = ControlState::default().applied(Command::ToggleAutoScroll);
        state.apply(Command::DecreaseAutoScrollSpeed);
        assert!(state.auto_scroll_enabled());
        state.apply(Command::ToggleAutoScroll);
        assert!(state.auto_scroll_enabled());
        assert_eq!(state.auto_scroll_speed(), 1.0);
    }

    #[test]
    fn test_increase_speed_always_enables() {
        let state = ControlState::default().applied(Command::IncreaseAutoScrollSpeed);
        assert!(state.auto_scroll_enabled());
        assert_eq!(state.auto_scroll_speed(), 2.0);

        let state = state.applied(Command::IncreaseAutoScrollSpeed);
        assert!(state.auto_scroll_enabled());
        assert_eq!(state.auto_scroll_speed(), 3.0);
    }

    #[test]
    fn test_decrease_speed_then_disable() {
        let mut state = ControlState::default().applied(Command::ToggleAutoScroll);

        state.apply(Command::DecreaseAutoScrollSpeed);
        assert_eq!(state.auto_scroll_speed(), 0.0);
        assert!(state.auto_scroll_enabled());

        state.apply(Command::DecreaseAutoScrollSpeed);
        assert_eq!(state.auto_scroll_speed(), 0.0);
        assert!(!state.auto_scroll_enabled());
    }

    #[test]
    fn test_decrease_speed_keeps_disabled_state() {
        let state = ControlState::default().applied(Command::DecreaseAutoScrollSpeed);
        assert!(!state.auto_scroll_enabled());
        assert_eq!(state.auto_scroll_speed(), 0.0);
    }

    #[test]
    fn test_pointer_scroll_clamps() {
        let mut state = ControlState::default();
        state.apply(Command::PointerScroll(3.0));
        state.apply(Command::PointerScroll(-5.0));
        assert_eq!(state.scroll_offset(), 0.0);

        state.apply(Command::PointerScroll(12.0));
        state.apply(Command::PointerScroll(-5.0));
        assert_eq!(state.scroll_offset(), 7.0);
    }

    #[test]
    fn test_scroll_keys() {
        let state = ControlState::default()
            .applied(Command::ScrollDown(24.0))
            .applied(Command::ScrollUp(4.0));
        assert_eq!(state.scroll_offset(), 20.0);

        let state = state.applied(Command::ScrollUp(400.0));
        assert_eq!(state.scroll_offset(), 0.0);
    }

    #[test]
    fn test_column_width_unclamped() {
        let state = ControlState::default().applied(Command::IncreaseColumnWidth(60.0));
        assert_eq!(state.text_column_width(), 610.0);

        let mut state = ControlState::default();
        for _ in 0..10 {
            state.apply(Command::DecreaseColumnWidth(60.0));
        }
        assert_eq!(state.text_column_width(), -50.0);
    }

    #[test]
    fn test_focus_bar_moves_both_ways() {
        let state = ControlState::default().applied(Command::MoveFocusBarUp(6.0));
        assert_eq!(state.focus_bar_position(), 164.0);
        let state = state.applied(Command::MoveFocusBarDown(1.0));
        assert_eq!(state.focus_bar_position(), 165.0);

        let state = ControlState::default().applied(Command::MoveFocusBarUp(500.0));
        assert_eq!(state.focus_bar_position(), -330.0);
    }

    fn scroll_command() -> impl Strategy<Value = Command> {
        prop_oneof![
            (0u8..=6).prop_map(|s| Command::ScrollUp(f32::from(s) * 4.0)),
            (0u8..=6).prop_map(|s| Command::ScrollDown(f32::from(s) * 4.0)),
            (-50i16..=50).prop_map(|d| Command::PointerScroll(f32::from(d))),
        ]
    }

    proptest! {
        #[test]
        fn scroll_offset_never_negative(commands in prop::collection::vec(scroll_command(), 0..200)) {
            let mut state = ControlState::default();
            for command in commands {
                state.apply(command);
                prop_assert!(state.scroll_offset() >= 0.0);
            }
        }

        #[test]
        fn slowing_down_disables_exactly_at_zero(start in 0u8..20) {
            let mut state = ControlState::default().applied(Command::ToggleAutoScroll);
            for _ in 1..start {
                state.apply(Command::IncreaseAutoScrollSpeed);
            }
            let mut speed = state.auto_scroll_speed();
            while state.auto_scroll_enabled() {
                let was = speed;
                state.apply(Command::DecreaseAutoScrollSpeed);
                speed = state.auto_scroll_speed();
                prop_assert!(speed >= 0.0);
                if was > 0.0 {
                    prop_assert_eq!(speed, was - 1.0);
                    prop_assert!(state.auto_scroll_enabled());
                } else {
                    prop_assert!(!state.auto_scroll_enabled());
                }
            }
            prop_assert_eq!(speed, 0.0);
        }

        #[test]
        fn font_size_round_trips(step in 1u8..=6) {
            let step = f32::from(step);
            let before = ControlState::default();
            let grown = before.applied(Command::IncreaseFontSize(step));
            prop_assert_eq!(grown.font_size() - before.font_size(), step);
            prop_assert_eq!(grown.focus_bar_height() - before.focus_bar_height(), step * 1.5);
            prop_assert_eq!(grown.applied(Command::DecreaseFontSize(step)), before);
        }
    }
}
