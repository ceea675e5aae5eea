use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState};

/// Current keyboard state for the shell's window.
///
/// Holds the set of keys reported down by the platform. Mutated only by the
/// frame loop while it drains the event buffer, so queries made from the
/// update hook see every event polled this frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies one event to the held-key set.
    ///
    /// Quit events carry no key state and are ignored here; the loop driver
    /// owns that transition.
    pub fn apply_event(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::Key { key, state } => match state {
                KeyState::Pressed => {
                    self.keys_down.insert(key);
                }
                KeyState::Released => {
                    self.keys_down.remove(&key);
                }
            },

            InputEvent::Focused(focused) => {
                self.focused = focused;
                if !focused {
                    // Clear on focus loss so a key released while another
                    // window had focus cannot stay stuck down.
                    self.keys_down.clear();
                }
            }

            InputEvent::Quit => {}
        }
    }

    /// Returns whether `key` is currently held.
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns whether the key named `name` is currently held.
    ///
    /// The name is matched case-insensitively and truncated to
    /// [`MAX_KEY_NAME_LEN`](super::MAX_KEY_NAME_LEN) bytes. Empty and
    /// unrecognized names report not-pressed rather than failing.
    pub fn key_down_by_name(&self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => self.key_down(key),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed }
    }

    fn released(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Released }
    }

    #[test]
    fn press_then_release() {
        let mut state = InputState::default();
        state.apply_event(pressed(Key::W));
        assert!(state.key_down(Key::W));

        state.apply_event(released(Key::W));
        assert!(!state.key_down(Key::W));
    }

    #[test]
    fn repeat_press_is_idempotent() {
        let mut state = InputState::default();
        state.apply_event(pressed(Key::Space));
        state.apply_event(pressed(Key::Space));
        assert!(state.key_down(Key::Space));

        state.apply_event(released(Key::Space));
        assert!(!state.key_down(Key::Space));
    }

    #[test]
    fn query_by_name_is_case_insensitive() {
        let mut state = InputState::default();
        state.apply_event(pressed(Key::A));

        assert!(state.key_down_by_name("a"));
        assert!(state.key_down_by_name("A"));
    }

    #[test]
    fn absent_names_report_not_pressed() {
        let state = InputState::default();
        assert!(!state.key_down_by_name(""));
        assert!(!state.key_down_by_name("not_a_real_key"));
        assert!(!state.key_down_by_name(&"q".repeat(64)));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        state.apply_event(pressed(Key::Shift));
        state.apply_event(pressed(Key::D));
        state.apply_event(InputEvent::Focused(false));

        assert!(!state.key_down(Key::Shift));
        assert!(!state.key_down(Key::D));
    }

    #[test]
    fn quit_does_not_touch_key_state() {
        let mut state = InputState::default();
        state.apply_event(pressed(Key::Escape));
        state.apply_event(InputEvent::Quit);
        assert!(state.key_down(Key::Escape));
    }
}
