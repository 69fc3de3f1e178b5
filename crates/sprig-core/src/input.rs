//! Input state management

use std::collections::HashSet;

/// Keys the runtime understands. Backends translate their native key codes
/// into this set; anything else is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Space,
    Backspace,
    Tab,
    F1,
    F11,
    Char(char),
}

/// Tracks keyboard state per frame
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down
    keys_down: HashSet<Key>,
    /// Keys pressed this frame
    keys_just_pressed: HashSet<Key>,
    /// Keys released this frame
    keys_just_released: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press. Repeats of a held key are not new presses.
    pub fn process_key_down(&mut self, key: Key) {
        if self.keys_down.insert(key) {
            self.keys_just_pressed.insert(key);
        }
    }

    /// Record a release of a held key
    pub fn process_key_up(&mut self, key: Key) {
        if self.keys_down.remove(&key) {
            self.keys_just_released.insert(key);
        }
    }

    /// Forget this tick's edges; held keys stay held
    pub fn end_frame(&mut self) {
        self.keys_just_pressed.clear();
        self.keys_just_released.clear();
    }

    /// Drop everything, e.g. after the window loses focus
    pub fn reset(&mut self) {
        self.keys_down.clear();
        self.end_frame();
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn is_key_just_pressed(&self, key: Key) -> bool {
        self.keys_just_pressed.contains(&key)
    }

    pub fn is_key_just_released(&self, key: Key) -> bool {
        self.keys_just_released.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_edge_triggered() {
        let mut input = InputState::new();
        input.process_key_down(Key::Enter);
        assert!(input.is_key_just_pressed(Key::Enter));
        assert!(input.is_key_down(Key::Enter));

        input.end_frame();
        // OS key repeat must not re-trigger the edge
        input.process_key_down(Key::Enter);
        assert!(!input.is_key_just_pressed(Key::Enter));
        assert!(input.is_key_down(Key::Enter));
    }

    #[test]
    fn test_release() {
        let mut input = InputState::new();
        input.process_key_down(Key::Up);
        input.end_frame();
        input.process_key_up(Key::Up);
        assert!(!input.is_key_down(Key::Up));
        assert!(input.is_key_just_released(Key::Up));

        input.end_frame();
        assert!(!input.is_key_just_released(Key::Up));
    }

    #[test]
    fn test_release_without_press_ignored() {
        let mut input = InputState::new();
        input.process_key_up(Key::Escape);
        assert!(!input.is_key_just_released(Key::Escape));
    }

    #[test]
    fn test_reset_clears_held_keys() {
        let mut input = InputState::new();
        input.process_key_down(Key::Char('a'));
        input.reset();
        assert!(!input.is_key_down(Key::Char('a')));
        assert!(!input.is_key_just_pressed(Key::Char('a')));
    }
}
