//! Keyboard state tracking
//!
//! Turns key-down / key-up events into the held / pressed-this-frame queries
//! the game asks for. Frame lifecycle: events → query → `end_frame()`.

use std::collections::HashSet;

use super::{InputSource, Key};

/// Held keys plus keys that went down since the last `end_frame()`
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<Key>,
    pressed_this_frame: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down. Auto-repeat events for an already held key
    /// do not count as a new press.
    pub fn key_down(&mut self, key: Key) {
        if self.held.insert(key) {
            self.pressed_this_frame.insert(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Release everything (window lost focus)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Forget per-frame presses; call after the game consumed the frame
    pub fn end_frame(&mut self) {
        self.pressed_this_frame.clear();
    }
}

impl InputSource for KeyboardState {
    fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn is_pressed(&self, key: Key) -> bool {
        self.pressed_this_frame.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_lasts_one_frame() {
        let mut kb = KeyboardState::new();
        kb.key_down(Key::Confirm);
        assert!(kb.is_pressed(Key::Confirm));
        assert!(kb.is_down(Key::Confirm));

        kb.end_frame();
        assert!(!kb.is_pressed(Key::Confirm));
        assert!(kb.is_down(Key::Confirm));

        kb.key_up(Key::Confirm);
        assert!(!kb.is_down(Key::Confirm));
    }

    #[test]
    fn test_auto_repeat_is_not_a_press() {
        let mut kb = KeyboardState::new();
        kb.key_down(Key::CycleColor);
        kb.end_frame();
        kb.key_down(Key::CycleColor);
        assert!(!kb.is_pressed(Key::CycleColor));
    }

    #[test]
    fn test_dom_key_mapping() {
        assert_eq!(Key::from_dom_key("Enter"), Some(Key::Confirm));
        assert_eq!(Key::from_dom_key(" "), Some(Key::CycleColor));
        assert_eq!(Key::from_dom_key("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_dom_key("Escape"), None);
    }
}
