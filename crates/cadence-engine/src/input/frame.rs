use std::collections::HashSet;

use super::types::{Key, MouseButton};

/// Per-step input transitions.
///
/// [`InputState`](super::InputState) holds level state (what is down right
/// now); this type holds the edges — what changed since the last flush. A
/// key appears in `keys_pressed` only for the single fixed step following
/// its down transition, and likewise for releases.
#[derive(Debug, Default)]
pub struct InputFrame {
    keys_pressed: HashSet<Key>,
    keys_released: HashSet<Key>,
    buttons_pressed: HashSet<MouseButton>,
    buttons_released: HashSet<MouseButton>,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all four transition sets.
    ///
    /// The loop driver calls this exactly once per fixed simulation step —
    /// not once per display frame, which may cover zero or several steps.
    pub fn flush(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn key_released(&self, key: Key) -> bool {
        self.keys_released.contains(&key)
    }

    pub fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    pub fn mouse_released(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }

    /// Keys newly pressed this step.
    pub fn pressed_keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.keys_pressed.iter().copied()
    }

    pub(super) fn record_key(&mut self, key: Key, pressed: bool) {
        if pressed {
            self.keys_pressed.insert(key);
        } else {
            self.keys_released.insert(key);
        }
    }

    pub(super) fn record_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.buttons_pressed.insert(button);
        } else {
            self.buttons_released.insert(button);
        }
    }
}
