//! Input subsystem.
//!
//! Platform-agnostic: the shell translates window-system events into
//! [`InputEvent`]s. Level state lives in [`InputState`]; per-step edges
//! live in [`InputFrame`] and are flushed once per fixed simulation step.
//! Scenes query both through the borrowed [`Input`] facade.

mod frame;
mod mapping;
mod state;
mod types;

pub use frame::InputFrame;
pub use mapping::MovementBindings;
pub use state::InputState;
pub use types::{InputEvent, InputPhase, Key, MouseButton, PointerTarget};

use crate::coords::Vec2;

/// Read-only view over the input pair, handed to scenes each step.
#[derive(Copy, Clone)]
pub struct Input<'a> {
    pub state: &'a InputState,
    pub frame: &'a InputFrame,
}

impl Input<'_> {
    /// Is the given key currently down.
    pub fn key_down(&self, key: Key) -> bool {
        self.state.key_down(key)
    }

    /// Is the given key currently up.
    pub fn key_up(&self, key: Key) -> bool {
        self.state.key_up(key)
    }

    /// Was the given key newly pressed this step.
    pub fn key_pressed(&self, key: Key) -> bool {
        self.frame.key_pressed(key)
    }

    /// Was the given key newly released this step.
    pub fn key_released(&self, key: Key) -> bool {
        self.frame.key_released(key)
    }

    /// Is the given mouse button currently down.
    pub fn mouse_down(&self, button: MouseButton) -> bool {
        self.state.mouse_down(button)
    }

    /// Is the given mouse button currently up.
    pub fn mouse_up(&self, button: MouseButton) -> bool {
        self.state.mouse_up(button)
    }

    /// Was the given mouse button newly pressed this step.
    pub fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.frame.mouse_pressed(button)
    }

    /// Was the given mouse button newly released this step.
    pub fn mouse_released(&self, button: MouseButton) -> bool {
        self.frame.mouse_released(button)
    }

    /// Pointer position in intrinsic surface coordinates.
    pub fn mouse_position(&self) -> Vec2 {
        self.state.mouse_position()
    }

    /// Logical movement direction, each axis in `{-1, 0, 1}`.
    pub fn movement(&self) -> Vec2 {
        self.state.movement()
    }

    /// Keys newly pressed this step.
    pub fn pressed_keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.frame.pressed_keys()
    }
}
