use std::collections::HashSet;

use crate::coords::fit::{FitMode, object_fit};
use crate::coords::Vec2;

use super::frame::InputFrame;
use super::mapping::MovementBindings;
use super::types::{InputEvent, InputPhase, Key, MouseButton, PointerTarget};

/// Current input level state.
///
/// Raw events update this immediately; the matching edge is recorded into
/// an [`InputFrame`] only when the level state actually transitions, which
/// makes the recording idempotent against OS auto-repeat and duplicated
/// events.
#[derive(Debug)]
pub struct InputState {
    keys_down: HashSet<Key>,
    buttons_down: HashSet<MouseButton>,
    mouse_position: Vec2,
    bindings: MovementBindings,

    /// Displayed size of the surface element, in container pixels.
    container_size: Vec2,
    /// Intrinsic surface size, in surface pixels.
    intrinsic_size: Vec2,
}

impl InputState {
    pub fn new(bindings: MovementBindings) -> Self {
        Self {
            keys_down: HashSet::new(),
            buttons_down: HashSet::new(),
            mouse_position: Vec2::ZERO,
            bindings,
            container_size: Vec2::ZERO,
            intrinsic_size: Vec2::ZERO,
        }
    }

    /// Updates the displayed container size used for pointer mapping.
    pub fn set_container_size(&mut self, size: Vec2) {
        self.container_size = size;
    }

    /// Updates the intrinsic surface size used for pointer mapping.
    pub fn set_intrinsic_size(&mut self, size: Vec2) {
        self.intrinsic_size = size;
    }

    /// Applies a raw input event, writing any edge into `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, event: InputEvent) {
        match event {
            InputEvent::Key { key, phase, .. } => match phase {
                InputPhase::Pressed => {
                    if self.keys_down.insert(key) {
                        frame.record_key(key, true);
                    }
                }
                InputPhase::Released => {
                    if self.keys_down.remove(&key) {
                        frame.record_key(key, false);
                    }
                }
            },

            InputEvent::PointerMoved { x, y, target } => {
                if target != PointerTarget::Surface {
                    return;
                }
                self.mouse_position = self.map_pointer(Vec2::new(x, y));
            }

            InputEvent::PointerButton { button, phase, target } => match phase {
                InputPhase::Pressed => {
                    if target != PointerTarget::Surface {
                        return;
                    }
                    if self.buttons_down.insert(button) {
                        frame.record_button(button, true);
                    }
                }
                // Releases are accepted from any target so a press that
                // drags off the surface still ends.
                InputPhase::Released => {
                    if self.buttons_down.remove(&button) {
                        frame.record_button(button, false);
                    }
                }
            },
        }
    }

    /// Is the given key currently down.
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Is the given key currently up.
    pub fn key_up(&self, key: Key) -> bool {
        !self.key_down(key)
    }

    /// Is the given mouse button currently down.
    pub fn mouse_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Is the given mouse button currently up.
    pub fn mouse_up(&self, button: MouseButton) -> bool {
        !self.mouse_down(button)
    }

    /// Pointer position in intrinsic surface coordinates.
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Logical movement direction from the configured bindings, each axis
    /// in `{-1, 0, 1}`.
    pub fn movement(&self) -> Vec2 {
        let held = |keys: &[Key]| keys.iter().any(|key| self.key_down(*key));

        let mut direction = Vec2::ZERO;
        if held(&self.bindings.left) {
            direction.x = -1.0;
        } else if held(&self.bindings.right) {
            direction.x = 1.0;
        }
        if held(&self.bindings.up) {
            direction.y = -1.0;
        } else if held(&self.bindings.down) {
            direction.y = 1.0;
        }
        direction
    }

    /// Maps a container-space pointer position into surface space through
    /// the letterboxed content rectangle, rounded to whole pixels.
    fn map_pointer(&self, position: Vec2) -> Vec2 {
        if self.container_size.x <= 0.0
            || self.container_size.y <= 0.0
            || self.intrinsic_size.x <= 0.0
            || self.intrinsic_size.y <= 0.0
        {
            return position;
        }

        let fit = object_fit(FitMode::Contain, self.container_size, self.intrinsic_size);
        let mapped = fit.to_content(position);
        Vec2::new(mapped.x.round(), mapped.y.round())
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(MovementBindings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, phase: InputPhase) -> InputEvent {
        InputEvent::Key { key, phase, repeat: false }
    }

    fn button(button: MouseButton, phase: InputPhase, target: PointerTarget) -> InputEvent {
        InputEvent::PointerButton { button, phase, target }
    }

    // ── edge recording ────────────────────────────────────────────────────

    #[test]
    fn auto_repeat_records_a_single_press() {
        let mut state = InputState::default();
        let mut frame = InputFrame::new();

        state.apply_event(&mut frame, key(Key::Space, InputPhase::Pressed));
        state.apply_event(&mut frame, key(Key::Space, InputPhase::Pressed));
        state.apply_event(&mut frame, key(Key::Space, InputPhase::Pressed));

        assert_eq!(frame.pressed_keys().count(), 1);
        assert!(frame.key_pressed(Key::Space));
        assert!(state.key_down(Key::Space));
    }

    #[test]
    fn press_and_release_within_one_step_record_both_edges() {
        let mut state = InputState::default();
        let mut frame = InputFrame::new();

        state.apply_event(&mut frame, key(Key::Z, InputPhase::Pressed));
        state.apply_event(&mut frame, key(Key::Z, InputPhase::Released));

        assert!(frame.key_pressed(Key::Z));
        assert!(frame.key_released(Key::Z));
        assert!(state.key_up(Key::Z));
    }

    #[test]
    fn release_without_a_press_records_nothing() {
        let mut state = InputState::default();
        let mut frame = InputFrame::new();

        state.apply_event(&mut frame, key(Key::Q, InputPhase::Released));
        assert!(!frame.key_released(Key::Q));
    }

    #[test]
    fn flush_clears_every_transition_set() {
        let mut state = InputState::default();
        let mut frame = InputFrame::new();

        state.apply_event(&mut frame, key(Key::A, InputPhase::Pressed));
        state.apply_event(&mut frame, key(Key::A, InputPhase::Released));
        state.apply_event(
            &mut frame,
            button(MouseButton::Left, InputPhase::Pressed, PointerTarget::Surface),
        );
        state.apply_event(
            &mut frame,
            button(MouseButton::Left, InputPhase::Released, PointerTarget::Surface),
        );

        frame.flush();
        assert!(!frame.key_pressed(Key::A));
        assert!(!frame.key_released(Key::A));
        assert!(!frame.mouse_pressed(MouseButton::Left));
        assert!(!frame.mouse_released(MouseButton::Left));
    }

    // ── pointer target filtering ──────────────────────────────────────────

    #[test]
    fn presses_from_outside_the_surface_are_dropped() {
        let mut state = InputState::default();
        let mut frame = InputFrame::new();

        state.apply_event(
            &mut frame,
            button(MouseButton::Left, InputPhase::Pressed, PointerTarget::Outside),
        );
        assert!(state.mouse_up(MouseButton::Left));
        assert!(!frame.mouse_pressed(MouseButton::Left));
    }

    #[test]
    fn release_is_accepted_from_outside_the_surface() {
        let mut state = InputState::default();
        let mut frame = InputFrame::new();

        state.apply_event(
            &mut frame,
            button(MouseButton::Left, InputPhase::Pressed, PointerTarget::Surface),
        );
        frame.flush();
        state.apply_event(
            &mut frame,
            button(MouseButton::Left, InputPhase::Released, PointerTarget::Outside),
        );

        assert!(state.mouse_up(MouseButton::Left));
        assert!(frame.mouse_released(MouseButton::Left));
    }

    #[test]
    fn moves_from_outside_the_surface_are_dropped() {
        let mut state = InputState::default();
        let mut frame = InputFrame::new();
        state.set_container_size(Vec2::new(1280.0, 720.0));
        state.set_intrinsic_size(Vec2::new(1280.0, 720.0));

        state.apply_event(
            &mut frame,
            InputEvent::PointerMoved { x: 100.0, y: 100.0, target: PointerTarget::Surface },
        );
        state.apply_event(
            &mut frame,
            InputEvent::PointerMoved { x: 500.0, y: 500.0, target: PointerTarget::Outside },
        );

        assert_eq!(state.mouse_position(), Vec2::new(100.0, 100.0));
    }

    // ── pointer mapping ───────────────────────────────────────────────────

    #[test]
    fn letterboxed_pointer_maps_into_surface_space() {
        let mut state = InputState::default();
        let mut frame = InputFrame::new();
        state.set_container_size(Vec2::new(640.0, 480.0));
        state.set_intrinsic_size(Vec2::new(1280.0, 720.0));

        state.apply_event(
            &mut frame,
            InputEvent::PointerMoved { x: 320.0, y: 240.0, target: PointerTarget::Surface },
        );
        assert_eq!(state.mouse_position(), Vec2::new(640.0, 360.0));
    }

    #[test]
    fn unmapped_metrics_pass_coordinates_through() {
        let mut state = InputState::default();
        let mut frame = InputFrame::new();

        state.apply_event(
            &mut frame,
            InputEvent::PointerMoved { x: 12.0, y: 34.0, target: PointerTarget::Surface },
        );
        assert_eq!(state.mouse_position(), Vec2::new(12.0, 34.0));
    }

    // ── movement ──────────────────────────────────────────────────────────

    #[test]
    fn movement_reads_arrows_and_wasd() {
        let mut state = InputState::default();
        let mut frame = InputFrame::new();

        state.apply_event(&mut frame, key(Key::ArrowRight, InputPhase::Pressed));
        state.apply_event(&mut frame, key(Key::W, InputPhase::Pressed));
        assert_eq!(state.movement(), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn movement_prefers_left_and_up_on_opposing_holds() {
        let mut state = InputState::default();
        let mut frame = InputFrame::new();

        state.apply_event(&mut frame, key(Key::ArrowLeft, InputPhase::Pressed));
        state.apply_event(&mut frame, key(Key::ArrowRight, InputPhase::Pressed));
        state.apply_event(&mut frame, key(Key::ArrowUp, InputPhase::Pressed));
        state.apply_event(&mut frame, key(Key::ArrowDown, InputPhase::Pressed));
        assert_eq!(state.movement(), Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn movement_idles_at_zero() {
        let state = InputState::default();
        assert_eq!(state.movement(), Vec2::ZERO);
    }
}
