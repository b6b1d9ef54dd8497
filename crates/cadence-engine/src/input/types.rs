/// Keyboard key identifier.
///
/// Deliberately minimal: the shell maps platform keycodes into these
/// variants and ignores keys with no mapping. Enum identity replaces any
/// notion of key-name casing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Enter,
    Space,
    Escape,
    Tab,
    Backspace,

    Shift,
    Control,
    Alt,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u16),
}

impl MouseButton {
    /// Maps a web-style numeric button index (0 = left, 1 = middle,
    /// 2 = right).
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => MouseButton::Left,
            1 => MouseButton::Middle,
            2 => MouseButton::Right,
            other => MouseButton::Other(other),
        }
    }
}

/// Direction of a key or button transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InputPhase {
    Pressed,
    Released,
}

/// Origin of a pointer event.
///
/// Hosts with UI chrome around the render surface tag events accordingly;
/// the input state drops move/down events from outside the surface but
/// accepts releases from anywhere, so a drag that leaves the surface still
/// ends cleanly.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointerTarget {
    Surface,
    Outside,
}

/// Platform-agnostic input events consumed by the runtime.
///
/// The shell translates window-system events into these; pointer
/// coordinates are in container space (the displayed surface element).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        phase: InputPhase,
        /// True when the event is OS auto-repeat.
        repeat: bool,
    },
    PointerMoved {
        x: f32,
        y: f32,
        target: PointerTarget,
    },
    PointerButton {
        button: MouseButton,
        phase: InputPhase,
        target: PointerTarget,
    },
}
