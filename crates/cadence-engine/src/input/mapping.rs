use super::types::Key;

/// Physical keys bound to the four logical movement directions.
///
/// Any held key in a direction's set activates that direction. Within an
/// axis the negative direction is checked first, so holding an opposing
/// pair resolves to left (or up) rather than flickering.
#[derive(Debug, Clone)]
pub struct MovementBindings {
    pub left: Vec<Key>,
    pub right: Vec<Key>,
    pub up: Vec<Key>,
    pub down: Vec<Key>,
}

impl Default for MovementBindings {
    /// Arrows plus WASD.
    fn default() -> Self {
        Self {
            left: vec![Key::ArrowLeft, Key::A],
            right: vec![Key::ArrowRight, Key::D],
            up: vec![Key::ArrowUp, Key::W],
            down: vec![Key::ArrowDown, Key::S],
        }
    }
}
