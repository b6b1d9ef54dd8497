//! Scenes and the scene stack.
//!
//! A scene is a self-contained unit of interactive content: an update hook
//! plus a visual root ([`Stage`]). Exactly one scene — the top of the
//! [`SceneStack`] — is updated and rendered at a time; lower entries are
//! suspended until everything above them is popped.

mod loader;
mod queue;
mod stack;

pub use loader::{ImmediateLoader, LoadPoll, SceneLoader};
pub use queue::SceneQueue;
pub use stack::{SceneId, SceneStack};

pub(crate) use queue::SceneCmd;

use crate::core::UpdateCtx;
use crate::stage::Stage;

/// Contract implemented by content scenes.
///
/// The stack owns its scenes: a popped scene has `unload` fired and is then
/// dropped; nothing outside the stack holds a reference past that point.
pub trait Scene {
    /// Advances the scene by one fixed simulation step.
    fn update(&mut self, ctx: &mut UpdateCtx<'_>);

    /// The scene's visual root, rendered once per display frame while the
    /// scene is on top of the stack.
    fn stage(&self) -> &Stage;

    /// Teardown hook, fired when the scene is removed from the stack.
    fn unload(&mut self) {}
}
