use crate::coords::Viewport;
use crate::input::Input;
use crate::random::PseudoRandom;
use crate::scene::SceneQueue;
use crate::time::FrameTime;

/// Per-step context passed to `Scene::update`.
///
/// Borrows live for the duration of the update call. Scene transitions
/// requested through `scenes` are buffered and applied at the step
/// boundary, after the update returns.
pub struct UpdateCtx<'a> {
    /// Input queries (level + edge state).
    pub input: Input<'a>,

    /// Shared deterministic random source.
    pub random: &'a mut PseudoRandom,

    /// Buffered scene-stack transitions.
    pub scenes: &'a mut SceneQueue,

    /// Fixed-step timing for this update.
    pub time: FrameTime,

    /// Intrinsic surface size scenes lay content out against.
    pub viewport: Viewport,
}

/// Context passed to `SceneLoader::poll` while a load is in flight.
pub struct LoadCtx<'a> {
    /// Shared deterministic random source.
    pub random: &'a mut PseudoRandom,

    /// Intrinsic surface size.
    pub viewport: Viewport,
}
