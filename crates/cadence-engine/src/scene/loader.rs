use crate::core::LoadCtx;

use super::Scene;

/// Outcome of polling an in-flight scene load.
pub enum LoadPoll {
    /// Still loading; poll again next frame.
    Pending,
    /// The scene is ready to be activated.
    Ready(Box<dyn Scene>),
}

/// Asynchronous scene factory.
///
/// A push or replace hands the stack a loader, which is polled once per
/// display frame until it yields the scene. The frame loop keeps running —
/// and keeps rendering the previous active scene — while a load is
/// pending. There is no cancellation: a loader that never becomes ready
/// stalls that one transition, nothing else.
pub trait SceneLoader {
    fn poll(&mut self, ctx: &mut LoadCtx<'_>) -> LoadPoll;
}

/// Loader for scenes that can be built without waiting.
///
/// Wraps a build closure and yields `Ready` on the first poll.
pub struct ImmediateLoader {
    build: Option<Box<dyn FnOnce(&mut LoadCtx<'_>) -> Box<dyn Scene>>>,
}

impl ImmediateLoader {
    pub fn new(build: impl FnOnce(&mut LoadCtx<'_>) -> Box<dyn Scene> + 'static) -> Self {
        Self {
            build: Some(Box::new(build)),
        }
    }
}

impl SceneLoader for ImmediateLoader {
    fn poll(&mut self, ctx: &mut LoadCtx<'_>) -> LoadPoll {
        match self.build.take() {
            Some(build) => LoadPoll::Ready(build(ctx)),
            None => {
                log::warn!("immediate loader polled again after yielding its scene");
                LoadPoll::Pending
            }
        }
    }
}
