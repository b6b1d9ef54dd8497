use std::collections::VecDeque;

use log::debug;

use crate::core::LoadCtx;
use crate::event::EventBus;

use super::loader::{LoadPoll, SceneLoader};
use super::Scene;

/// Stack-assigned identity of a loaded scene.
///
/// Events carry ids rather than scene references because the stack owns
/// its scenes outright.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SceneId(u64);

struct Entry {
    id: SceneId,
    scene: Box<dyn Scene>,
}

/// Ordered stack of scenes with cooperative async-load transitions.
///
/// The top entry is the active scene; it alone is updated and rendered.
/// Pushes go through a [`SceneLoader`] polled once per display frame, so a
/// slow load never blocks the loop. For each completed push the stack
/// publishes `on_scene_loaded` then `on_active_scene_changed`, in that
/// order, strictly after `on_scene_loading` fired at the push itself.
pub struct SceneStack {
    entries: Vec<Entry>,
    pending: VecDeque<Box<dyn SceneLoader>>,
    next_id: u64,

    /// A push or replace has been requested; carries no payload because
    /// the scene does not exist yet.
    pub on_scene_loading: EventBus<()>,
    /// A pushed scene finished loading.
    pub on_scene_loaded: EventBus<SceneId>,
    /// The top of the stack changed; `None` means the stack is empty.
    pub on_active_scene_changed: EventBus<Option<SceneId>>,
}

impl SceneStack {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            pending: VecDeque::new(),
            next_id: 0,
            on_scene_loading: EventBus::new(),
            on_scene_loaded: EventBus::new(),
            on_active_scene_changed: EventBus::new(),
        }
    }

    /// The active scene, if any. `None` iff the stack is empty.
    pub fn active(&self) -> Option<&dyn Scene> {
        self.entries.last().map(|entry| entry.scene.as_ref())
    }

    pub fn active_mut(&mut self) -> Option<&mut (dyn Scene + 'static)> {
        self.entries.last_mut().map(|entry| entry.scene.as_mut())
    }

    pub fn active_id(&self) -> Option<SceneId> {
        self.entries.last().map(|entry| entry.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a load is currently in flight.
    pub fn loading(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Starts a push. The scene becomes active once its loader is ready.
    ///
    /// Concurrent pushes queue in FIFO order.
    pub fn push(&mut self, loader: impl SceneLoader + 'static) {
        self.push_boxed(Box::new(loader));
    }

    pub(crate) fn push_boxed(&mut self, loader: Box<dyn SceneLoader>) {
        debug!("scene push requested ({} in flight)", self.pending.len());
        self.on_scene_loading.publish(&());
        self.pending.push_back(loader);
    }

    /// Unloads and removes every stacked scene, then pushes.
    ///
    /// The clear itself publishes no event; the incoming scene's
    /// `on_active_scene_changed` fires once it finishes loading.
    pub fn replace(&mut self, loader: impl SceneLoader + 'static) {
        self.replace_boxed(Box::new(loader));
    }

    pub(crate) fn replace_boxed(&mut self, loader: Box<dyn SceneLoader>) {
        debug!("scene replace: unloading {} stacked scene(s)", self.entries.len());
        for mut entry in self.entries.drain(..) {
            entry.scene.unload();
        }
        self.push_boxed(loader);
    }

    /// Removes and unloads the active scene. No-op on an empty stack.
    pub fn pop(&mut self) {
        let Some(mut entry) = self.entries.pop() else {
            return;
        };
        debug!("scene pop: unloading active scene");
        entry.scene.unload();
        self.on_active_scene_changed.publish(&self.active_id());
    }

    /// Removes and unloads every stacked scene, then publishes a single
    /// active-scene change to `None`.
    pub fn pop_all(&mut self) {
        debug!("scene pop_all: unloading {} scene(s)", self.entries.len());
        for mut entry in self.entries.drain(..) {
            entry.scene.unload();
        }
        self.on_active_scene_changed.publish(&None);
    }

    /// Advances pending loads. Called once per display frame.
    ///
    /// Drains every loader that is ready right now; stops at the first
    /// pending one so queued pushes activate in request order.
    pub fn drive(&mut self, ctx: &mut LoadCtx<'_>) {
        while let Some(front) = self.pending.front_mut() {
            match front.poll(ctx) {
                LoadPoll::Pending => break,
                LoadPoll::Ready(scene) => {
                    self.pending.pop_front();

                    let id = SceneId(self.next_id);
                    self.next_id += 1;
                    debug!("scene loaded, activating");

                    // Loaded fires before the stack mutates, matching the
                    // push ordering contract.
                    self.on_scene_loaded.publish(&id);
                    self.on_active_scene_changed.publish(&Some(id));
                    self.entries.push(Entry { id, scene });
                }
            }
        }
    }
}

impl Default for SceneStack {
    fn default() -> Self {
        Self::new()
    }
}
