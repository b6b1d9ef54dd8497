use super::loader::SceneLoader;

pub(crate) enum SceneCmd {
    Push(Box<dyn SceneLoader>),
    Replace(Box<dyn SceneLoader>),
    Pop,
    PopAll,
}

/// Buffered scene-stack transitions.
///
/// Scenes request transitions from inside `update` through this queue; the
/// loop driver applies them at the step boundary, after the update
/// returns. Commands apply in request order.
#[derive(Default)]
pub struct SceneQueue {
    cmds: Vec<SceneCmd>,
}

impl SceneQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a push of the scene produced by `loader`.
    pub fn push(&mut self, loader: impl SceneLoader + 'static) {
        self.cmds.push(SceneCmd::Push(Box::new(loader)));
    }

    /// Queues a replace: every stacked scene is unloaded, then `loader`'s
    /// scene is pushed.
    pub fn replace(&mut self, loader: impl SceneLoader + 'static) {
        self.cmds.push(SceneCmd::Replace(Box::new(loader)));
    }

    /// Queues a pop of the active scene.
    pub fn pop(&mut self) {
        self.cmds.push(SceneCmd::Pop);
    }

    /// Queues removal of every stacked scene.
    pub fn pop_all(&mut self) {
        self.cmds.push(SceneCmd::PopAll);
    }

    pub(crate) fn drain(&mut self) -> Vec<SceneCmd> {
        std::mem::take(&mut self.cmds)
    }
}
