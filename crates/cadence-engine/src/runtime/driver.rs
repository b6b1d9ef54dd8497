use log::{debug, info};

use crate::coords::{Vec2, Viewport};
use crate::core::{LoadCtx, UpdateCtx};
use crate::input::{Input, InputEvent, InputFrame, InputState, MovementBindings};
use crate::random::PseudoRandom;
use crate::scene::{SceneCmd, SceneQueue, SceneStack};
use crate::stage::Stage;
use crate::surface::{RenderSurface, SurfaceError, SurfaceSlot};
use crate::time::{FrameClock, FrameTime};

/// Runtime construction parameters.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Seed for the shared random source; synthesized when `None`.
    pub seed: Option<String>,
    /// Fixed simulation rate.
    pub steps_per_second: f64,
    /// Pause the simulation while the host window is hidden.
    pub pause_when_hidden: bool,
    /// Movement key bindings.
    pub bindings: MovementBindings,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            steps_per_second: FrameClock::DEFAULT_STEPS_PER_SECOND,
            pause_when_hidden: true,
            bindings: MovementBindings::default(),
        }
    }
}

/// Converts variable-rate host callbacks into deterministic fixed steps.
///
/// Per callback: pending scene loads are advanced, whole fixed steps are
/// drained (update the active scene, apply queued scene transitions, flush
/// the input frame), and exactly one render is issued — even when zero
/// steps ran, so the surface always reflects the current stage.
pub struct Runtime {
    clock: FrameClock,
    scenes: SceneStack,
    queue: SceneQueue,
    input: InputState,
    input_frame: InputFrame,
    random: PseudoRandom,
    surface: SurfaceSlot,
    viewport: Viewport,
    empty_stage: Stage,
    pause_when_hidden: bool,
    step_index: u64,
}

impl Runtime {
    pub fn new(config: RuntimeConfig) -> Self {
        let random = match &config.seed {
            Some(seed) => PseudoRandom::from_seed(seed),
            None => PseudoRandom::new(),
        };
        info!(
            "runtime created: {} steps/s, seed \"{}\"",
            config.steps_per_second,
            random.seed()
        );

        Self {
            clock: FrameClock::new(config.steps_per_second),
            scenes: SceneStack::new(),
            queue: SceneQueue::new(),
            input: InputState::new(config.bindings),
            input_frame: InputFrame::new(),
            random,
            surface: SurfaceSlot::new(),
            viewport: Viewport::default(),
            empty_stage: Stage::new(),
            pause_when_hidden: config.pause_when_hidden,
            step_index: 0,
        }
    }

    /// Installs the render surface. Must happen exactly once, before the
    /// first frame.
    pub fn install_surface(&mut self, surface: Box<dyn RenderSurface>) -> Result<(), SurfaceError> {
        let viewport = Viewport::new(surface.width(), surface.height());
        self.surface.install(surface)?;
        self.viewport = viewport;
        self.input
            .set_intrinsic_size(Vec2::new(viewport.width, viewport.height));
        info!("render surface installed ({}x{})", viewport.width, viewport.height);
        Ok(())
    }

    /// Reports the displayed container size, used for pointer mapping.
    pub fn set_container_size(&mut self, width: f32, height: f32) {
        self.input.set_container_size(Vec2::new(width, height));
    }

    /// Feeds one raw input event.
    pub fn handle_input(&mut self, event: InputEvent) {
        self.input.apply_event(&mut self.input_frame, event);
    }

    /// Host visibility change; pauses the simulation when configured to.
    pub fn set_hidden(&mut self, hidden: bool) {
        if self.pause_when_hidden {
            debug!("visibility change: hidden = {hidden}");
            self.clock.set_paused(hidden);
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.clock.set_paused(paused);
    }

    pub fn paused(&self) -> bool {
        self.clock.paused()
    }

    pub fn scenes(&self) -> &SceneStack {
        &self.scenes
    }

    pub fn scenes_mut(&mut self) -> &mut SceneStack {
        &mut self.scenes
    }

    /// Intrinsic surface size, valid once the surface is installed.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Drives one host callback with a monotonic millisecond timestamp.
    pub fn frame(&mut self, now_ms: f64) -> Result<(), SurfaceError> {
        let mut load_ctx = LoadCtx {
            random: &mut self.random,
            viewport: self.viewport,
        };
        self.scenes.drive(&mut load_ctx);

        // Transitions queued outside an update (startup, host code).
        self.apply_scene_commands();

        let advance = self.clock.advance(now_ms);
        for _ in 0..advance.steps {
            self.step(advance.dt);
        }

        let stage = match self.scenes.active() {
            Some(scene) => scene.stage(),
            None => &self.empty_stage,
        };
        self.surface.get_mut()?.render(stage);
        Ok(())
    }

    fn step(&mut self, dt: f32) {
        self.step_index += 1;

        if let Some(scene) = self.scenes.active_mut() {
            let mut ctx = UpdateCtx {
                input: Input {
                    state: &self.input,
                    frame: &self.input_frame,
                },
                random: &mut self.random,
                scenes: &mut self.queue,
                time: FrameTime {
                    dt,
                    step_index: self.step_index,
                },
                viewport: self.viewport,
            };
            scene.update(&mut ctx);
        }

        self.apply_scene_commands();
        self.input_frame.flush();
    }

    fn apply_scene_commands(&mut self) {
        for cmd in self.queue.drain() {
            match cmd {
                SceneCmd::Push(loader) => self.scenes.push_boxed(loader),
                SceneCmd::Replace(loader) => self.scenes.replace_boxed(loader),
                SceneCmd::Pop => self.scenes.pop(),
                SceneCmd::PopAll => self.scenes.pop_all(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::input::{InputPhase, Key};
    use crate::scene::{ImmediateLoader, Scene};
    use crate::core::UpdateCtx;

    use super::*;

    struct CountingSurface {
        renders: Rc<Cell<u32>>,
    }

    impl RenderSurface for CountingSurface {
        fn width(&self) -> f32 {
            1280.0
        }
        fn height(&self) -> f32 {
            720.0
        }
        fn render(&mut self, _stage: &Stage) {
            self.renders.set(self.renders.get() + 1);
        }
    }

    struct ProbeScene {
        stage: Stage,
        updates: Rc<Cell<u32>>,
        space_edges: Rc<RefCell<Vec<bool>>>,
    }

    impl Scene for ProbeScene {
        fn update(&mut self, ctx: &mut UpdateCtx<'_>) {
            self.updates.set(self.updates.get() + 1);
            self.space_edges
                .borrow_mut()
                .push(ctx.input.key_pressed(Key::Space));
        }

        fn stage(&self) -> &Stage {
            &self.stage
        }
    }

    struct Fixture {
        runtime: Runtime,
        renders: Rc<Cell<u32>>,
        updates: Rc<Cell<u32>>,
        space_edges: Rc<RefCell<Vec<bool>>>,
    }

    /// 100 steps/s runtime with an installed counting surface and an
    /// active probe scene.
    fn fixture() -> Fixture {
        let mut runtime = Runtime::new(RuntimeConfig {
            seed: Some("test".into()),
            steps_per_second: 100.0,
            ..RuntimeConfig::default()
        });

        let renders = Rc::new(Cell::new(0));
        runtime
            .install_surface(Box::new(CountingSurface {
                renders: Rc::clone(&renders),
            }))
            .unwrap();

        let updates = Rc::new(Cell::new(0));
        let space_edges = Rc::new(RefCell::new(Vec::new()));
        {
            let updates = Rc::clone(&updates);
            let space_edges = Rc::clone(&space_edges);
            runtime.scenes_mut().push(ImmediateLoader::new(move |_| {
                Box::new(ProbeScene {
                    stage: Stage::new(),
                    updates,
                    space_edges,
                })
            }));
        }

        Fixture {
            runtime,
            renders,
            updates,
            space_edges,
        }
    }

    #[test]
    fn frame_before_surface_install_fails_fast() {
        let mut runtime = Runtime::new(RuntimeConfig::default());
        assert_eq!(runtime.frame(0.0).unwrap_err(), SurfaceError::Uninstalled);
    }

    #[test]
    fn install_surface_twice_fails() {
        let mut runtime = Runtime::new(RuntimeConfig::default());
        let renders = Rc::new(Cell::new(0));
        runtime
            .install_surface(Box::new(CountingSurface { renders: Rc::clone(&renders) }))
            .unwrap();
        assert_eq!(
            runtime
                .install_surface(Box::new(CountingSurface { renders }))
                .unwrap_err(),
            SurfaceError::AlreadyInstalled
        );
    }

    #[test]
    fn renders_once_per_callback_even_with_zero_steps() {
        let mut f = fixture();
        f.runtime.frame(0.0).unwrap();
        f.runtime.frame(1.0).unwrap();
        f.runtime.frame(2.0).unwrap();

        assert_eq!(f.renders.get(), 3);
        assert_eq!(f.updates.get(), 0, "1ms callbacks cannot fill a 10ms step");
    }

    #[test]
    fn steps_match_elapsed_time() {
        let mut f = fixture();
        f.runtime.frame(0.0).unwrap();
        f.runtime.frame(30.0).unwrap();

        assert_eq!(f.updates.get(), 3);
        assert_eq!(f.renders.get(), 2);
    }

    #[test]
    fn press_edge_is_visible_for_exactly_one_step() {
        let mut f = fixture();
        f.runtime.frame(0.0).unwrap();

        f.runtime.handle_input(InputEvent::Key {
            key: Key::Space,
            phase: InputPhase::Pressed,
            repeat: false,
        });
        f.runtime.frame(20.0).unwrap();

        // Two steps ran; only the first saw the press edge.
        assert_eq!(*f.space_edges.borrow(), vec![true, false]);
    }

    #[test]
    fn hidden_runtime_pauses_and_resumes_without_catch_up() {
        let mut f = fixture();
        f.runtime.frame(0.0).unwrap();
        f.runtime.set_hidden(true);
        f.runtime.frame(10_000.0).unwrap();
        assert_eq!(f.updates.get(), 0);
        assert_eq!(f.renders.get(), 2, "render continues while paused");

        f.runtime.set_hidden(false);
        f.runtime.frame(10_020.0).unwrap();
        assert_eq!(f.updates.get(), 0, "resume frame re-baselines the clock");

        f.runtime.frame(10_030.0).unwrap();
        assert_eq!(f.updates.get(), 1);
    }

    #[test]
    fn scene_transitions_queued_in_update_apply_at_the_step_boundary() {
        struct PoppingScene {
            stage: Stage,
        }

        impl Scene for PoppingScene {
            fn update(&mut self, ctx: &mut UpdateCtx<'_>) {
                ctx.scenes.pop();
            }

            fn stage(&self) -> &Stage {
                &self.stage
            }
        }

        let mut runtime = Runtime::new(RuntimeConfig {
            seed: Some("pop".into()),
            steps_per_second: 100.0,
            ..RuntimeConfig::default()
        });
        runtime
            .install_surface(Box::new(CountingSurface { renders: Rc::new(Cell::new(0)) }))
            .unwrap();
        runtime
            .scenes_mut()
            .push(ImmediateLoader::new(|_| Box::new(PoppingScene { stage: Stage::new() })));

        runtime.frame(0.0).unwrap();
        assert_eq!(runtime.scenes().len(), 1);

        runtime.frame(10.0).unwrap();
        assert!(runtime.scenes().is_empty(), "pop requested in update must have applied");
    }
}
