use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::input::{InputEvent, InputPhase, Key, MouseButton, PointerTarget};
use crate::runtime::Runtime;
use crate::surface::RenderSurface;

/// Shell configuration.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub title: String,
    pub window_size: LogicalSize<f64>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "cadence".to_string(),
            window_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

type SurfaceFactory = Box<dyn FnOnce(Arc<Window>) -> Result<Box<dyn RenderSurface>>>;

/// Entry point for the windowed host.
pub struct Shell;

impl Shell {
    /// Opens the window, builds the render surface through `factory`,
    /// installs it into `runtime`, and runs the event loop to completion.
    pub fn run(
        config: ShellConfig,
        runtime: Runtime,
        factory: impl FnOnce(Arc<Window>) -> Result<Box<dyn RenderSurface>> + 'static,
    ) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;

        let mut host = Host {
            config,
            runtime,
            factory: Some(Box::new(factory)),
            window: None,
            start: Instant::now(),
        };

        event_loop
            .run_app(&mut host)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

struct Host {
    config: ShellConfig,
    runtime: Runtime,
    factory: Option<SurfaceFactory>,
    window: Option<Arc<Window>>,
    start: Instant,
}

impl Host {
    fn sync_container_size(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let scale = window.scale_factor();
        let logical: LogicalSize<f64> = window.inner_size().to_logical(scale);
        self.runtime
            .set_container_size(logical.width as f32, logical.height as f32);
    }

    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl ApplicationHandler for Host {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.window_size);

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        if let Some(factory) = self.factory.take() {
            let surface = match factory(Arc::clone(&window)) {
                Ok(surface) => surface,
                Err(e) => {
                    log::error!("failed to create render surface: {e:#}");
                    event_loop.exit();
                    return;
                }
            };
            if let Err(e) = self.runtime.install_surface(surface) {
                log::error!("failed to install render surface: {e}");
                event_loop.exit();
                return;
            }
        }

        window.request_redraw();
        self.window = Some(window);
        self.sync_container_size();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: the runtime renders every animation frame.
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(window) = &self.window {
            if let Some(input) = translate_input_event(window, &event) {
                self.runtime.handle_input(input);
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Occluded(hidden) => self.runtime.set_hidden(hidden),

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.sync_container_size();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                let now_ms = self.now_ms();
                if let Err(e) = self.runtime.frame(now_ms) {
                    log::error!("frame failed: {e}");
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }
}

fn translate_input_event(window: &Window, event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            let logical = position.to_logical::<f64>(window.scale_factor());
            Some(InputEvent::PointerMoved {
                x: logical.x as f32,
                y: logical.y as f32,
                // The whole window is the displayed surface element; there
                // is no surrounding chrome in this shell.
                target: PointerTarget::Surface,
            })
        }

        WindowEvent::MouseInput { state, button, .. } => Some(InputEvent::PointerButton {
            button: map_mouse_button(*button),
            phase: map_phase(*state),
            target: PointerTarget::Surface,
        }),

        WindowEvent::KeyboardInput { event, .. } => {
            let key = map_key(event.physical_key)?;
            Some(InputEvent::Key {
                key,
                phase: map_phase(event.state),
                repeat: event.repeat,
            })
        }

        _ => None,
    }
}

fn map_phase(state: ElementState) -> InputPhase {
    match state {
        ElementState::Pressed => InputPhase::Pressed,
        ElementState::Released => InputPhase::Released,
    }
}

fn map_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

/// Maps a winit keycode into the engine key set.
///
/// Keys with no engine representation return `None` and are dropped.
fn map_key(key: PhysicalKey) -> Option<Key> {
    let PhysicalKey::Code(code) = key else {
        return None;
    };

    Some(match code {
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,

        KeyCode::Enter => Key::Enter,
        KeyCode::Space => Key::Space,
        KeyCode::Escape => Key::Escape,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,

        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
        KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
        KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,

        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        KeyCode::Digit0 => Key::Digit0,
        KeyCode::Digit1 => Key::Digit1,
        KeyCode::Digit2 => Key::Digit2,
        KeyCode::Digit3 => Key::Digit3,
        KeyCode::Digit4 => Key::Digit4,
        KeyCode::Digit5 => Key::Digit5,
        KeyCode::Digit6 => Key::Digit6,
        KeyCode::Digit7 => Key::Digit7,
        KeyCode::Digit8 => Key::Digit8,
        KeyCode::Digit9 => Key::Digit9,

        _ => return None,
    })
}
