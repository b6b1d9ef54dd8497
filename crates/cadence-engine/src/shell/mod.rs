//! Platform host.
//!
//! A single-window winit shell: translates window-system events into
//! engine [`InputEvent`](crate::input::InputEvent)s, drives
//! [`Runtime::frame`](crate::runtime::Runtime::frame) on each redraw, and
//! maps window occlusion to the runtime's visibility pause.

mod host;

pub use host::{Shell, ShellConfig};
