//! Cadence engine crate.
//!
//! A small fixed-timestep application runtime: scene stack with cooperative
//! async loading, edge-triggered input, a seedable deterministic random
//! source, and the winit shell that drives it all. Rendering stays behind
//! [`surface::RenderSurface`] so the engine carries no GPU dependency.

pub mod coords;
pub mod core;
pub mod event;
pub mod input;
pub mod random;
pub mod runtime;
pub mod scene;
pub mod shell;
pub mod stage;
pub mod surface;
pub mod time;

pub mod logging;
