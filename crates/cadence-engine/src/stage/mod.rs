//! Scene visual root.
//!
//! A [`Stage`] is the renderer-agnostic draw stream a scene exposes and a
//! render surface consumes: commands are recorded in insertion order and
//! persist until the owning scene rewrites them, so visuals freeze
//! naturally while the simulation is paused.

use crate::coords::Vec2;

/// Straight-alpha RGBA color, components in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Builds an opaque color from a `0xRRGGBB` literal.
    pub fn from_rgb_u32(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xff) as f32 / 255.0,
            ((rgb >> 8) & 0xff) as f32 / 255.0,
            (rgb & 0xff) as f32 / 255.0,
        )
    }
}

/// Solid axis-aligned rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectCmd {
    pub origin: Vec2,
    pub size: Vec2,
    pub color: Color,
}

/// Renderer-agnostic draw command.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
}

/// Recorded draw stream for one scene.
#[derive(Debug, Default)]
pub struct Stage {
    cmds: Vec<DrawCmd>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands, keeping allocated capacity for reuse.
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// Records a solid rectangle.
    pub fn rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.cmds.push(DrawCmd::Rect(RectCmd { origin, size, color }));
    }

    /// Commands in insertion order.
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}
