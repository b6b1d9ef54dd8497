//! Inverse mapping for CSS-style `object-fit` display scaling.
//!
//! A surface with a fixed intrinsic size may be displayed scaled inside a
//! container of a different aspect ratio. `contain` letterboxes (content
//! fully visible, bars on one axis), `cover` fills (content cropped on one
//! axis). Pointer coordinates arrive in container space and must be mapped
//! back into surface space through the fitted content rectangle.

use super::Vec2;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FitMode {
    /// Largest centered rectangle of the content's aspect ratio that fits
    /// inside the container.
    Contain,
    /// Smallest centered rectangle of the content's aspect ratio that
    /// covers the container.
    Cover,
}

/// The fitted content rectangle, in container coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FitRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// Scale from content space to container space
    /// (`fitted width / intrinsic width`).
    pub ratio: f32,
}

impl FitRect {
    /// Maps a point from container space into content space.
    #[inline]
    pub fn to_content(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            (point.x - self.left) / self.ratio,
            (point.y - self.top) / self.ratio,
        )
    }
}

/// Computes the fitted content rectangle for `content_size` displayed
/// inside `container_size` under `mode`.
///
/// Both sizes must be positive and finite for the result to be meaningful.
pub fn object_fit(mode: FitMode, container_size: Vec2, content_size: Vec2) -> FitRect {
    let content_ratio = content_size.x / content_size.y;
    let container_ratio = container_size.x / container_size.y;

    let width_constrained = match mode {
        FitMode::Contain => content_ratio > container_ratio,
        FitMode::Cover => content_ratio < container_ratio,
    };

    let (target_width, target_height) = if width_constrained {
        (container_size.x, container_size.x / content_ratio)
    } else {
        (container_size.y * content_ratio, container_size.y)
    };

    FitRect {
        left: (container_size.x - target_width) / 2.0,
        top: (container_size.y - target_height) / 2.0,
        width: target_width,
        height: target_height,
        ratio: target_width / content_size.x,
    }
}
