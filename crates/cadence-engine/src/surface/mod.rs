//! Render surface seam.
//!
//! Drawing is delegated to an external collaborator behind
//! [`RenderSurface`]; the engine only asks it to render a [`Stage`] and
//! reports its intrinsic size. The surface is installed exactly once at
//! startup into a [`SurfaceSlot`], and any read before that fails fast.

use std::fmt;

use crate::stage::Stage;

/// The external rendering collaborator.
pub trait RenderSurface {
    /// Intrinsic surface width in logical pixels.
    fn width(&self) -> f32;

    /// Intrinsic surface height in logical pixels.
    fn height(&self) -> f32;

    /// Renders the stage to the visible surface.
    fn render(&mut self, stage: &Stage);
}

/// Surface lifecycle failures.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceError {
    /// The surface was read before being installed.
    Uninstalled,
    /// A second surface install was attempted.
    AlreadyInstalled,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::Uninstalled => write!(f, "render surface is not installed"),
            SurfaceError::AlreadyInstalled => write!(f, "render surface is already installed"),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// Install-once holder for the render surface.
#[derive(Default)]
pub struct SurfaceSlot {
    surface: Option<Box<dyn RenderSurface>>,
}

impl SurfaceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the surface. Fails if one is already installed.
    pub fn install(&mut self, surface: Box<dyn RenderSurface>) -> Result<(), SurfaceError> {
        if self.surface.is_some() {
            return Err(SurfaceError::AlreadyInstalled);
        }
        self.surface = Some(surface);
        Ok(())
    }

    pub fn is_installed(&self) -> bool {
        self.surface.is_some()
    }

    pub fn get(&self) -> Result<&dyn RenderSurface, SurfaceError> {
        self.surface
            .as_deref()
            .ok_or(SurfaceError::Uninstalled)
    }

    pub fn get_mut(&mut self) -> Result<&mut (dyn RenderSurface + 'static), SurfaceError> {
        self.surface
            .as_deref_mut()
            .ok_or(SurfaceError::Uninstalled)
    }
}
