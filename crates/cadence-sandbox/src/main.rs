//! Cadence sandbox: a bouncing square driven by the engine runtime.
//!
//! Runs the fixed-step loop against a wgpu render surface. Set
//! `CADENCE_SEED` to replay a specific run.

mod bounce;
mod gfx;

use anyhow::Result;

use cadence_engine::coords::resolutions::aspect_16_9::R1280X720;
use cadence_engine::logging::{init_logging, LoggingConfig};
use cadence_engine::runtime::{Runtime, RuntimeConfig};
use cadence_engine::scene::ImmediateLoader;
use cadence_engine::shell::{Shell, ShellConfig};

use crate::gfx::WgpuSurface;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut runtime = Runtime::new(RuntimeConfig {
        seed: std::env::var("CADENCE_SEED").ok(),
        ..RuntimeConfig::default()
    });

    runtime
        .scenes_mut()
        .push(ImmediateLoader::new(bounce::BounceScene::build));

    Shell::run(ShellConfig::default(), runtime, |window| {
        let surface = pollster::block_on(WgpuSurface::new(window, R1280X720.as_viewport()))?;
        Ok(Box::new(surface))
    })
}
