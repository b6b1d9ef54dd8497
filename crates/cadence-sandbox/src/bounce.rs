//! The bouncing-square demo scene.

use cadence_engine::coords::{Vec2, Viewport};
use cadence_engine::core::{LoadCtx, UpdateCtx};
use cadence_engine::input::Key;
use cadence_engine::scene::Scene;
use cadence_engine::stage::{Color, Stage};

const SQUARE_COLORS: [u32; 6] = [0xffff00, 0xff0000, 0x00ff00, 0x0000ff, 0x00ffff, 0xff00ff];
const SQUARE_SIZE: f32 = 64.0;
const SQUARE_SPEED: f32 = 256.0;

const LOGO_SIZE: f32 = 96.0;
const LOGO_COLOR: u32 = 0x646cff;

/// A square that drifts diagonally, bounces off the surface edges and
/// cycles its color on every bounce (or on Space). Arrow keys / WASD nudge
/// it around. Spawn position, heading and color come from the shared
/// deterministic random source, so a fixed seed replays the same run.
pub struct BounceScene {
    stage: Stage,
    viewport: Viewport,
    position: Vec2,
    velocity: Vec2,
    color_index: usize,
}

impl BounceScene {
    pub fn build(ctx: &mut LoadCtx<'_>) -> Box<dyn Scene> {
        let viewport = ctx.viewport;

        let color_index =
            ctx.random.int_range(0.0, SQUARE_COLORS.len() as f64) as usize;

        let position = Vec2::new(
            ctx.random.int_range(0.0, f64::from(viewport.width - SQUARE_SIZE)) as f32,
            ctx.random.int_range(0.0, f64::from(viewport.height - SQUARE_SIZE)) as f32,
        );

        // Random diagonal heading.
        const DIAGONALS: [Vec2; 4] = [
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(-1.0, 1.0),
            Vec2::new(-1.0, -1.0),
        ];
        let velocity = *ctx.random.choice(&DIAGONALS).unwrap_or(&DIAGONALS[0]);

        Box::new(Self {
            stage: Stage::new(),
            viewport,
            position,
            velocity,
            color_index,
        })
    }

    fn advance_color(&mut self) {
        self.color_index = (self.color_index + 1) % SQUARE_COLORS.len();
    }

    fn square_color(&self) -> Color {
        Color::from_rgb_u32(SQUARE_COLORS[self.color_index])
    }
}

impl Scene for BounceScene {
    fn update(&mut self, ctx: &mut UpdateCtx<'_>) {
        let dt = ctx.time.dt;

        if ctx.input.key_pressed(Key::Space) {
            self.advance_color();
        }

        self.position += self.velocity * SQUARE_SPEED * dt;
        self.position += ctx.input.movement() * SQUARE_SPEED * dt;

        let mut bounced = false;
        if self.position.x + SQUARE_SIZE >= self.viewport.width || self.position.x <= 0.0 {
            self.velocity.x = -self.velocity.x;
            bounced = true;
        }
        if self.position.y + SQUARE_SIZE >= self.viewport.height || self.position.y <= 0.0 {
            self.velocity.y = -self.velocity.y;
            bounced = true;
        }
        if bounced {
            self.position.x = self.position.x.clamp(0.0, self.viewport.width - SQUARE_SIZE);
            self.position.y = self.position.y.clamp(0.0, self.viewport.height - SQUARE_SIZE);
            self.advance_color();
        }

        self.stage.clear();

        let center = self.viewport.center();
        self.stage.rect(
            Vec2::new(center.x - LOGO_SIZE / 2.0, center.y - LOGO_SIZE / 2.0),
            Vec2::new(LOGO_SIZE, LOGO_SIZE),
            Color::from_rgb_u32(LOGO_COLOR),
        );

        self.stage.rect(
            self.position,
            Vec2::new(SQUARE_SIZE, SQUARE_SIZE),
            self.square_color(),
        );
    }

    fn stage(&self) -> &Stage {
        &self.stage
    }

    fn unload(&mut self) {
        log::debug!("bounce scene unloaded");
    }
}
