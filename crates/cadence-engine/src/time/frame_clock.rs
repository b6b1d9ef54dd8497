/// Timing snapshot handed to a scene for one simulation step.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Step duration in seconds. Always the nominal fixed step, never the
    /// measured frame delta: simulation advances at a constant rate
    /// regardless of display timing.
    pub dt: f32,

    /// Monotonic step counter across the whole run.
    pub step_index: u64,
}

/// Result of advancing the clock by one host callback.
#[derive(Debug, Copy, Clone)]
pub struct FrameAdvance {
    /// Whole simulation steps to run for this callback.
    pub steps: u32,
    /// Fixed step duration in seconds.
    pub dt: f32,
}

/// Converts variable-rate callback timestamps into fixed-size steps.
///
/// Elapsed time is clamped and accumulated; whole steps are drained and the
/// sub-step remainder carries into the next callback, so step cadence is
/// independent of display refresh without drifting from wall-clock time.
///
/// While paused the clock yields zero steps. Unpausing resets the timestamp
/// baseline, so the resuming callback is treated as the first one and a
/// long-hidden window does not cause a catch-up burst.
#[derive(Debug, Clone)]
pub struct FrameClock {
    step_ms: f64,
    last_ms: Option<f64>,
    accumulator_ms: f64,
    paused: bool,
    max_delta_ms: f64,
}

impl FrameClock {
    pub const DEFAULT_STEPS_PER_SECOND: f64 = 144.0;

    /// Clamp on a single callback's elapsed time. Prevents a simulation
    /// stampede after a debugger pause or machine sleep.
    const MAX_DELTA_MS: f64 = 250.0;

    pub fn new(steps_per_second: f64) -> Self {
        debug_assert!(steps_per_second > 0.0);
        Self {
            step_ms: 1000.0 / steps_per_second,
            last_ms: None,
            accumulator_ms: 0.0,
            paused: false,
            max_delta_ms: Self::MAX_DELTA_MS,
        }
    }

    /// Fixed step duration in seconds.
    pub fn step_duration(&self) -> f64 {
        self.step_ms * 0.001
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Sets the pause flag. Leaving the paused state resets the baseline.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused && !paused {
            self.reset();
        }
        self.paused = paused;
    }

    /// Resets the timestamp baseline; the next callback yields zero steps.
    pub fn reset(&mut self) {
        self.last_ms = None;
        self.accumulator_ms = 0.0;
    }

    /// Advances the clock to `now_ms` (a monotonically increasing
    /// millisecond timestamp) and returns the steps to simulate.
    pub fn advance(&mut self, now_ms: f64) -> FrameAdvance {
        let dt = (self.step_ms * 0.001) as f32;

        let Some(last) = self.last_ms else {
            self.last_ms = Some(now_ms);
            return FrameAdvance { steps: 0, dt };
        };

        let delta = (now_ms - last).clamp(0.0, self.max_delta_ms);
        self.last_ms = Some(now_ms);

        if self.paused {
            return FrameAdvance { steps: 0, dt };
        }

        self.accumulator_ms += delta;
        let mut steps = 0;
        while self.accumulator_ms >= self.step_ms {
            self.accumulator_ms -= self.step_ms;
            steps += 1;
        }

        FrameAdvance { steps, dt }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEPS_PER_SECOND)
    }
}
