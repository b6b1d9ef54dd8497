//! Fixed-timestep timing.
//!
//! One [`FrameClock`] per loop: feed it the host's animation-frame
//! timestamps and it answers how many whole simulation steps to run.

mod frame_clock;

pub use frame_clock::{FrameAdvance, FrameClock, FrameTime};
