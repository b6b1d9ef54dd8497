//! The loop driver.
//!
//! [`Runtime`] owns every runtime subsystem — clock, scene stack, input,
//! random source, surface slot — and converts host animation-frame
//! callbacks into fixed simulation steps plus exactly one render.

mod driver;

pub use driver::{Runtime, RuntimeConfig};
