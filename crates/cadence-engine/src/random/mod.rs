//! Deterministic random source.
//!
//! [`PseudoRandom`] produces replayable sequences from a seed string: the
//! seed is digested into four 32-bit words which drive a small add/rotate/
//! xor generator. Two instances given the same seed and the same call
//! sequence produce bit-for-bit identical output on every platform.

mod pseudo;
mod seed;
mod sfc32;

pub use pseudo::{PseudoRandom, RandomError, WeightedItem};
