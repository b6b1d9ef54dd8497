//! Publish/subscribe primitive.
//!
//! Every cross-component notification in the engine goes through
//! [`EventBus`] instead of direct callbacks, so subscribers never need a
//! reference to the publisher beyond a cloned bus handle.

mod bus;

pub use bus::{EventBus, Subscription};
