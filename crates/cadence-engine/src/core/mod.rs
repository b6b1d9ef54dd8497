//! Engine-facing contracts.
//!
//! The contexts here are the stable interface between the loop driver and
//! content code: everything a scene may touch during an update or a load is
//! borrowed in explicitly, for the duration of that callback only. There is
//! no process-wide state to reach for.

mod ctx;

pub use ctx::{LoadCtx, UpdateCtx};
