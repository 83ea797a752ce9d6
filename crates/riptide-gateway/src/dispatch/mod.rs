//! Event dispatch
//!
//! Routes decoded frames to the session state store and the registered
//! handler hooks.

mod handler;
mod router;

pub use handler::{EventHandler, NoopHandler};
pub use router::Router;
