//! Integration test utilities for the Riptide client
//!
//! Provides a loopback WebSocket gateway the client can dial, plus small
//! polling helpers.

pub mod helpers;

pub use helpers::*;
