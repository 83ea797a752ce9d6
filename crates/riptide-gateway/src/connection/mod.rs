//! Connection supervision
//!
//! Owns the WebSocket, the authentication handshake, the serialized write
//! path, and the read loop.

mod client;
mod sender;

pub use client::GatewayClient;
pub use sender::CommandSender;

pub(crate) use sender::run_writer;
