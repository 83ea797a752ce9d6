//! # riptide-gateway
//!
//! Realtime gateway engine for the Riptide chat client: connection
//! lifecycle, heartbeat scheduling, frame decoding, type-tagged event
//! dispatch, and a concurrency-safe mirror of server-side state.
//!
//! The entry point is [`GatewayClient`]: construct it with a
//! `ClientConfig` and an [`EventHandler`] implementation, then call
//! [`GatewayClient::start`]. `start` blocks until the connection ends; it
//! does not reconnect on its own.

pub mod connection;
pub mod content;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod heartbeat;
pub mod protocol;
pub mod state;

pub use connection::{CommandSender, GatewayClient};
pub use content::{resolve_content, ResolvedContent};
pub use dispatch::{EventHandler, NoopHandler, Router};
pub use error::GatewayError;
pub use events::{EventType, ServerEvent};
pub use protocol::ClientCommand;
pub use state::SessionState;
