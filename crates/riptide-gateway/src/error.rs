//! Gateway error types
//!
//! Per-frame failures (decode) never cross their own dispatch unit;
//! connection-level failures (connect, read, closed) end the read loop and
//! surface to whoever called `start`.

use tokio_tungstenite::tungstenite;

/// Errors raised by the gateway engine
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Dial or WebSocket handshake failure; fatal to `start`
    #[error("Failed to connect to gateway: {0}")]
    Connect(#[source] tungstenite::Error),

    /// Connection-level read failure; ends the read loop
    #[error("Gateway read failed: {0}")]
    Read(#[source] tungstenite::Error),

    /// A command could not be handed to the write path; reported to the
    /// sender only, the connection keeps running
    #[error("Failed to send command: {0}")]
    Send(String),

    /// Malformed frame; logged and dropped, never connection-fatal
    #[error("Failed to decode frame: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server closed the connection
    #[error("Gateway connection closed")]
    Closed,
}
