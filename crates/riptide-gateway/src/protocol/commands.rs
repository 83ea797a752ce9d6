//! Outbound commands
//!
//! Internally tagged so serialization injects the `type` discriminator the
//! server expects.

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Commands the client sends over the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientCommand {
    /// Handshake; must be the first command after dialing
    Authenticate { token: String },
    /// Show a typing indicator in a channel
    BeginTyping { channel: String },
    /// Clear the typing indicator
    EndTyping { channel: String },
    /// Keep-alive; `time` is a Unix timestamp echoed back in `Pong`
    Ping { time: i64 },
}

impl ClientCommand {
    /// Serialize to a wire frame
    ///
    /// Only encoder-internal faults can fail here; such a failure is fatal
    /// to the send call, not to the connection.
    pub fn encode(&self) -> Result<String, GatewayError> {
        serde_json::to_string(self).map_err(|e| GatewayError::Send(e.to_string()))
    }

    /// The type tag this command serializes under
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Authenticate { .. } => "Authenticate",
            Self::BeginTyping { .. } => "BeginTyping",
            Self::EndTyping { .. } => "EndTyping",
            Self::Ping { .. } => "Ping",
        }
    }
}
