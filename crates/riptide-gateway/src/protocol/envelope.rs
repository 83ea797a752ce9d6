//! Frame sniffing
//!
//! Extracts the `type` discriminator from a raw frame without decoding the
//! body into a typed event; the full decode happens just-in-time in the
//! dispatch router once the tag is known.

use serde::Deserialize;

use crate::error::GatewayError;

#[derive(Deserialize)]
struct TypeProbe {
    #[serde(rename = "type")]
    kind: String,
}

/// Extract the `type` tag from a raw frame
///
/// Fails with [`GatewayError::Decode`] when the frame is not a JSON object
/// with a string `type` field; callers treat that as a dropped frame, not a
/// connection failure.
pub fn sniff_type(raw: &str) -> Result<String, GatewayError> {
    let probe: TypeProbe = serde_json::from_str(raw)?;
    Ok(probe.kind)
}
