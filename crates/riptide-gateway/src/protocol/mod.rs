//! Envelope codec
//!
//! Every gateway frame is a JSON object carrying a `type` string
//! discriminator. This module extracts that discriminator cheaply and
//! (de)serializes the outbound command shapes.

mod commands;
mod envelope;

pub use commands::ClientCommand;
pub use envelope::sniff_type;
