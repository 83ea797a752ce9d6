//! # riptide-rest
//!
//! Thin REST collaborator for handler hooks: fetch a user, post a message,
//! upload an attachment. Authenticated with the bot token header; the
//! gateway engine never calls this crate itself.

mod client;
mod error;
mod requests;

pub use client::RestClient;
pub use error::RestError;
pub use requests::{Reply, SendMessagePayload};
