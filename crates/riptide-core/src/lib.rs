//! # riptide-core
//!
//! Wire data model shared by the gateway and REST crates.
//!
//! Every type here mirrors a JSON shape the platform actually sends; there
//! is no I/O in this crate.

pub mod entities;

pub use entities::{
    Attachment, AttachmentMetadata, Channel, Guild, GuildCategory, GuildRole,
    Member, MemberId, Message, MessageContent, SystemContent, SystemMessages,
    User, UserBot, UserStatus,
};
