//! Wire entities
//!
//! One file per entity, mirroring the platform's JSON shapes.

mod attachment;
mod channel;
mod guild;
mod member;
mod message;
mod user;

pub use attachment::{Attachment, AttachmentMetadata};
pub use channel::Channel;
pub use guild::{Guild, GuildCategory, GuildRole, SystemMessages};
pub use member::{Member, MemberId};
pub use message::{Message, MessageContent, SystemContent};
pub use user::{User, UserBot, UserStatus};
