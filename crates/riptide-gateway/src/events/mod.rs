//! Inbound event catalog
//!
//! The set of recognized `type` tags and the typed payload for each.

mod payloads;
mod types;

pub use payloads::{
    Authenticated, ChannelAck, ChannelGroupJoin, ChannelGroupLeave, ChannelStartTyping,
    ChannelStopTyping, ChannelUpdate, MessageDelete, MessageUpdate, Pong, Ready, ServerEvent,
    ServerMemberJoin, ServerMemberLeave, ServerMemberUpdate, ServerRoleDelete, ServerRoleUpdate,
    ServerUpdate, UserRelationship, UserUpdate,
};
pub use types::EventType;
