//! Gateway event types
//!
//! One variant per recognized inbound `type` tag. Tags that do not map to a
//! variant are unknown events: the router drops them with a log line, never
//! an error.

use std::fmt;

/// Recognized inbound event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Handshake accepted
    Authenticated,
    /// Keep-alive reply
    Pong,
    /// Initial state snapshot
    Ready,
    /// New message
    Message,
    /// Message edited
    MessageUpdate,
    /// Message deleted
    MessageDelete,
    /// Channel created
    ChannelCreate,
    /// Channel settings changed
    ChannelUpdate,
    /// Channel deleted
    ChannelDelete,
    /// User joined a group channel
    ChannelGroupJoin,
    /// User left a group channel
    ChannelGroupLeave,
    /// User started typing
    ChannelStartTyping,
    /// User stopped typing
    ChannelStopTyping,
    /// User acknowledged messages up to an ID
    ChannelAck,
    /// Guild settings changed
    ServerUpdate,
    /// Guild deleted or left
    ServerDelete,
    /// Member record changed
    ServerMemberUpdate,
    /// User joined a guild
    ServerMemberJoin,
    /// User left a guild
    ServerMemberLeave,
    /// Role changed
    ServerRoleUpdate,
    /// Role deleted
    ServerRoleDelete,
    /// User profile changed
    UserUpdate,
    /// Relationship to another user changed
    UserRelationship,
}

impl EventType {
    /// The wire tag for this event type
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Authenticated => "Authenticated",
            Self::Pong => "Pong",
            Self::Ready => "Ready",
            Self::Message => "Message",
            Self::MessageUpdate => "MessageUpdate",
            Self::MessageDelete => "MessageDelete",
            Self::ChannelCreate => "ChannelCreate",
            Self::ChannelUpdate => "ChannelUpdate",
            Self::ChannelDelete => "ChannelDelete",
            Self::ChannelGroupJoin => "ChannelGroupJoin",
            Self::ChannelGroupLeave => "ChannelGroupLeave",
            Self::ChannelStartTyping => "ChannelStartTyping",
            Self::ChannelStopTyping => "ChannelStopTyping",
            Self::ChannelAck => "ChannelAck",
            Self::ServerUpdate => "ServerUpdate",
            Self::ServerDelete => "ServerDelete",
            Self::ServerMemberUpdate => "ServerMemberUpdate",
            Self::ServerMemberJoin => "ServerMemberJoin",
            Self::ServerMemberLeave => "ServerMemberLeave",
            Self::ServerRoleUpdate => "ServerRoleUpdate",
            Self::ServerRoleDelete => "ServerRoleDelete",
            Self::UserUpdate => "UserUpdate",
            Self::UserRelationship => "UserRelationship",
        }
    }

    /// Parse a wire tag; `None` means the tag is unrecognized
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Authenticated" => Some(Self::Authenticated),
            "Pong" => Some(Self::Pong),
            "Ready" => Some(Self::Ready),
            "Message" => Some(Self::Message),
            "MessageUpdate" => Some(Self::MessageUpdate),
            "MessageDelete" => Some(Self::MessageDelete),
            "ChannelCreate" => Some(Self::ChannelCreate),
            "ChannelUpdate" => Some(Self::ChannelUpdate),
            "ChannelDelete" => Some(Self::ChannelDelete),
            "ChannelGroupJoin" => Some(Self::ChannelGroupJoin),
            "ChannelGroupLeave" => Some(Self::ChannelGroupLeave),
            "ChannelStartTyping" => Some(Self::ChannelStartTyping),
            "ChannelStopTyping" => Some(Self::ChannelStopTyping),
            "ChannelAck" => Some(Self::ChannelAck),
            "ServerUpdate" => Some(Self::ServerUpdate),
            "ServerDelete" => Some(Self::ServerDelete),
            "ServerMemberUpdate" => Some(Self::ServerMemberUpdate),
            "ServerMemberJoin" => Some(Self::ServerMemberJoin),
            "ServerMemberLeave" => Some(Self::ServerMemberLeave),
            "ServerRoleUpdate" => Some(Self::ServerRoleUpdate),
            "ServerRoleDelete" => Some(Self::ServerRoleDelete),
            "UserUpdate" => Some(Self::UserUpdate),
            "UserRelationship" => Some(Self::UserRelationship),
            _ => None,
        }
    }

    /// All recognized event types
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Authenticated,
            Self::Pong,
            Self::Ready,
            Self::Message,
            Self::MessageUpdate,
            Self::MessageDelete,
            Self::ChannelCreate,
            Self::ChannelUpdate,
            Self::ChannelDelete,
            Self::ChannelGroupJoin,
            Self::ChannelGroupLeave,
            Self::ChannelStartTyping,
            Self::ChannelStopTyping,
            Self::ChannelAck,
            Self::ServerUpdate,
            Self::ServerDelete,
            Self::ServerMemberUpdate,
            Self::ServerMemberJoin,
            Self::ServerMemberLeave,
            Self::ServerRoleUpdate,
            Self::ServerRoleDelete,
            Self::UserUpdate,
            Self::UserRelationship,
        ]
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}
