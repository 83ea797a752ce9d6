//! Typed inbound event payloads
//!
//! Each struct mirrors the body of one tagged frame. [`ServerEvent::decode`]
//! is the just-in-time body decode: the router sniffs the tag first, then
//! asks for the concrete shape here.

use riptide_core::{Channel, Guild, Member, MemberId, Message, User};
use serde::{Deserialize, Serialize};

use super::EventType;

/// Handshake accepted; carries no data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authenticated {}

/// Keep-alive reply echoing the ping's timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pong {
    #[serde(default)]
    pub time: i64,
}

/// Initial bulk state transfer received right after authentication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ready {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(rename = "servers", default)]
    pub guilds: Vec<Guild>,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub members: Vec<Member>,
}

/// A message was edited; `data` is a partial message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageUpdate {
    pub id: String,
    #[serde(default)]
    pub data: Message,
}

/// A message was deleted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDelete {
    #[serde(rename = "id")]
    pub message_id: String,
    #[serde(rename = "channel")]
    pub channel_id: String,
}

/// Channel settings changed; `data` is a partial channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelUpdate {
    pub id: String,
    #[serde(default)]
    pub data: Channel,
    /// Field the server cleared, if any (e.g. "Icon")
    #[serde(default)]
    pub clear: String,
}

/// A user joined a group channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelGroupJoin {
    #[serde(rename = "id")]
    pub channel_id: String,
    #[serde(rename = "user")]
    pub user_id: String,
}

/// A user left a group channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelGroupLeave {
    #[serde(rename = "id")]
    pub channel_id: String,
    #[serde(rename = "user")]
    pub user_id: String,
}

/// A user started typing in a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStartTyping {
    #[serde(rename = "id")]
    pub channel_id: String,
    #[serde(rename = "user")]
    pub user_id: String,
}

/// A user stopped typing in a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStopTyping {
    #[serde(rename = "id")]
    pub channel_id: String,
    #[serde(rename = "user")]
    pub user_id: String,
}

/// A user acknowledged a channel up to a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelAck {
    #[serde(rename = "id")]
    pub channel_id: String,
    #[serde(rename = "user")]
    pub user_id: String,
    pub message_id: String,
}

/// Guild settings changed; the body is the guild itself plus a cleared field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerUpdate {
    #[serde(flatten)]
    pub guild: Guild,
    #[serde(default)]
    pub clear: String,
}

/// A member record changed; `data` is a partial member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerMemberUpdate {
    /// Composite (server, user) key of the affected member
    #[serde(default)]
    pub id: MemberId,
    #[serde(default)]
    pub data: Member,
    #[serde(default)]
    pub clear: String,
}

/// A user joined a guild
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerMemberJoin {
    #[serde(rename = "id")]
    pub guild_id: String,
    #[serde(rename = "user")]
    pub user_id: String,
}

/// A user left a guild
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerMemberLeave {
    #[serde(rename = "id")]
    pub guild_id: String,
    #[serde(rename = "user")]
    pub user_id: String,
}

/// A role changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRoleUpdate {
    #[serde(rename = "id")]
    pub guild_id: String,
    #[serde(default)]
    pub role_id: String,
}

/// A role was deleted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRoleDelete {
    #[serde(rename = "id")]
    pub guild_id: String,
    #[serde(default)]
    pub role_id: String,
}

/// A user profile changed; `data` is a partial user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(rename = "id")]
    pub user_id: String,
    #[serde(default)]
    pub data: User,
    #[serde(default)]
    pub clear: String,
}

/// The relationship to another user changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRelationship {
    #[serde(rename = "id")]
    pub user_id: String,
    #[serde(rename = "user")]
    pub other_user_id: String,
    #[serde(default)]
    pub status: String,
}

/// One fully decoded inbound event
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    Authenticated(Authenticated),
    Pong(Pong),
    Ready(Ready),
    /// Message creation; the body is the message itself
    Message(Message),
    MessageUpdate(MessageUpdate),
    MessageDelete(MessageDelete),
    /// Channel creation; the body is the channel itself
    ChannelCreate(Channel),
    ChannelUpdate(ChannelUpdate),
    ChannelDelete { id: String },
    ChannelGroupJoin(ChannelGroupJoin),
    ChannelGroupLeave(ChannelGroupLeave),
    ChannelStartTyping(ChannelStartTyping),
    ChannelStopTyping(ChannelStopTyping),
    ChannelAck(ChannelAck),
    ServerUpdate(ServerUpdate),
    ServerDelete { id: String },
    ServerMemberUpdate(ServerMemberUpdate),
    ServerMemberJoin(ServerMemberJoin),
    ServerMemberLeave(ServerMemberLeave),
    ServerRoleUpdate(ServerRoleUpdate),
    ServerRoleDelete(ServerRoleDelete),
    UserUpdate(UserUpdate),
    UserRelationship(UserRelationship),
}

#[derive(Deserialize)]
struct IdOnly {
    id: String,
}

impl ServerEvent {
    /// Decode the body of a frame whose tag is already known
    ///
    /// A failure here means a recognized tag with a malformed body; the
    /// caller drops the frame and keeps the connection alive.
    pub fn decode(event_type: EventType, raw: &str) -> Result<Self, serde_json::Error> {
        Ok(match event_type {
            EventType::Authenticated => Self::Authenticated(serde_json::from_str(raw)?),
            EventType::Pong => Self::Pong(serde_json::from_str(raw)?),
            EventType::Ready => Self::Ready(serde_json::from_str(raw)?),
            EventType::Message => Self::Message(serde_json::from_str(raw)?),
            EventType::MessageUpdate => Self::MessageUpdate(serde_json::from_str(raw)?),
            EventType::MessageDelete => Self::MessageDelete(serde_json::from_str(raw)?),
            EventType::ChannelCreate => Self::ChannelCreate(serde_json::from_str(raw)?),
            EventType::ChannelUpdate => Self::ChannelUpdate(serde_json::from_str(raw)?),
            EventType::ChannelDelete => {
                let body: IdOnly = serde_json::from_str(raw)?;
                Self::ChannelDelete { id: body.id }
            }
            EventType::ChannelGroupJoin => Self::ChannelGroupJoin(serde_json::from_str(raw)?),
            EventType::ChannelGroupLeave => Self::ChannelGroupLeave(serde_json::from_str(raw)?),
            EventType::ChannelStartTyping => Self::ChannelStartTyping(serde_json::from_str(raw)?),
            EventType::ChannelStopTyping => Self::ChannelStopTyping(serde_json::from_str(raw)?),
            EventType::ChannelAck => Self::ChannelAck(serde_json::from_str(raw)?),
            EventType::ServerUpdate => Self::ServerUpdate(serde_json::from_str(raw)?),
            EventType::ServerDelete => {
                let body: IdOnly = serde_json::from_str(raw)?;
                Self::ServerDelete { id: body.id }
            }
            EventType::ServerMemberUpdate => Self::ServerMemberUpdate(serde_json::from_str(raw)?),
            EventType::ServerMemberJoin => Self::ServerMemberJoin(serde_json::from_str(raw)?),
            EventType::ServerMemberLeave => Self::ServerMemberLeave(serde_json::from_str(raw)?),
            EventType::ServerRoleUpdate => Self::ServerRoleUpdate(serde_json::from_str(raw)?),
            EventType::ServerRoleDelete => Self::ServerRoleDelete(serde_json::from_str(raw)?),
            EventType::UserUpdate => Self::UserUpdate(serde_json::from_str(raw)?),
            EventType::UserRelationship => Self::UserRelationship(serde_json::from_str(raw)?),
        })
    }

    /// The event type this payload decoded from
    #[must_use]
    pub const fn event_type(&self) -> EventType {
        match self {
            Self::Authenticated(_) => EventType::Authenticated,
            Self::Pong(_) => EventType::Pong,
            Self::Ready(_) => EventType::Ready,
            Self::Message(_) => EventType::Message,
            Self::MessageUpdate(_) => EventType::MessageUpdate,
            Self::MessageDelete(_) => EventType::MessageDelete,
            Self::ChannelCreate(_) => EventType::ChannelCreate,
            Self::ChannelUpdate(_) => EventType::ChannelUpdate,
            Self::ChannelDelete { .. } => EventType::ChannelDelete,
            Self::ChannelGroupJoin(_) => EventType::ChannelGroupJoin,
            Self::ChannelGroupLeave(_) => EventType::ChannelGroupLeave,
            Self::ChannelStartTyping(_) => EventType::ChannelStartTyping,
            Self::ChannelStopTyping(_) => EventType::ChannelStopTyping,
            Self::ChannelAck(_) => EventType::ChannelAck,
            Self::ServerUpdate(_) => EventType::ServerUpdate,
            Self::ServerDelete { .. } => EventType::ServerDelete,
            Self::ServerMemberUpdate(_) => EventType::ServerMemberUpdate,
            Self::ServerMemberJoin(_) => EventType::ServerMemberJoin,
            Self::ServerMemberLeave(_) => EventType::ServerMemberLeave,
            Self::ServerRoleUpdate(_) => EventType::ServerRoleUpdate,
            Self::ServerRoleDelete(_) => EventType::ServerRoleDelete,
            Self::UserUpdate(_) => EventType::UserUpdate,
            Self::UserRelationship(_) => EventType::UserRelationship,
        }
    }
}
