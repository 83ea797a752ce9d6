//! Handler hooks
//!
//! One hook per inbound event type, every one defaulting to a no-op:
//! implementors override only what they care about. Hooks that want to send
//! commands or read mirrored state capture a `CommandSender` or
//! `Arc<SessionState>` at construction time.

use async_trait::async_trait;
use riptide_core::{Channel, Message};

use crate::content::ResolvedContent;
use crate::events::{
    ChannelAck, ChannelGroupJoin, ChannelGroupLeave, ChannelStartTyping, ChannelStopTyping,
    ChannelUpdate, MessageDelete, MessageUpdate, Pong, Ready, ServerMemberJoin, ServerMemberLeave,
    ServerMemberUpdate, ServerRoleDelete, ServerRoleUpdate, ServerUpdate, UserRelationship,
    UserUpdate,
};

/// Per-event-type hooks invoked by the dispatch router
///
/// By the time a hook runs, the session state store already reflects the
/// event it is being handed.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn on_authenticated(&self) {}

    async fn on_pong(&self, _pong: Pong) {}

    async fn on_ready(&self, _ready: Ready) {}

    /// New message; `content` is the resolved form of the polymorphic body
    async fn on_message(&self, _message: Message, _content: ResolvedContent) {}

    async fn on_message_update(&self, _event: MessageUpdate) {}

    async fn on_message_delete(&self, _event: MessageDelete) {}

    async fn on_channel_create(&self, _channel: Channel) {}

    async fn on_channel_update(&self, _event: ChannelUpdate) {}

    async fn on_channel_delete(&self, _channel_id: String) {}

    async fn on_channel_group_join(&self, _event: ChannelGroupJoin) {}

    async fn on_channel_group_leave(&self, _event: ChannelGroupLeave) {}

    async fn on_channel_start_typing(&self, _event: ChannelStartTyping) {}

    async fn on_channel_stop_typing(&self, _event: ChannelStopTyping) {}

    async fn on_channel_ack(&self, _event: ChannelAck) {}

    async fn on_server_update(&self, _event: ServerUpdate) {}

    async fn on_server_delete(&self, _guild_id: String) {}

    async fn on_member_update(&self, _event: ServerMemberUpdate) {}

    async fn on_member_join(&self, _event: ServerMemberJoin) {}

    async fn on_member_leave(&self, _event: ServerMemberLeave) {}

    async fn on_role_update(&self, _event: ServerRoleUpdate) {}

    async fn on_role_delete(&self, _event: ServerRoleDelete) {}

    async fn on_user_update(&self, _event: UserUpdate) {}

    async fn on_user_relationship(&self, _event: UserRelationship) {}
}

/// Handler that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHandler;

#[async_trait]
impl EventHandler for NoopHandler {}
