//! Dispatch router
//!
//! Takes one raw frame from the read loop, sniffs its type tag, decodes the
//! body just-in-time, applies state mutations, resolves message content,
//! and invokes the handler hook. Every failure in here is scoped to its own
//! frame; nothing propagates back to the connection.

use std::sync::Arc;

use crate::content::resolve_content;
use crate::dispatch::EventHandler;
use crate::events::{EventType, ServerEvent};
use crate::protocol::sniff_type;
use crate::state::SessionState;

/// Routes decoded events to the state store and handler hooks
pub struct Router {
    state: Arc<SessionState>,
    handler: Arc<dyn EventHandler>,
}

impl Router {
    pub fn new(state: Arc<SessionState>, handler: Arc<dyn EventHandler>) -> Self {
        Self { state, handler }
    }

    /// The session state this router mutates
    #[must_use]
    pub fn state(&self) -> &Arc<SessionState> {
        &self.state
    }

    /// Process one raw inbound frame
    ///
    /// Unknown tags and malformed bodies are dropped with a log line;
    /// subsequent frames are unaffected.
    pub async fn on_frame(&self, raw: &str) {
        let tag = match sniff_type(raw) {
            Ok(tag) => tag,
            Err(e) => {
                tracing::warn!(error = %e, "Dropping frame without a type tag");
                return;
            }
        };

        let Some(event_type) = EventType::from_tag(&tag) else {
            tracing::debug!(tag = %tag, "Unknown event type, dropping");
            return;
        };

        let event = match ServerEvent::decode(event_type, raw) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(tag = %tag, error = %e, "Failed to decode event body, dropping");
                return;
            }
        };

        tracing::trace!(tag = %tag, "Dispatching event");

        // State first: hooks must observe the store already updated for the
        // event they are handed.
        self.apply_state(&event);
        self.invoke(event).await;
    }

    /// Apply the event's state mutation, if it carries one
    fn apply_state(&self, event: &ServerEvent) {
        match event {
            ServerEvent::Ready(ready) => self.state.apply_ready(ready),
            ServerEvent::ChannelCreate(channel) => self.state.upsert_channel(channel.clone()),
            ServerEvent::ChannelUpdate(update) => {
                let mut channel = update.data.clone();
                channel.id = update.id.clone();
                self.state.upsert_channel(channel);
            }
            ServerEvent::ChannelDelete { id } => {
                self.state.remove_channel(id);
            }
            ServerEvent::ServerUpdate(update) => self.state.upsert_guild(update.guild.clone()),
            ServerEvent::ServerDelete { id } => {
                self.state.remove_guild(id);
            }
            ServerEvent::ServerMemberJoin(join) => {
                self.state
                    .upsert_member(riptide_core::Member::new(&join.guild_id, &join.user_id));
            }
            ServerEvent::ServerMemberLeave(leave) => {
                self.state
                    .remove_member(&riptide_core::MemberId::new(&leave.guild_id, &leave.user_id));
            }
            ServerEvent::ServerMemberUpdate(update) => {
                let mut member = update.data.clone();
                member.id = update.id.clone();
                self.state.upsert_member(member);
            }
            ServerEvent::UserUpdate(update) => {
                let mut user = update.data.clone();
                user.id = update.user_id.clone();
                self.state.upsert_user(user);
            }
            // Everything else carries no mirrored state.
            _ => {}
        }
    }

    /// Forward the event to its handler hook
    async fn invoke(&self, event: ServerEvent) {
        match event {
            ServerEvent::Authenticated(_) => self.handler.on_authenticated().await,
            ServerEvent::Pong(pong) => self.handler.on_pong(pong).await,
            ServerEvent::Ready(ready) => self.handler.on_ready(ready).await,
            ServerEvent::Message(message) => {
                let content = resolve_content(&message.content);
                self.handler.on_message(message, content).await;
            }
            ServerEvent::MessageUpdate(update) => self.handler.on_message_update(update).await,
            ServerEvent::MessageDelete(delete) => self.handler.on_message_delete(delete).await,
            ServerEvent::ChannelCreate(channel) => self.handler.on_channel_create(channel).await,
            ServerEvent::ChannelUpdate(update) => self.handler.on_channel_update(update).await,
            ServerEvent::ChannelDelete { id } => self.handler.on_channel_delete(id).await,
            ServerEvent::ChannelGroupJoin(join) => self.handler.on_channel_group_join(join).await,
            ServerEvent::ChannelGroupLeave(leave) => {
                self.handler.on_channel_group_leave(leave).await;
            }
            ServerEvent::ChannelStartTyping(typing) => {
                self.handler.on_channel_start_typing(typing).await;
            }
            ServerEvent::ChannelStopTyping(typing) => {
                self.handler.on_channel_stop_typing(typing).await;
            }
            ServerEvent::ChannelAck(ack) => self.handler.on_channel_ack(ack).await,
            ServerEvent::ServerUpdate(update) => self.handler.on_server_update(update).await,
            ServerEvent::ServerDelete { id } => self.handler.on_server_delete(id).await,
            ServerEvent::ServerMemberUpdate(update) => self.handler.on_member_update(update).await,
            ServerEvent::ServerMemberJoin(join) => self.handler.on_member_join(join).await,
            ServerEvent::ServerMemberLeave(leave) => self.handler.on_member_leave(leave).await,
            ServerEvent::ServerRoleUpdate(update) => self.handler.on_role_update(update).await,
            ServerEvent::ServerRoleDelete(delete) => self.handler.on_role_delete(delete).await,
            ServerEvent::UserUpdate(update) => self.handler.on_user_update(update).await,
            ServerEvent::UserRelationship(relationship) => {
                self.handler.on_user_relationship(relationship).await;
            }
        }
    }
}
