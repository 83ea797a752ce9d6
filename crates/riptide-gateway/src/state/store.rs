//! Session state store
//!
//! A concurrency-safe mirror of server-side state: users, guilds, channels
//! and members, each in its own keyspace. All mutation goes through the
//! dispatch router; handlers only ever read through the accessors here.
//!
//! Semantics: last writer wins, entries appear on first sight (snapshot or
//! creation event) and are only removed by explicit deletion events. No
//! operation spans more than one collection.

use dashmap::DashMap;
use riptide_core::{Channel, Guild, Member, MemberId, User};

use crate::events::Ready;

/// Concurrency-safe mirror of users, guilds, channels and members
#[derive(Debug, Default)]
pub struct SessionState {
    users: DashMap<String, User>,
    guilds: DashMap<String, Guild>,
    channels: DashMap<String, Channel>,
    members: DashMap<MemberId, Member>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the initial snapshot, bulk-upserting all four collections
    ///
    /// The four keyspaces are independent; no cross-collection ordering is
    /// guaranteed or needed.
    pub fn apply_ready(&self, ready: &Ready) {
        for user in &ready.users {
            self.users.insert(user.id.clone(), user.clone());
        }
        for guild in &ready.guilds {
            self.guilds.insert(guild.id.clone(), guild.clone());
        }
        for channel in &ready.channels {
            self.channels.insert(channel.id.clone(), channel.clone());
        }
        for member in &ready.members {
            self.members.insert(member.id.clone(), member.clone());
        }
        tracing::debug!(
            users = self.users.len(),
            guilds = self.guilds.len(),
            channels = self.channels.len(),
            members = self.members.len(),
            "Applied Ready snapshot"
        );
    }

    // === Users ===

    pub fn upsert_user(&self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    #[must_use]
    pub fn get_user(&self, id: &str) -> Option<User> {
        self.users.get(id).map(|entry| entry.clone())
    }

    pub fn remove_user(&self, id: &str) -> Option<User> {
        self.users.remove(id).map(|(_, user)| user)
    }

    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    // === Guilds ===

    pub fn upsert_guild(&self, guild: Guild) {
        self.guilds.insert(guild.id.clone(), guild);
    }

    #[must_use]
    pub fn get_guild(&self, id: &str) -> Option<Guild> {
        self.guilds.get(id).map(|entry| entry.clone())
    }

    pub fn remove_guild(&self, id: &str) -> Option<Guild> {
        self.guilds.remove(id).map(|(_, guild)| guild)
    }

    #[must_use]
    pub fn guild_count(&self) -> usize {
        self.guilds.len()
    }

    // === Channels ===

    pub fn upsert_channel(&self, channel: Channel) {
        self.channels.insert(channel.id.clone(), channel);
    }

    #[must_use]
    pub fn get_channel(&self, id: &str) -> Option<Channel> {
        self.channels.get(id).map(|entry| entry.clone())
    }

    pub fn remove_channel(&self, id: &str) -> Option<Channel> {
        self.channels.remove(id).map(|(_, channel)| channel)
    }

    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    // === Members ===

    pub fn upsert_member(&self, member: Member) {
        self.members.insert(member.id.clone(), member);
    }

    #[must_use]
    pub fn get_member(&self, id: &MemberId) -> Option<Member> {
        self.members.get(id).map(|entry| entry.clone())
    }

    pub fn remove_member(&self, id: &MemberId) -> Option<Member> {
        self.members.remove(id).map(|(_, member)| member)
    }

    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// IDs of every member of one guild
    #[must_use]
    pub fn guild_member_ids(&self, guild_id: &str) -> Vec<MemberId> {
        self.members
            .iter()
            .filter(|entry| entry.key().server == guild_id)
            .map(|entry| entry.key().clone())
            .collect()
    }
}
