//! Channel entity

use serde::{Deserialize, Serialize};

/// A text channel, group DM, or DM
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub channel_type: String,
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub name: String,
}

impl Channel {
    /// Check whether this channel belongs to a guild
    #[inline]
    pub fn is_guild_channel(&self) -> bool {
        !self.server.is_empty()
    }
}
