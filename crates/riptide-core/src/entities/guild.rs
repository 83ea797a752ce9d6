//! Guild entity - a server hosting channels and members

use serde::{Deserialize, Serialize};

use super::Attachment;

/// A guild ("server" on the wire)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default)]
    pub categories: Vec<GuildCategory>,
    #[serde(default)]
    pub roles: Vec<GuildRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_messages: Option<SystemMessages>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Attachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<Attachment>,
}

/// Channel grouping inside a guild
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildCategory {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channels: Vec<String>,
}

/// Role definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildRole {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub colour: String,
    #[serde(default)]
    pub hoist: bool,
    #[serde(default)]
    pub rank: i32,
}

/// Channel IDs the guild routes system notices to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemMessages {
    #[serde(default)]
    pub user_joined: String,
    #[serde(default)]
    pub user_left: String,
    #[serde(default)]
    pub user_kicked: String,
    #[serde(default)]
    pub user_banned: String,
}

impl Guild {
    /// Channel that receives "user joined" notices, if configured
    pub fn user_joined_channel(&self) -> Option<&str> {
        self.system_messages
            .as_ref()
            .map(|s| s.user_joined.as_str())
            .filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guild_deserializes_wire_shape() {
        let json = r#"{
            "_id": "G1",
            "owner": "U1",
            "name": "lounge",
            "channels": ["C1", "C2"],
            "system_messages": {"user_joined": "C1", "user_left": "C2"}
        }"#;

        let guild: Guild = serde_json::from_str(json).unwrap();
        assert_eq!(guild.id, "G1");
        assert_eq!(guild.channels.len(), 2);
        assert_eq!(guild.user_joined_channel(), Some("C1"));
    }

    #[test]
    fn test_guild_without_system_messages() {
        let guild: Guild = serde_json::from_str(r#"{"_id": "G2"}"#).unwrap();
        assert!(guild.user_joined_channel().is_none());
    }
}
