//! User entity - represents a chat user

use serde::{Deserialize, Serialize};

use super::Attachment;

/// A user account as the gateway delivers it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Attachment>,
    #[serde(default)]
    pub badges: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<UserBot>,
    #[serde(default)]
    pub relationship: String,
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub flags: u32,
}

/// Presence and custom status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatus {
    #[serde(default, rename = "text")]
    pub custom_status: String,
    #[serde(default)]
    pub presence: String,
}

/// Marker present on bot accounts, carrying the owner's user ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBot {
    pub owner: String,
}

impl User {
    /// Check if this account is a bot
    #[inline]
    pub fn is_bot(&self) -> bool {
        self.bot.is_some()
    }

    /// URL path of the user's avatar on the file host, if set
    pub fn avatar_path(&self) -> Option<String> {
        self.avatar.as_ref().map(|a| format!("/avatars/{}", a.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_wire_shape() {
        let json = r#"{
            "_id": "01ABC",
            "username": "riptide",
            "badges": 0,
            "status": {"text": "hacking", "presence": "Online"},
            "bot": {"owner": "01DEF"},
            "online": true
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "01ABC");
        assert_eq!(user.username, "riptide");
        assert!(user.is_bot());
        assert_eq!(user.status.unwrap().custom_status, "hacking");
    }

    #[test]
    fn test_user_avatar_path() {
        let user: User = serde_json::from_str(
            r#"{"_id": "01ABC", "avatar": {"_id": "file9"}}"#,
        )
        .unwrap();
        assert_eq!(user.avatar_path().as_deref(), Some("/avatars/file9"));

        let bare: User = serde_json::from_str(r#"{"_id": "01ABC"}"#).unwrap();
        assert!(bare.avatar_path().is_none());
        assert!(!bare.is_bot());
    }
}
