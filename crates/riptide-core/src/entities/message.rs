//! Message entity
//!
//! The wire `content` field is polymorphic: ordinary chat messages carry a
//! plain string, system notices (user joined, channel renamed, ...) carry a
//! structured object. [`MessageContent`] captures that union as decoded;
//! normalization happens once at ingestion, in the gateway's content
//! resolver.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Attachment;

/// A chat message as delivered by the gateway
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    // Update events carry partial objects without `_id`; the dispatch
    // router stamps the envelope's id back on before use.
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub nonce: String,
    #[serde(rename = "channel", default)]
    pub channel_id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: MessageContent,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub edited: i64,
    #[serde(default)]
    pub mentions: Vec<String>,
    #[serde(default)]
    pub replies: Vec<String>,
}

/// The raw, still-polymorphic `content` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain chat text
    Text(String),
    /// Structured system notice
    System(SystemContent),
    /// Anything else the server might send; resolved best-effort
    Other(Value),
}

impl Default for MessageContent {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// Structured system-notice content
///
/// Each notice kind carries a different subset of these fields, so all but
/// the discriminator are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemContent {
    #[serde(rename = "type")]
    pub kind: String,
    /// Notice text, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Target entity (e.g. the user who joined or left)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Acting user (e.g. who renamed the channel)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
    /// New name, for rename notices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_with_text_content() {
        let json = r#"{
            "_id": "M1",
            "channel": "C1",
            "author": "U1",
            "content": "hello"
        }"#;

        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.channel_id, "C1");
        assert_eq!(message.content, MessageContent::Text("hello".to_string()));
    }

    #[test]
    fn test_message_with_system_content() {
        let json = r#"{
            "_id": "M2",
            "channel": "C1",
            "author": "00000000000000000000000000",
            "content": {"type": "channel_renamed", "name": "general", "by": "U1"}
        }"#;

        let message: Message = serde_json::from_str(json).unwrap();
        match message.content {
            MessageContent::System(system) => {
                assert_eq!(system.kind, "channel_renamed");
                assert_eq!(system.name.as_deref(), Some("general"));
                assert_eq!(system.by.as_deref(), Some("U1"));
                assert!(system.content.is_none());
            }
            other => panic!("expected system content, got {other:?}"),
        }
    }

    #[test]
    fn test_unrecognized_content_shape_falls_through() {
        // An object without a "type" discriminator is not a system notice.
        let json = r#"{"_id": "M3", "channel": "C1", "author": "U1", "content": {"weird": 1}}"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert!(matches!(message.content, MessageContent::Other(_)));
    }

    #[test]
    fn test_missing_content_defaults_to_empty_text() {
        let message: Message =
            serde_json::from_str(r#"{"_id": "M4", "channel": "C1", "author": "U1"}"#).unwrap();
        assert_eq!(message.content, MessageContent::Text(String::new()));
    }
}
