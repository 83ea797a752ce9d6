//! Outbound request bodies

use serde::{Deserialize, Serialize};

/// Body for posting a message to a channel
///
/// The server rejects duplicate nonces, so [`SendMessagePayload::new`]
/// fills one in automatically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessagePayload {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub nonce: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<Reply>,
}

/// Reference to a message being replied to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: String,
    #[serde(default)]
    pub mention: bool,
}

impl SendMessagePayload {
    /// Text-only message with a fresh nonce
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            nonce: uuid::Uuid::new_v4().simple().to_string(),
            attachments: Vec::new(),
            replies: Vec::new(),
        }
    }

    /// Attach an uploaded file by its attachment ID
    #[must_use]
    pub fn with_attachment(mut self, attachment_id: impl Into<String>) -> Self {
        self.attachments.push(attachment_id.into());
        self
    }

    /// Reply to a message
    #[must_use]
    pub fn with_reply(mut self, message_id: impl Into<String>, mention: bool) -> Self {
        self.replies.push(Reply {
            id: message_id.into(),
            mention,
        });
        self
    }

    /// Ensure a nonce is set, generating one if needed
    pub(crate) fn ensure_nonce(&mut self) {
        if self.nonce.is_empty() {
            self.nonce = uuid::Uuid::new_v4().simple().to_string();
        }
    }
}
