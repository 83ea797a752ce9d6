//! Message content resolution
//!
//! The wire `content` field is either a plain string or a structured system
//! notice. This module collapses both shapes into one normalized record,
//! once, at ingestion; handlers never re-inspect the raw union.

use riptide_core::MessageContent;

/// Normalized message content
///
/// `kind` is "message" for ordinary chat text, otherwise the system-notice
/// discriminator ("user_joined", "channel_renamed", ...). Fields a variant
/// does not carry are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedContent {
    pub kind: String,
    pub text: String,
    pub target_id: String,
    pub actor_id: String,
    pub name: String,
}

impl ResolvedContent {
    /// Check whether this is ordinary chat text
    #[must_use]
    pub fn is_chat_message(&self) -> bool {
        self.kind == "message"
    }
}

/// Resolve the polymorphic wire content into its normalized form
///
/// Unrecognized shapes resolve, best effort, to an empty chat message; they
/// never fail dispatch.
pub fn resolve_content(content: &MessageContent) -> ResolvedContent {
    match content {
        MessageContent::Text(text) => ResolvedContent {
            kind: "message".to_string(),
            text: text.clone(),
            ..ResolvedContent::default()
        },
        MessageContent::System(system) => ResolvedContent {
            kind: system.kind.clone(),
            text: system.content.clone().unwrap_or_default(),
            target_id: system.id.clone().unwrap_or_default(),
            actor_id: system.by.clone().unwrap_or_default(),
            name: system.name.clone().unwrap_or_default(),
        },
        MessageContent::Other(value) => {
            tracing::warn!(shape = %value, "Unrecognized message content shape");
            ResolvedContent {
                kind: "message".to_string(),
                ..ResolvedContent::default()
            }
        }
    }
}
