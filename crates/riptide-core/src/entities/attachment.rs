//! Uploaded file attachment

use serde::{Deserialize, Serialize};

/// A file stored on the platform's file host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub metadata: Option<AttachmentMetadata>,
    #[serde(default)]
    pub content_type: String,
}

/// Shape metadata attached to image/video uploads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentMetadata {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}
