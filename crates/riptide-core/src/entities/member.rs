//! Guild member entity
//!
//! Members are keyed by the composite (server, user) pair the wire uses.

use serde::{Deserialize, Serialize};

/// Composite member key: one user's membership in one guild
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId {
    pub server: String,
    pub user: String,
}

impl MemberId {
    pub fn new(server: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            user: user.into(),
        }
    }
}

/// A user's membership record in a guild
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    // Update events carry partial objects without `_id`; the dispatch
    // router stamps the envelope's key back on before use.
    #[serde(rename = "_id", default)]
    pub id: MemberId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl Member {
    /// Create a bare membership record from its composite key
    pub fn new(server: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(server, user),
            nickname: None,
        }
    }
}
