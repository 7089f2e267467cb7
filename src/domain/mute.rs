// src/domain/mute.rs
//
// User Mute Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::timestamp;

/// Represents one user muting another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMute {
    /// Document identifier, carried by the row key rather than the document
    #[serde(skip)]
    pub id: String,

    /// The user applying the mute
    pub user_id: String,

    /// The user being muted
    pub muted_user_id: String,

    /// Denormalized display name of the muted user, if known at mute time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted_user_name: Option<String>,

    /// Creation timestamp
    #[serde(with = "timestamp::required", default = "timestamp::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(with = "timestamp::required", default = "timestamp::now")]
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a mute; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UserMuteUpdate {
    pub muted_user_name: Option<Option<String>>,
}

impl UserMute {
    /// Create a new mute with a generated id and fresh timestamps
    pub fn new(user_id: String, muted_user_id: String, muted_user_name: Option<String>) -> Self {
        let now = timestamp::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            muted_user_id,
            muted_user_name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial update and refresh the modification timestamp
    pub fn apply(&mut self, changes: &UserMuteUpdate) {
        if let Some(name) = &changes.muted_user_name {
            self.muted_user_name = name.clone();
        }

        self.updated_at = timestamp::now();
    }
}
