// src/domain/block.rs
//
// User Block Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::timestamp;

/// Represents one user blocking another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBlock {
    /// Document identifier, carried by the row key rather than the document
    #[serde(skip)]
    pub id: String,

    /// The user applying the block
    pub user_id: String,

    /// The user being blocked
    pub blocked_user_id: String,

    /// Denormalized display name of the blocked user, if known at block time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked_user_name: Option<String>,

    /// Creation timestamp
    #[serde(with = "timestamp::required", default = "timestamp::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(with = "timestamp::required", default = "timestamp::now")]
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a block; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UserBlockUpdate {
    pub blocked_user_name: Option<Option<String>>,
}

impl UserBlock {
    /// Create a new block with a generated id and fresh timestamps
    pub fn new(user_id: String, blocked_user_id: String, blocked_user_name: Option<String>) -> Self {
        let now = timestamp::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            blocked_user_id,
            blocked_user_name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial update and refresh the modification timestamp
    pub fn apply(&mut self, changes: &UserBlockUpdate) {
        if let Some(name) = &changes.blocked_user_name {
            self.blocked_user_name = name.clone();
        }

        self.updated_at = timestamp::now();
    }
}
