// src/domain/appeal.rs
//
// Appeal Entity
//
// A user contesting a recorded violation. `resolved_at` is the one optional
// timestamp in the model: absent until the appeal leaves Pending, and never
// substituted on read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::timestamp;

/// Represents a user's appeal against a violation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appeal {
    /// Document identifier, carried by the row key rather than the document
    #[serde(skip)]
    pub id: String,

    /// The appealing user
    pub user_id: String,

    /// The violation being contested
    pub violation_id: String,

    /// Why the user believes the violation is wrong
    pub reason: String,

    /// Current lifecycle state
    pub status: AppealStatus,

    /// Moderator note recorded at resolution time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_note: Option<String>,

    /// When the appeal was resolved; absent while Pending
    #[serde(with = "timestamp::optional", default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,

    /// Creation timestamp
    #[serde(with = "timestamp::required", default = "timestamp::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(with = "timestamp::required", default = "timestamp::now")]
    pub updated_at: DateTime<Utc>,
}

/// Appeal lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppealStatus {
    Pending,
    Approved,
    Rejected,
}

/// Partial update for an appeal; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct AppealUpdate {
    pub reason: Option<String>,
    pub status: Option<AppealStatus>,
    pub resolution_note: Option<Option<String>>,
    pub resolved_at: Option<Option<DateTime<Utc>>>,
}

impl Appeal {
    /// Create a new pending appeal with a generated id and fresh timestamps
    pub fn new(user_id: String, violation_id: String, reason: String) -> Self {
        let now = timestamp::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            violation_id,
            reason,
            status: AppealStatus::Pending,
            resolution_note: None,
            resolved_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial update and refresh the modification timestamp
    pub fn apply(&mut self, changes: &AppealUpdate) {
        if let Some(reason) = &changes.reason {
            self.reason = reason.clone();
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(note) = &changes.resolution_note {
            self.resolution_note = note.clone();
        }
        if let Some(resolved_at) = changes.resolved_at {
            self.resolved_at = resolved_at;
        }

        self.updated_at = timestamp::now();
    }
}

impl std::fmt::Display for AppealStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppealStatus::Pending => write!(f, "pending"),
            AppealStatus::Approved => write!(f, "approved"),
            AppealStatus::Rejected => write!(f, "rejected"),
        }
    }
}
