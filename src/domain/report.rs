// src/domain/report.rs
//
// Report Entity
//
// One user reporting another for review.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::timestamp;

/// Represents a user report against another user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Document identifier, carried by the row key rather than the document
    #[serde(skip)]
    pub id: String,

    /// The reporting user
    pub reporter_id: String,

    /// The user being reported
    pub reported_user_id: String,

    /// Denormalized display name of the reported user, if known at report time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_user_name: Option<String>,

    /// What kind of behavior is reported
    pub category: ReportCategory,

    /// Free-form description from the reporter
    pub description: String,

    /// Current review state
    pub status: ReportStatus,

    /// Creation timestamp
    #[serde(with = "timestamp::required", default = "timestamp::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(with = "timestamp::required", default = "timestamp::now")]
    pub updated_at: DateTime<Utc>,
}

/// Report categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportCategory {
    Spam,
    Harassment,
    InappropriateContent,
    Impersonation,
    Other,
}

/// Report review states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Reviewed,
    ActionTaken,
    Dismissed,
}

/// Partial update for a report; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct ReportUpdate {
    pub reported_user_name: Option<Option<String>>,
    pub category: Option<ReportCategory>,
    pub description: Option<String>,
    pub status: Option<ReportStatus>,
}

impl Report {
    /// Create a new pending report with a generated id and fresh timestamps
    pub fn new(
        reporter_id: String,
        reported_user_id: String,
        reported_user_name: Option<String>,
        category: ReportCategory,
        description: String,
    ) -> Self {
        let now = timestamp::now();
        Self {
            id: Uuid::new_v4().to_string(),
            reporter_id,
            reported_user_id,
            reported_user_name,
            category,
            description,
            status: ReportStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial update and refresh the modification timestamp
    pub fn apply(&mut self, changes: &ReportUpdate) {
        if let Some(name) = &changes.reported_user_name {
            self.reported_user_name = name.clone();
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(description) = &changes.description {
            self.description = description.clone();
        }
        if let Some(status) = changes.status {
            self.status = status;
        }

        self.updated_at = timestamp::now();
    }
}

impl std::fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportCategory::Spam => write!(f, "spam"),
            ReportCategory::Harassment => write!(f, "harassment"),
            ReportCategory::InappropriateContent => write!(f, "inappropriate_content"),
            ReportCategory::Impersonation => write!(f, "impersonation"),
            ReportCategory::Other => write!(f, "other"),
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "pending"),
            ReportStatus::Reviewed => write!(f, "reviewed"),
            ReportStatus::ActionTaken => write!(f, "action_taken"),
            ReportStatus::Dismissed => write!(f, "dismissed"),
        }
    }
}
