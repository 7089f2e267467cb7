// src/domain/reputation.rs
//
// User Reputation Entity + Violations
//
// Reputation is one document per user (first match wins on lookup).
// Violations live in their own collection and are append-only: they are
// created once and never updated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::timestamp;

/// A user's standing, derived from moderation history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReputation {
    /// Document identifier, carried by the row key rather than the document
    #[serde(skip)]
    pub id: String,

    /// The user this reputation belongs to
    pub user_id: String,

    /// Numeric reputation score
    pub score: f64,

    /// Categorical standing, the bucket statistics partition on
    pub level: ReputationLevel,

    /// Creation timestamp
    #[serde(with = "timestamp::required", default = "timestamp::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(with = "timestamp::required", default = "timestamp::now")]
    pub updated_at: DateTime<Utc>,
}

/// Reputation standing buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReputationLevel {
    Excellent,
    Good,
    Neutral,
    Poor,
    Restricted,
}

/// Partial update for a reputation; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UserReputationUpdate {
    pub score: Option<f64>,
    pub level: Option<ReputationLevel>,
}

/// A recorded violation against a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReputationViolation {
    /// Document identifier, carried by the row key rather than the document
    #[serde(skip)]
    pub id: String,

    /// The offending user
    pub user_id: String,

    /// What kind of violation this was
    pub category: ViolationCategory,

    /// Human-readable description of the incident
    pub description: String,

    /// Severity weight, higher is worse
    pub severity: u32,

    /// Creation timestamp
    #[serde(with = "timestamp::required", default = "timestamp::now")]
    pub created_at: DateTime<Utc>,
}

/// Violation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCategory {
    Spam,
    Harassment,
    InappropriateContent,
    Impersonation,
    Other,
}

/// Aggregate view over all reputation documents
///
/// Computed in memory from a full collection scan; counts partition on
/// [`ReputationLevel`], the average is the arithmetic mean of all scores
/// and is defined as 0.0 for an empty collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReputationStatistics {
    pub total_users: usize,
    pub excellent_count: usize,
    pub good_count: usize,
    pub neutral_count: usize,
    pub poor_count: usize,
    pub restricted_count: usize,
    pub average_score: f64,
}

impl UserReputation {
    /// Create a new reputation with a generated id and fresh timestamps
    pub fn new(user_id: String, score: f64, level: ReputationLevel) -> Self {
        let now = timestamp::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            score,
            level,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial update and refresh the modification timestamp
    pub fn apply(&mut self, changes: &UserReputationUpdate) {
        if let Some(score) = changes.score {
            self.score = score;
        }
        if let Some(level) = changes.level {
            self.level = level;
        }

        self.updated_at = timestamp::now();
    }
}

impl ReputationViolation {
    /// Record a new violation with a generated id and a fresh timestamp
    pub fn new(user_id: String, category: ViolationCategory, description: String, severity: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            category,
            description,
            severity,
            created_at: timestamp::now(),
        }
    }
}

impl std::fmt::Display for ReputationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReputationLevel::Excellent => write!(f, "excellent"),
            ReputationLevel::Good => write!(f, "good"),
            ReputationLevel::Neutral => write!(f, "neutral"),
            ReputationLevel::Poor => write!(f, "poor"),
            ReputationLevel::Restricted => write!(f, "restricted"),
        }
    }
}

impl std::fmt::Display for ViolationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationCategory::Spam => write!(f, "spam"),
            ViolationCategory::Harassment => write!(f, "harassment"),
            ViolationCategory::InappropriateContent => write!(f, "inappropriate_content"),
            ViolationCategory::Impersonation => write!(f, "impersonation"),
            ViolationCategory::Other => write!(f, "other"),
        }
    }
}
