// src/domain/restriction.rs
//
// User Restriction Entity
//
// A directed pair: `user_id` restricts `restricted_user_id`. At most one
// restriction per pair is the intent; the store does not enforce it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::timestamp;

/// Represents one user restricting another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRestriction {
    /// Document identifier, carried by the row key rather than the document
    #[serde(skip)]
    pub id: String,

    /// The user applying the restriction
    pub user_id: String,

    /// The user being restricted
    pub restricted_user_id: String,

    /// What the restriction covers
    #[serde(rename = "type")]
    pub restriction_type: RestrictionType,

    /// Creation timestamp
    #[serde(with = "timestamp::required", default = "timestamp::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(with = "timestamp::required", default = "timestamp::now")]
    pub updated_at: DateTime<Utc>,
}

/// Scope of a restriction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionType {
    Interaction,
    Content,
    Full,
}

/// Partial update for a restriction; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UserRestrictionUpdate {
    pub restriction_type: Option<RestrictionType>,
}

impl UserRestriction {
    /// Create a new restriction with a generated id and fresh timestamps
    pub fn new(user_id: String, restricted_user_id: String, restriction_type: RestrictionType) -> Self {
        let now = timestamp::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            restricted_user_id,
            restriction_type,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial update and refresh the modification timestamp
    pub fn apply(&mut self, changes: &UserRestrictionUpdate) {
        if let Some(t) = changes.restriction_type {
            self.restriction_type = t;
        }

        self.updated_at = timestamp::now();
    }
}

impl std::fmt::Display for RestrictionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestrictionType::Interaction => write!(f, "interaction"),
            RestrictionType::Content => write!(f, "content"),
            RestrictionType::Full => write!(f, "full"),
        }
    }
}
