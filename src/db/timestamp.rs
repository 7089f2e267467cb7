// src/db/timestamp.rs
//
// Timestamp adapter between application dates and the stored document format.
//
// Dates live inside the JSON documents as epoch-millisecond integers. Required
// date fields substitute the current time when the stored document lacks them
// (partially written or legacy documents); optional date fields pass through
// as absent without substitution.
//
// Entity fields opt in with serde attributes:
//
//   #[serde(with = "timestamp::required", default = "timestamp::now")]
//   pub created_at: DateTime<Utc>,
//
//   #[serde(with = "timestamp::optional", default)]
//   pub resolved_at: Option<DateTime<Utc>>,

use chrono::{DateTime, Utc};

/// Serde adapter for required date fields (epoch milliseconds).
pub use chrono::serde::ts_milliseconds as required;

/// Serde adapter for optional date fields (epoch milliseconds or absent).
pub use chrono::serde::ts_milliseconds_option as optional;

/// Current time truncated to millisecond precision.
///
/// All timestamps the crate mints go through here so that a saved record
/// compares equal to the record read back from the store.
pub fn now() -> DateTime<Utc> {
    let millis = Utc::now().timestamp_millis();
    DateTime::from_timestamp_millis(millis).unwrap_or_else(Utc::now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "required", default = "now")]
        created_at: DateTime<Utc>,
        #[serde(with = "optional", default)]
        resolved_at: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_round_trip_millisecond_exact() {
        let value = Stamped {
            created_at: now(),
            resolved_at: Some(now()),
        };

        let json = serde_json::to_string(&value).unwrap();
        let back: Stamped = serde_json::from_str(&json).unwrap();

        assert_eq!(back, value);
    }

    #[test]
    fn test_serializes_as_epoch_millis() {
        let created_at = DateTime::from_timestamp_millis(1_704_067_200_000).unwrap();
        let value = Stamped {
            created_at,
            resolved_at: None,
        };

        let json: serde_json::Value = serde_json::to_value(&value).unwrap();
        assert_eq!(json["created_at"], 1_704_067_200_000i64);
        assert!(json["resolved_at"].is_null());
    }

    #[test]
    fn test_missing_required_field_substitutes_now() {
        let before = now();
        let back: Stamped = serde_json::from_str("{}").unwrap();

        assert!(back.created_at >= before);
        assert_eq!(back.resolved_at, None);
    }

    #[test]
    fn test_now_is_millisecond_truncated() {
        let stamp = now();
        assert_eq!(stamp.timestamp_subsec_nanos() % 1_000_000, 0);
    }
}
