// src/error/types.rs
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resource not found")]
    NotFound,

    /// A document row exists but carries no data.
    #[error("Document '{id}' has no data")]
    MalformedDocument { id: String },

    /// A failed repository operation, wrapped with the action it was
    /// performing and the message of the underlying cause.
    #[error("Failed to {action}: {cause}")]
    Operation { action: String, cause: String },

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// Wrap a failure with the action that was being performed.
    ///
    /// Logs the cause, then produces `Failed to <action>: <cause>`. A cause
    /// with an empty display message falls back to "Unknown error". Wrapping
    /// an already wrapped error keeps the inner `Failed to ...` text as the
    /// new cause; callers match on the full nested string.
    pub fn operation(action: impl Into<String>, source: AppError) -> AppError {
        let action = action.into();
        let mut cause = source.to_string();
        if cause.is_empty() {
            cause = "Unknown error".to_string();
        }
        log::error!("{}: {}", action, cause);
        AppError::Operation { action, cause }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_wrap_format() {
        let err = AppError::operation("save mute", AppError::Pool("pool exhausted".to_string()));
        assert_eq!(err.to_string(), "Failed to save mute: Pool error: pool exhausted");
    }

    #[test]
    fn test_operation_wrap_nests() {
        let inner = AppError::operation("get block by user and blocked user", AppError::NotFound);
        let outer = AppError::operation("check if user is blocked", inner);
        assert_eq!(
            outer.to_string(),
            "Failed to check if user is blocked: \
             Failed to get block by user and blocked user: Resource not found"
        );
    }

    #[test]
    fn test_malformed_document_names_id() {
        let err = AppError::MalformedDocument { id: "r1".to_string() };
        assert!(err.to_string().contains("r1"));
    }
}
