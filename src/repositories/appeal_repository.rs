// src/repositories/appeal_repository.rs
//
// Appeal persistence

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::appeal::{Appeal, AppealStatus, AppealUpdate};
use crate::error::{AppError, AppResult};
use crate::repositories::document::{DocumentCollection, DocumentRecord};

impl DocumentRecord for Appeal {
    const COLLECTION: &'static str = "appeals";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

pub trait AppealRepository: Send + Sync {
    fn get_all(&self) -> AppResult<Vec<Appeal>>;
    fn get_by_id(&self, id: &str) -> AppResult<Option<Appeal>>;
    fn save(&self, appeal: &Appeal) -> AppResult<()>;
    fn update(&self, id: &str, changes: &AppealUpdate) -> AppResult<Appeal>;
    fn delete(&self, id: &str) -> AppResult<()>;
    fn get_by_user(&self, user_id: &str) -> AppResult<Vec<Appeal>>;
    fn get_by_status(&self, status: AppealStatus) -> AppResult<Vec<Appeal>>;
    fn get_pending(&self) -> AppResult<Vec<Appeal>>;
}

pub struct SqliteAppealRepository {
    collection: DocumentCollection<Appeal>,
}

impl SqliteAppealRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self {
            collection: DocumentCollection::new(pool),
        }
    }

    fn update_record(&self, id: &str, changes: &AppealUpdate) -> AppResult<Appeal> {
        let mut record = self.collection.get(id)?.ok_or(AppError::NotFound)?;
        record.apply(changes);
        self.collection.put(&record)?;
        Ok(record)
    }
}

impl AppealRepository for SqliteAppealRepository {
    fn get_all(&self) -> AppResult<Vec<Appeal>> {
        self.collection
            .get_all()
            .map_err(|e| AppError::operation("get all appeals", e))
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<Appeal>> {
        self.collection
            .get(id)
            .map_err(|e| AppError::operation("get appeal by id", e))
    }

    fn save(&self, appeal: &Appeal) -> AppResult<()> {
        self.collection
            .put(appeal)
            .map_err(|e| AppError::operation("save appeal", e))
    }

    fn update(&self, id: &str, changes: &AppealUpdate) -> AppResult<Appeal> {
        self.update_record(id, changes)
            .map_err(|e| AppError::operation("update appeal", e))
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        self.collection
            .delete(id)
            .map_err(|e| AppError::operation("delete appeal", e))
    }

    fn get_by_user(&self, user_id: &str) -> AppResult<Vec<Appeal>> {
        self.collection
            .find_by(&[("userId", user_id)])
            .map_err(|e| AppError::operation("get appeals by user", e))
    }

    fn get_by_status(&self, status: AppealStatus) -> AppResult<Vec<Appeal>> {
        self.collection
            .find_by(&[("status", &status.to_string())])
            .map_err(|e| AppError::operation("get appeals by status", e))
    }

    fn get_pending(&self) -> AppResult<Vec<Appeal>> {
        self.collection
            .find_by(&[("status", "pending")])
            .map_err(|e| AppError::operation("get pending appeals", e))
    }
}
