// src/repositories/block_repository.rs
//
// User block persistence

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::block::{UserBlock, UserBlockUpdate};
use crate::error::{AppError, AppResult};
use crate::repositories::document::{DocumentCollection, DocumentRecord};

impl DocumentRecord for UserBlock {
    const COLLECTION: &'static str = "user_blocks";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

pub trait BlockRepository: Send + Sync {
    fn get_all(&self) -> AppResult<Vec<UserBlock>>;
    fn get_by_id(&self, id: &str) -> AppResult<Option<UserBlock>>;
    fn save(&self, block: &UserBlock) -> AppResult<()>;
    fn update(&self, id: &str, changes: &UserBlockUpdate) -> AppResult<UserBlock>;
    fn delete(&self, id: &str) -> AppResult<()>;
    fn get_by_user(&self, user_id: &str) -> AppResult<Vec<UserBlock>>;
    fn get_by_user_and_blocked_user(
        &self,
        user_id: &str,
        blocked_user_id: &str,
    ) -> AppResult<Option<UserBlock>>;
    fn is_user_blocked(&self, user_id: &str, blocked_user_id: &str) -> AppResult<bool>;
}

pub struct SqliteBlockRepository {
    collection: DocumentCollection<UserBlock>,
}

impl SqliteBlockRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self {
            collection: DocumentCollection::new(pool),
        }
    }

    fn update_record(&self, id: &str, changes: &UserBlockUpdate) -> AppResult<UserBlock> {
        let mut record = self.collection.get(id)?.ok_or(AppError::NotFound)?;
        record.apply(changes);
        self.collection.put(&record)?;
        Ok(record)
    }
}

impl BlockRepository for SqliteBlockRepository {
    fn get_all(&self) -> AppResult<Vec<UserBlock>> {
        self.collection
            .get_all()
            .map_err(|e| AppError::operation("get all blocks", e))
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<UserBlock>> {
        self.collection
            .get(id)
            .map_err(|e| AppError::operation("get block by id", e))
    }

    fn save(&self, block: &UserBlock) -> AppResult<()> {
        self.collection
            .put(block)
            .map_err(|e| AppError::operation("save block", e))
    }

    fn update(&self, id: &str, changes: &UserBlockUpdate) -> AppResult<UserBlock> {
        self.update_record(id, changes)
            .map_err(|e| AppError::operation("update block", e))
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        self.collection
            .delete(id)
            .map_err(|e| AppError::operation("delete block", e))
    }

    fn get_by_user(&self, user_id: &str) -> AppResult<Vec<UserBlock>> {
        self.collection
            .find_by(&[("userId", user_id)])
            .map_err(|e| AppError::operation("get blocks by user", e))
    }

    fn get_by_user_and_blocked_user(
        &self,
        user_id: &str,
        blocked_user_id: &str,
    ) -> AppResult<Option<UserBlock>> {
        self.collection
            .find_first(&[("userId", user_id), ("blockedUserId", blocked_user_id)])
            .map_err(|e| AppError::operation("get block by user and blocked user", e))
    }

    fn is_user_blocked(&self, user_id: &str, blocked_user_id: &str) -> AppResult<bool> {
        let found = self
            .get_by_user_and_blocked_user(user_id, blocked_user_id)
            .map_err(|e| AppError::operation("check if user is blocked", e))?;

        Ok(found.is_some())
    }
}
