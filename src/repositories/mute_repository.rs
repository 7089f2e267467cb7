// src/repositories/mute_repository.rs
//
// User mute persistence

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::mute::{UserMute, UserMuteUpdate};
use crate::error::{AppError, AppResult};
use crate::repositories::document::{DocumentCollection, DocumentRecord};

impl DocumentRecord for UserMute {
    const COLLECTION: &'static str = "user_mutes";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

pub trait MuteRepository: Send + Sync {
    fn get_all(&self) -> AppResult<Vec<UserMute>>;
    fn get_by_id(&self, id: &str) -> AppResult<Option<UserMute>>;
    fn save(&self, mute: &UserMute) -> AppResult<()>;
    fn update(&self, id: &str, changes: &UserMuteUpdate) -> AppResult<UserMute>;
    fn delete(&self, id: &str) -> AppResult<()>;
    fn get_by_user(&self, user_id: &str) -> AppResult<Vec<UserMute>>;
    fn get_by_user_and_muted_user(
        &self,
        user_id: &str,
        muted_user_id: &str,
    ) -> AppResult<Option<UserMute>>;
    fn is_user_muted(&self, user_id: &str, muted_user_id: &str) -> AppResult<bool>;
}

pub struct SqliteMuteRepository {
    collection: DocumentCollection<UserMute>,
}

impl SqliteMuteRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self {
            collection: DocumentCollection::new(pool),
        }
    }

    fn update_record(&self, id: &str, changes: &UserMuteUpdate) -> AppResult<UserMute> {
        let mut record = self.collection.get(id)?.ok_or(AppError::NotFound)?;
        record.apply(changes);
        self.collection.put(&record)?;
        Ok(record)
    }
}

impl MuteRepository for SqliteMuteRepository {
    fn get_all(&self) -> AppResult<Vec<UserMute>> {
        self.collection
            .get_all()
            .map_err(|e| AppError::operation("get all mutes", e))
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<UserMute>> {
        self.collection
            .get(id)
            .map_err(|e| AppError::operation("get mute by id", e))
    }

    fn save(&self, mute: &UserMute) -> AppResult<()> {
        self.collection
            .put(mute)
            .map_err(|e| AppError::operation("save mute", e))
    }

    fn update(&self, id: &str, changes: &UserMuteUpdate) -> AppResult<UserMute> {
        self.update_record(id, changes)
            .map_err(|e| AppError::operation("update mute", e))
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        self.collection
            .delete(id)
            .map_err(|e| AppError::operation("delete mute", e))
    }

    fn get_by_user(&self, user_id: &str) -> AppResult<Vec<UserMute>> {
        self.collection
            .find_by(&[("userId", user_id)])
            .map_err(|e| AppError::operation("get mutes by user", e))
    }

    fn get_by_user_and_muted_user(
        &self,
        user_id: &str,
        muted_user_id: &str,
    ) -> AppResult<Option<UserMute>> {
        self.collection
            .find_first(&[("userId", user_id), ("mutedUserId", muted_user_id)])
            .map_err(|e| AppError::operation("get mute by user and muted user", e))
    }

    fn is_user_muted(&self, user_id: &str, muted_user_id: &str) -> AppResult<bool> {
        let found = self
            .get_by_user_and_muted_user(user_id, muted_user_id)
            .map_err(|e| AppError::operation("check if user is muted", e))?;

        Ok(found.is_some())
    }
}
