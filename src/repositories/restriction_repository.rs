// src/repositories/restriction_repository.rs
//
// User restriction persistence

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::restriction::{UserRestriction, UserRestrictionUpdate};
use crate::error::{AppError, AppResult};
use crate::repositories::document::{DocumentCollection, DocumentRecord};

impl DocumentRecord for UserRestriction {
    const COLLECTION: &'static str = "user_restrictions";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

pub trait RestrictionRepository: Send + Sync {
    fn get_all(&self) -> AppResult<Vec<UserRestriction>>;
    fn get_by_id(&self, id: &str) -> AppResult<Option<UserRestriction>>;
    fn save(&self, restriction: &UserRestriction) -> AppResult<()>;
    fn update(&self, id: &str, changes: &UserRestrictionUpdate) -> AppResult<UserRestriction>;
    fn delete(&self, id: &str) -> AppResult<()>;
    fn get_by_user(&self, user_id: &str) -> AppResult<Vec<UserRestriction>>;
    fn get_by_restricted_user(&self, restricted_user_id: &str) -> AppResult<Vec<UserRestriction>>;
    fn get_by_user_and_restricted_user(
        &self,
        user_id: &str,
        restricted_user_id: &str,
    ) -> AppResult<Option<UserRestriction>>;
    fn is_user_restricted(&self, user_id: &str, restricted_user_id: &str) -> AppResult<bool>;
}

pub struct SqliteRestrictionRepository {
    collection: DocumentCollection<UserRestriction>,
}

impl SqliteRestrictionRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self {
            collection: DocumentCollection::new(pool),
        }
    }

    fn update_record(
        &self,
        id: &str,
        changes: &UserRestrictionUpdate,
    ) -> AppResult<UserRestriction> {
        let mut record = self.collection.get(id)?.ok_or(AppError::NotFound)?;
        record.apply(changes);
        self.collection.put(&record)?;
        Ok(record)
    }
}

impl RestrictionRepository for SqliteRestrictionRepository {
    fn get_all(&self) -> AppResult<Vec<UserRestriction>> {
        self.collection
            .get_all()
            .map_err(|e| AppError::operation("get all restrictions", e))
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<UserRestriction>> {
        self.collection
            .get(id)
            .map_err(|e| AppError::operation("get restriction by id", e))
    }

    fn save(&self, restriction: &UserRestriction) -> AppResult<()> {
        self.collection
            .put(restriction)
            .map_err(|e| AppError::operation("save restriction", e))
    }

    fn update(&self, id: &str, changes: &UserRestrictionUpdate) -> AppResult<UserRestriction> {
        self.update_record(id, changes)
            .map_err(|e| AppError::operation("update restriction", e))
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        self.collection
            .delete(id)
            .map_err(|e| AppError::operation("delete restriction", e))
    }

    fn get_by_user(&self, user_id: &str) -> AppResult<Vec<UserRestriction>> {
        self.collection
            .find_by(&[("userId", user_id)])
            .map_err(|e| AppError::operation("get restrictions by user", e))
    }

    fn get_by_restricted_user(&self, restricted_user_id: &str) -> AppResult<Vec<UserRestriction>> {
        self.collection
            .find_by(&[("restrictedUserId", restricted_user_id)])
            .map_err(|e| AppError::operation("get restrictions by restricted user", e))
    }

    fn get_by_user_and_restricted_user(
        &self,
        user_id: &str,
        restricted_user_id: &str,
    ) -> AppResult<Option<UserRestriction>> {
        self.collection
            .find_first(&[("userId", user_id), ("restrictedUserId", restricted_user_id)])
            .map_err(|e| AppError::operation("get restriction by user and restricted user", e))
    }

    fn is_user_restricted(&self, user_id: &str, restricted_user_id: &str) -> AppResult<bool> {
        // Defined as "does the composite lookup return a result". The inner
        // wrapped message deliberately becomes the cause of this wrap.
        let found = self
            .get_by_user_and_restricted_user(user_id, restricted_user_id)
            .map_err(|e| AppError::operation("check if user is restricted", e))?;

        Ok(found.is_some())
    }
}
