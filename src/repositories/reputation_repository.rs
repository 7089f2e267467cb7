// src/repositories/reputation_repository.rs
//
// User reputation + violation persistence
//
// Two collections behind one repository: reputation documents (one per user
// is the intent) and an append-only violations collection. The statistics
// method aggregates in memory over a full reputation scan.

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::reputation::{
    ReputationLevel, ReputationStatistics, ReputationViolation, UserReputation,
    UserReputationUpdate, ViolationCategory,
};
use crate::error::{AppError, AppResult};
use crate::repositories::document::{DocumentCollection, DocumentRecord};

impl DocumentRecord for UserReputation {
    const COLLECTION: &'static str = "user_reputations";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl DocumentRecord for ReputationViolation {
    const COLLECTION: &'static str = "reputation_violations";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

pub trait ReputationRepository: Send + Sync {
    fn get_all(&self) -> AppResult<Vec<UserReputation>>;
    fn get_by_id(&self, id: &str) -> AppResult<Option<UserReputation>>;
    fn save(&self, reputation: &UserReputation) -> AppResult<()>;
    fn update(&self, id: &str, changes: &UserReputationUpdate) -> AppResult<UserReputation>;
    fn delete(&self, id: &str) -> AppResult<()>;
    fn get_by_user(&self, user_id: &str) -> AppResult<Option<UserReputation>>;
    fn get_statistics(&self) -> AppResult<ReputationStatistics>;

    fn save_violation(&self, violation: &ReputationViolation) -> AppResult<()>;
    fn get_violations_by_user(&self, user_id: &str) -> AppResult<Vec<ReputationViolation>>;
    fn get_violations_by_category(
        &self,
        category: ViolationCategory,
    ) -> AppResult<Vec<ReputationViolation>>;
}

pub struct SqliteReputationRepository {
    reputations: DocumentCollection<UserReputation>,
    violations: DocumentCollection<ReputationViolation>,
}

impl SqliteReputationRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self {
            reputations: DocumentCollection::new(pool.clone()),
            violations: DocumentCollection::new(pool),
        }
    }

    fn update_record(&self, id: &str, changes: &UserReputationUpdate) -> AppResult<UserReputation> {
        let mut record = self.reputations.get(id)?.ok_or(AppError::NotFound)?;
        record.apply(changes);
        self.reputations.put(&record)?;
        Ok(record)
    }

    fn compute_statistics(&self) -> AppResult<ReputationStatistics> {
        let reputations = self.reputations.get_all()?;

        let count_level = |level: ReputationLevel| {
            reputations.iter().filter(|r| r.level == level).count()
        };

        let total_users = reputations.len();
        let average_score = if total_users == 0 {
            0.0
        } else {
            reputations.iter().map(|r| r.score).sum::<f64>() / total_users as f64
        };

        Ok(ReputationStatistics {
            total_users,
            excellent_count: count_level(ReputationLevel::Excellent),
            good_count: count_level(ReputationLevel::Good),
            neutral_count: count_level(ReputationLevel::Neutral),
            poor_count: count_level(ReputationLevel::Poor),
            restricted_count: count_level(ReputationLevel::Restricted),
            average_score,
        })
    }
}

impl ReputationRepository for SqliteReputationRepository {
    fn get_all(&self) -> AppResult<Vec<UserReputation>> {
        self.reputations
            .get_all()
            .map_err(|e| AppError::operation("get all reputations", e))
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<UserReputation>> {
        self.reputations
            .get(id)
            .map_err(|e| AppError::operation("get reputation by id", e))
    }

    fn save(&self, reputation: &UserReputation) -> AppResult<()> {
        self.reputations
            .put(reputation)
            .map_err(|e| AppError::operation("save reputation", e))
    }

    fn update(&self, id: &str, changes: &UserReputationUpdate) -> AppResult<UserReputation> {
        self.update_record(id, changes)
            .map_err(|e| AppError::operation("update reputation", e))
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        self.reputations
            .delete(id)
            .map_err(|e| AppError::operation("delete reputation", e))
    }

    fn get_by_user(&self, user_id: &str) -> AppResult<Option<UserReputation>> {
        self.reputations
            .find_first(&[("userId", user_id)])
            .map_err(|e| AppError::operation("get reputation by user", e))
    }

    fn get_statistics(&self) -> AppResult<ReputationStatistics> {
        self.compute_statistics()
            .map_err(|e| AppError::operation("get reputation statistics", e))
    }

    fn save_violation(&self, violation: &ReputationViolation) -> AppResult<()> {
        self.violations
            .put(violation)
            .map_err(|e| AppError::operation("save violation", e))
    }

    fn get_violations_by_user(&self, user_id: &str) -> AppResult<Vec<ReputationViolation>> {
        self.violations
            .find_by(&[("userId", user_id)])
            .map_err(|e| AppError::operation("get violations by user", e))
    }

    fn get_violations_by_category(
        &self,
        category: ViolationCategory,
    ) -> AppResult<Vec<ReputationViolation>> {
        self.violations
            .find_by(&[("category", &category.to_string())])
            .map_err(|e| AppError::operation("get violations by category", e))
    }
}
