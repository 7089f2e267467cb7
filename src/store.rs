// src/store.rs
//
// Store wiring
//
// Bundles the six repositories behind their trait objects. The pool is
// constructed and owned by the embedding application; the store only
// borrows a shared handle.

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::repositories::{
    AppealRepository, BlockRepository, MuteRepository, ReportRepository, ReputationRepository,
    RestrictionRepository, SqliteAppealRepository, SqliteBlockRepository, SqliteMuteRepository,
    SqliteReportRepository, SqliteReputationRepository, SqliteRestrictionRepository,
};

/// All moderation repositories over one shared connection pool.
/// Fields are Arc-wrapped for thread-safe sharing across callers.
pub struct ModerationStore {
    pub restrictions: Arc<dyn RestrictionRepository>,
    pub mutes: Arc<dyn MuteRepository>,
    pub blocks: Arc<dyn BlockRepository>,
    pub reputations: Arc<dyn ReputationRepository>,
    pub appeals: Arc<dyn AppealRepository>,
    pub reports: Arc<dyn ReportRepository>,
}

impl ModerationStore {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self {
            restrictions: Arc::new(SqliteRestrictionRepository::new(pool.clone())),
            mutes: Arc::new(SqliteMuteRepository::new(pool.clone())),
            blocks: Arc::new(SqliteBlockRepository::new(pool.clone())),
            reputations: Arc::new(SqliteReputationRepository::new(pool.clone())),
            appeals: Arc::new(SqliteAppealRepository::new(pool.clone())),
            reports: Arc::new(SqliteReportRepository::new(pool)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool_at, get_connection, initialize_database};
    use crate::domain::{RestrictionType, UserRestriction};

    #[test]
    fn test_store_wires_repositories_over_one_pool() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_connection_pool_at(&dir.path().join("modhub.db")).unwrap();
        let conn = get_connection(&pool).unwrap();
        initialize_database(&conn).unwrap();

        let store = ModerationStore::new(Arc::new(pool));

        let restriction = UserRestriction::new(
            "u1".to_string(),
            "u2".to_string(),
            RestrictionType::Interaction,
        );
        store.restrictions.save(&restriction).unwrap();

        let loaded = store.restrictions.get_by_id(&restriction.id).unwrap().unwrap();
        assert_eq!(loaded, restriction);

        // The other repositories share the same initialized database
        assert!(store.mutes.get_all().unwrap().is_empty());
        assert!(store.blocks.get_all().unwrap().is_empty());
        assert!(store.appeals.get_all().unwrap().is_empty());
        assert!(store.reports.get_all().unwrap().is_empty());
        assert_eq!(store.reputations.get_statistics().unwrap().total_users, 0);
    }
}
