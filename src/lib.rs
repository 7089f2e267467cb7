// src/lib.rs
// ModHub - User-moderation data store
//
// Architecture:
// - Repositories are dumb data mappers over one document collection each
// - One generic document helper, instantiated per collection
// - Explicit: no implicit behavior, no hidden connections
// - Absence is `Ok(None)`; every other failure is logged and wrapped

pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod store;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    // Appeal
    Appeal,
    AppealStatus,
    AppealUpdate,
    // Report
    Report,
    ReportCategory,
    ReportStatus,
    ReportUpdate,
    // Reputation
    ReputationLevel,
    ReputationStatistics,
    ReputationViolation,
    RestrictionType,
    // Block
    UserBlock,
    UserBlockUpdate,
    // Mute
    UserMute,
    UserMuteUpdate,
    UserReputation,
    UserReputationUpdate,
    // Restriction
    UserRestriction,
    UserRestrictionUpdate,
    ViolationCategory,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{
    create_connection_pool, create_connection_pool_at, initialize_database, ConnectionPool,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    AppealRepository,
    BlockRepository,
    DocumentCollection,
    DocumentRecord,
    MuteRepository,
    ReportRepository,
    ReputationRepository,
    RestrictionRepository,
    SqliteAppealRepository,
    SqliteBlockRepository,
    SqliteMuteRepository,
    SqliteReportRepository,
    SqliteReputationRepository,
    SqliteRestrictionRepository,
};

// ============================================================================
// PUBLIC API - Store Wiring
// ============================================================================

pub use store::ModerationStore;
