// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - Every public method failure is logged and rewrapped as
//   "Failed to <action>: <cause>"

pub mod document;

pub mod appeal_repository;
pub mod block_repository;
pub mod mute_repository;
pub mod report_repository;
pub mod reputation_repository;
pub mod restriction_repository;


pub use document::{DocumentCollection, DocumentRecord};

pub use restriction_repository::{RestrictionRepository, SqliteRestrictionRepository};
pub use mute_repository::{MuteRepository, SqliteMuteRepository};
pub use block_repository::{BlockRepository, SqliteBlockRepository};
pub use reputation_repository::{ReputationRepository, SqliteReputationRepository};
pub use appeal_repository::{AppealRepository, SqliteAppealRepository};
pub use report_repository::{ReportRepository, SqliteReportRepository};
