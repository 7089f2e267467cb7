// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod appeal;
pub mod block;
pub mod mute;
pub mod report;
pub mod reputation;
pub mod restriction;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Restriction Domain
pub use restriction::{RestrictionType, UserRestriction, UserRestrictionUpdate};

// Mute Domain
pub use mute::{UserMute, UserMuteUpdate};

// Block Domain
pub use block::{UserBlock, UserBlockUpdate};

// Reputation Domain
pub use reputation::{
    ReputationLevel, ReputationStatistics, ReputationViolation, UserReputation,
    UserReputationUpdate, ViolationCategory,
};

// Appeal Domain
pub use appeal::{Appeal, AppealStatus, AppealUpdate};

// Report Domain
pub use report::{Report, ReportCategory, ReportStatus, ReportUpdate};
