//! Domain model for the life balance dashboard.
//!
//! # Responsibility
//! - Define goal/event/habit records and the fixed sphere table.
//! - Define form drafts and their conversion into validated records.
//!
//! # Invariants
//! - Every record is identified by a stable, process-unique ID.
//! - Calendar days (`NaiveDate`) and time-of-day strings are stored separately.
//! - Records are never deleted.

pub mod event;
pub mod goal;
pub mod habit;
pub mod sphere;
pub mod validation;

use uuid::Uuid;

/// Generates a fresh time-ordered record ID.
///
/// UUID v7 keeps creation order visible in the ID while uniqueness remains
/// the only contract callers may rely on.
pub(crate) fn new_record_id() -> Uuid {
    Uuid::now_v7()
}
