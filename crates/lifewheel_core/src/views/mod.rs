//! Read-only views derived from store collections.
//!
//! # Responsibility
//! - Compute aggregates and calendar views from borrowed record slices.
//!
//! # Invariants
//! - Derivations never mutate their inputs and keep no cached state.
//! - Day grouping/matching uses calendar-day equality only.

pub mod agenda;
pub mod habits;
pub mod progress;
