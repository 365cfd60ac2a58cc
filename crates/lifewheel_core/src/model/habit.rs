//! Habit records and habit drafts.
//!
//! # Invariants
//! - `completed_dates` is a set of calendar days; a day appears at most once.
//! - New habits start with no completed days.

use crate::model::validation::{DraftCheck, DraftField, EntityKind, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

pub type HabitId = Uuid;

/// Recurring activity tracked by completed calendar days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub sphere: String,
    pub title: String,
    pub completed_dates: BTreeSet<NaiveDate>,
}

impl Habit {
    /// Returns whether `day` is marked as done.
    pub fn is_completed_on(&self, day: NaiveDate) -> bool {
        self.completed_dates.contains(&day)
    }

    /// Number of distinct completed days.
    pub fn completed_count(&self) -> usize {
        self.completed_dates.len()
    }

    /// Flips completion of `day` and returns the new state.
    pub fn toggle(&mut self, day: NaiveDate) -> bool {
        if self.completed_dates.remove(&day) {
            false
        } else {
            self.completed_dates.insert(day);
            true
        }
    }
}

/// Habit form state before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitDraft {
    pub sphere: String,
    pub title: String,
}

impl HabitDraft {
    /// Converts this draft into a new habit with `id`.
    ///
    /// # Errors
    /// - `sphere` or `title` is blank.
    pub fn into_habit(self, id: HabitId) -> Result<Habit, ValidationError> {
        let mut check = DraftCheck::new(EntityKind::Habit);
        let sphere = check.text(DraftField::Sphere, &self.sphere);
        let title = check.text(DraftField::Title, &self.title);

        match (sphere, title) {
            (Some(sphere), Some(title)) => Ok(Habit {
                id,
                sphere,
                title,
                completed_dates: BTreeSet::new(),
            }),
            _ => Err(check.into_error()),
        }
    }
}
