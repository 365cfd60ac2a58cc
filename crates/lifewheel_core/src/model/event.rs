//! Scheduled event records and event drafts.
//!
//! # Invariants
//! - `date` is a calendar day; `time` is a separate `HH:MM` display string.
//! - Events are immutable after creation.

use crate::model::goal::GoalId;
use crate::model::validation::{
    optional_text, DraftCheck, DraftField, EntityKind, ValidationError,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type EventId = Uuid;

/// Dated, timed occurrence, optionally linked to a goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub sphere: String,
    pub date: NaiveDate,
    /// `HH:MM`; kept as entered and never used for ordering.
    pub time: String,
    pub location: Option<String>,
    /// Whole rubles.
    pub cost: Option<u64>,
    /// Not checked against existing goals.
    pub linked_goal_id: Option<GoalId>,
}

/// Event form state before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub sphere: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub time: String,
    pub location: String,
    pub cost: Option<u64>,
    pub linked_goal_id: Option<GoalId>,
}

impl EventDraft {
    /// Converts this draft into a new event with `id`.
    ///
    /// # Errors
    /// - Any of `title`, `sphere`, `date`, `time` is blank.
    /// - `date` is not a `YYYY-MM-DD` date.
    pub fn into_event(self, id: EventId) -> Result<Event, ValidationError> {
        let mut check = DraftCheck::new(EntityKind::Event);
        let title = check.text(DraftField::Title, &self.title);
        let sphere = check.text(DraftField::Sphere, &self.sphere);
        let date = check.date(DraftField::Date, &self.date);
        let time = check.text(DraftField::Time, &self.time);

        match (title, sphere, date, time) {
            (Some(title), Some(sphere), Some(date), Some(time)) => Ok(Event {
                id,
                title,
                sphere,
                date,
                time,
                location: optional_text(&self.location),
                cost: self.cost,
                linked_goal_id: self.linked_goal_id,
            }),
            _ => Err(check.into_error()),
        }
    }
}
