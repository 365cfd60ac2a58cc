//! Goal records and goal drafts.
//!
//! # Responsibility
//! - Define the SMART goal record and its bounded progress value.
//! - Convert a goal form draft into a new goal.
//!
//! # Invariants
//! - `progress` is always within `0..=100` (enforced by `Progress`).
//! - New goals start at `Progress::ZERO`.
//! - `time_bound` is display text derived from `deadline`, never parsed back.

use crate::locale::time_bound_label;
use crate::model::validation::{DraftCheck, DraftField, EntityKind, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type GoalId = Uuid;

/// Completion percentage of a goal.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Progress(u8);

impl Progress {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Returns `None` when `value > 100`.
    pub fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Progress {
    type Error = ProgressOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ProgressOutOfRange(value))
    }
}

impl From<Progress> for u8 {
    fn from(value: Progress) -> Self {
        value.0
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Rejected progress input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressOutOfRange(pub u8);

impl Display for ProgressOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "progress {} is outside 0..=100", self.0)
    }
}

impl Error for ProgressOutOfRange {}

/// SMART-structured objective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    /// Sphere name; not checked against the sphere table.
    pub sphere: String,
    pub title: String,
    pub description: String,
    pub deadline: NaiveDate,
    pub progress: Progress,
    pub specific: String,
    pub measurable: String,
    pub achievable: String,
    pub relevant: String,
    pub time_bound: String,
}

/// Goal form state before submission.
///
/// Field values are raw form strings; `deadline` uses `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalDraft {
    pub sphere: String,
    pub title: String,
    pub description: String,
    pub specific: String,
    pub measurable: String,
    pub achievable: String,
    pub relevant: String,
    pub deadline: String,
}

impl GoalDraft {
    /// Converts this draft into a new goal with `id`.
    ///
    /// # Errors
    /// - `sphere`, `title` or `deadline` is blank.
    /// - `deadline` is not a `YYYY-MM-DD` date.
    pub fn into_goal(self, id: GoalId) -> Result<Goal, ValidationError> {
        let mut check = DraftCheck::new(EntityKind::Goal);
        let sphere = check.text(DraftField::Sphere, &self.sphere);
        let title = check.text(DraftField::Title, &self.title);
        let deadline = check.date(DraftField::Deadline, &self.deadline);

        match (sphere, title, deadline) {
            (Some(sphere), Some(title), Some(deadline)) => Ok(Goal {
                id,
                sphere,
                title,
                description: self.description,
                deadline,
                progress: Progress::ZERO,
                specific: self.specific,
                measurable: self.measurable,
                achievable: self.achievable,
                relevant: self.relevant,
                time_bound: time_bound_label(deadline),
            }),
            _ => Err(check.into_error()),
        }
    }
}
