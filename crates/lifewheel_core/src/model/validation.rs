//! Draft validation errors.
//!
//! # Responsibility
//! - Describe why a form draft could not become a record.
//! - Share presence/date checks between goal, event and habit drafts.
//!
//! # Invariants
//! - A `ValidationError` always carries at least one issue.
//! - Only presence (and readable dates) is checked; content is not judged.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wire format of calendar-day inputs coming from date pickers.
pub const DRAFT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Record kind a draft is meant to become.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Goal,
    Event,
    Habit,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Goal => "goal",
            Self::Event => "event",
            Self::Habit => "habit",
        }
    }
}

/// Required draft fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    Sphere,
    Title,
    Deadline,
    Date,
    Time,
}

impl DraftField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Title => "title",
            Self::Deadline => "deadline",
            Self::Date => "date",
            Self::Time => "time",
        }
    }
}

/// One problem found in a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    /// Field is empty or whitespace-only.
    Missing(DraftField),
    /// Field holds text that is not a `YYYY-MM-DD` calendar day.
    UnreadableDate { field: DraftField, value: String },
}

impl FieldIssue {
    pub fn field(&self) -> DraftField {
        match self {
            Self::Missing(field) => *field,
            Self::UnreadableDate { field, .. } => *field,
        }
    }
}

impl Display for FieldIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(field) => write!(f, "missing {}", field.as_str()),
            Self::UnreadableDate { field, value } => {
                write!(f, "{} `{value}` is not a YYYY-MM-DD date", field.as_str())
            }
        }
    }
}

/// The single domain error: a draft is not complete enough to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub entity: EntityKind,
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Returns whether `field` has any issue.
    pub fn concerns(&self, field: DraftField) -> bool {
        self.issues.iter().any(|issue| issue.field() == field)
    }

    /// Returns the fields with issues in report order.
    pub fn fields(&self) -> Vec<DraftField> {
        self.issues.iter().map(FieldIssue::field).collect()
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {} draft: ", self.entity.as_str())?;
        for (index, issue) in self.issues.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl Error for ValidationError {}

/// Collects field issues while a draft is being checked.
///
/// A helper records an issue exactly when it returns `None`, so a draft whose
/// required values are all `Some` has no issues.
#[derive(Debug)]
pub(crate) struct DraftCheck {
    entity: EntityKind,
    issues: Vec<FieldIssue>,
}

impl DraftCheck {
    pub(crate) fn new(entity: EntityKind) -> Self {
        Self {
            entity,
            issues: Vec::new(),
        }
    }

    /// Returns the trimmed value, or records it as missing.
    pub(crate) fn text(&mut self, field: DraftField, value: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.issues.push(FieldIssue::Missing(field));
            return None;
        }
        Some(trimmed.to_string())
    }

    /// Parses a required `YYYY-MM-DD` value.
    pub(crate) fn date(&mut self, field: DraftField, value: &str) -> Option<NaiveDate> {
        let trimmed = self.text(field, value)?;
        match NaiveDate::parse_from_str(&trimmed, DRAFT_DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                self.issues.push(FieldIssue::UnreadableDate {
                    field,
                    value: trimmed,
                });
                None
            }
        }
    }

    /// Builds the error for a draft where at least one helper returned `None`.
    pub(crate) fn into_error(self) -> ValidationError {
        ValidationError {
            entity: self.entity,
            issues: self.issues,
        }
    }
}

/// Maps blank optional text to `None`.
pub(crate) fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
