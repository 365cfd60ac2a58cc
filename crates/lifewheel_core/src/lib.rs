//! Core state and derived views for the life balance dashboard.
//! This crate owns every record invariant; presentation layers only read.

pub mod locale;
pub mod logging;
pub mod model;
pub mod notify;
pub mod store;
pub mod views;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::event::{Event, EventDraft, EventId};
pub use model::goal::{Goal, GoalDraft, GoalId, Progress, ProgressOutOfRange};
pub use model::habit::{Habit, HabitDraft, HabitId};
pub use model::sphere::{find_sphere, Sphere, SPHERES};
pub use model::validation::{DraftField, EntityKind, FieldIssue, ValidationError};
pub use notify::{LogNotifier, Notification, Notifier, RecordingNotifier, Severity};
pub use store::LifeStore;
pub use views::agenda::{events_on_date, grouped_by_date, linked_goal, DayGroup};
pub use views::habits::{
    habit_row, habits_done_on, last_n_days, local_today, window_ending, HabitDay,
    DEFAULT_HABIT_WINDOW_DAYS, MAX_HABIT_WINDOW_DAYS,
};
pub use views::progress::{
    balance_wheel, sphere_overview, sphere_progress, BalanceWheel, SphereProgress,
    WHEEL_SPHERE_COUNT,
};

/// Minimal health-check API for wiring probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
