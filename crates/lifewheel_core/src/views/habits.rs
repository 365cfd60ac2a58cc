//! Trailing day windows for habit grids.

use crate::model::habit::Habit;
use chrono::{Days, Local, NaiveDate};
use serde::Serialize;

/// Window length of the habit grid.
pub const DEFAULT_HABIT_WINDOW_DAYS: usize = 7;

/// Longest window `window_ending` will build (one leap year).
pub const MAX_HABIT_WINDOW_DAYS: usize = 366;

/// One cell of a habit grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HabitDay {
    pub date: NaiveDate,
    pub completed: bool,
}

/// Current calendar day in the local time zone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// `n` days ending today (inclusive), oldest first.
pub fn last_n_days(n: usize) -> Vec<NaiveDate> {
    window_ending(local_today(), n)
}

/// `n` days ending at `today` (inclusive), oldest first.
///
/// `n` is capped at `MAX_HABIT_WINDOW_DAYS`. Days before the calendar's
/// minimum date are skipped.
pub fn window_ending(today: NaiveDate, n: usize) -> Vec<NaiveDate> {
    (0..n.min(MAX_HABIT_WINDOW_DAYS))
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back as u64)))
        .collect()
}

/// Completion flags of `habit` for each day of `days`.
pub fn habit_row(habit: &Habit, days: &[NaiveDate]) -> Vec<HabitDay> {
    days.iter()
        .map(|&date| HabitDay {
            date,
            completed: habit.is_completed_on(date),
        })
        .collect()
}

/// Habits already completed on `day`.
pub fn habits_done_on(habits: &[Habit], day: NaiveDate) -> Vec<&Habit> {
    habits
        .iter()
        .filter(|habit| habit.is_completed_on(day))
        .collect()
}
