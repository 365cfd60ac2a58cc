//! In-memory dashboard store.
//!
//! # Responsibility
//! - Own goal/event/habit collections and the pending form drafts.
//! - Apply mutations and report each outcome to a `Notifier`.
//!
//! # Invariants
//! - The store is the only writer of its collections (`&mut self`).
//! - A failed mutation leaves collections and drafts untouched.
//! - Records are appended in submission order and never removed.
//! - Log lines carry IDs and field names only, never user text.

mod seed;

use crate::locale::format_date;
use crate::model::event::{Event, EventDraft, EventId};
use crate::model::goal::{Goal, GoalDraft, GoalId, Progress};
use crate::model::habit::{Habit, HabitDraft, HabitId};
use crate::model::new_record_id;
use crate::model::sphere::find_sphere;
use crate::model::validation::{EntityKind, ValidationError};
use crate::notify::{LogNotifier, Notification, Notifier};
use crate::views::agenda::{self, DayGroup};
use crate::views::progress::{self, BalanceWheel, SphereProgress};
use chrono::NaiveDate;
use log::{debug, info, warn};

const ERROR_TITLE: &str = "Ошибка";

/// Single-writer owner of all dashboard state.
pub struct LifeStore<N: Notifier = LogNotifier> {
    goals: Vec<Goal>,
    events: Vec<Event>,
    habits: Vec<Habit>,
    goal_draft: GoalDraft,
    event_draft: EventDraft,
    habit_draft: HabitDraft,
    notifier: N,
}

impl Default for LifeStore<LogNotifier> {
    fn default() -> Self {
        Self::new(LogNotifier)
    }
}

impl<N: Notifier> LifeStore<N> {
    /// Creates an empty store.
    pub fn new(notifier: N) -> Self {
        Self {
            goals: Vec::new(),
            events: Vec::new(),
            habits: Vec::new(),
            goal_draft: GoalDraft::default(),
            event_draft: EventDraft::default(),
            habit_draft: HabitDraft::default(),
            notifier,
        }
    }

    /// Creates a store holding the starter goal, events and habit.
    pub fn with_seed_data(notifier: N) -> Self {
        let seed = seed::seed_records();
        let mut store = Self::new(notifier);
        store.goals = seed.goals;
        store.events = seed.events;
        store.habits = seed.habits;
        info!(
            "event=store_seed module=store status=ok goals={} events={} habits={}",
            store.goals.len(),
            store.events.len(),
            store.habits.len()
        );
        store
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn habit(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn goal_draft(&self) -> &GoalDraft {
        &self.goal_draft
    }

    /// Form binding for the goal dialog.
    pub fn goal_draft_mut(&mut self) -> &mut GoalDraft {
        &mut self.goal_draft
    }

    pub fn event_draft(&self) -> &EventDraft {
        &self.event_draft
    }

    pub fn event_draft_mut(&mut self) -> &mut EventDraft {
        &mut self.event_draft
    }

    pub fn habit_draft(&self) -> &HabitDraft {
        &self.habit_draft
    }

    pub fn habit_draft_mut(&mut self) -> &mut HabitDraft {
        &mut self.habit_draft
    }

    /// Adds a goal from `draft` with zero progress.
    ///
    /// Stored drafts are left alone; use [`Self::submit_goal_draft`] to
    /// submit and clear the goal form. On failure nothing changes and a
    /// destructive notification is sent.
    ///
    /// # Errors
    /// - `sphere`, `title` or `deadline` is missing or unreadable.
    pub fn add_goal(&mut self, draft: GoalDraft) -> Result<GoalId, ValidationError> {
        let goal = match draft.into_goal(new_record_id()) {
            Ok(goal) => goal,
            Err(err) => return Err(self.reject(err)),
        };

        let goal_id = goal.id;
        info!(
            "event=goal_add module=store status=ok goal_id={} known_sphere={}",
            goal_id,
            find_sphere(&goal.sphere).is_some()
        );
        self.notifier.notify(Notification::success(
            "Цель добавлена!",
            format!("Цель \"{}\" успешно создана", goal.title),
        ));
        self.goals.push(goal);
        Ok(goal_id)
    }

    /// Submits the stored goal draft; see [`Self::add_goal`].
    ///
    /// The stored draft is cleared only when the goal was added.
    pub fn submit_goal_draft(&mut self) -> Result<GoalId, ValidationError> {
        let id = self.add_goal(self.goal_draft.clone())?;
        self.goal_draft = GoalDraft::default();
        Ok(id)
    }

    /// Adds an event from `draft`.
    ///
    /// # Errors
    /// - Any of `title`, `sphere`, `date`, `time` is missing, or `date` is
    ///   unreadable.
    pub fn add_event(&mut self, draft: EventDraft) -> Result<EventId, ValidationError> {
        let event = match draft.into_event(new_record_id()) {
            Ok(event) => event,
            Err(err) => return Err(self.reject(err)),
        };

        let event_id = event.id;
        info!(
            "event=event_add module=store status=ok event_id={} date={} linked_goal={}",
            event_id,
            event.date,
            event.linked_goal_id.is_some()
        );
        self.notifier.notify(Notification::success(
            "Событие добавлено!",
            format!("\"{}\" на {}", event.title, format_date(event.date)),
        ));
        self.events.push(event);
        Ok(event_id)
    }

    /// Submits the stored event draft; see [`Self::add_event`].
    pub fn submit_event_draft(&mut self) -> Result<EventId, ValidationError> {
        let id = self.add_event(self.event_draft.clone())?;
        self.event_draft = EventDraft::default();
        Ok(id)
    }

    /// Adds a habit from `draft` with no completed days.
    ///
    /// # Errors
    /// - `sphere` or `title` is missing.
    pub fn add_habit(&mut self, draft: HabitDraft) -> Result<HabitId, ValidationError> {
        let habit = match draft.into_habit(new_record_id()) {
            Ok(habit) => habit,
            Err(err) => return Err(self.reject(err)),
        };

        let habit_id = habit.id;
        info!(
            "event=habit_add module=store status=ok habit_id={}",
            habit_id
        );
        self.notifier.notify(Notification::success(
            "Привычка добавлена!",
            format!("Привычка \"{}\" создана", habit.title),
        ));
        self.habits.push(habit);
        Ok(habit_id)
    }

    /// Submits the stored habit draft; see [`Self::add_habit`].
    pub fn submit_habit_draft(&mut self) -> Result<HabitId, ValidationError> {
        let id = self.add_habit(self.habit_draft.clone())?;
        self.habit_draft = HabitDraft::default();
        Ok(id)
    }

    /// Sets the progress of `goal_id`.
    ///
    /// Returns `false` (and changes nothing) when the goal is unknown.
    pub fn update_goal_progress(&mut self, goal_id: GoalId, progress: Progress) -> bool {
        let Some(goal) = self.goals.iter_mut().find(|goal| goal.id == goal_id) else {
            debug!(
                "event=goal_progress_update module=store status=noop goal_id={} reason=unknown_goal",
                goal_id
            );
            return false;
        };

        goal.progress = progress;
        info!(
            "event=goal_progress_update module=store status=ok goal_id={} progress={}",
            goal_id,
            progress.value()
        );
        self.notifier.notify(Notification::success(
            "Прогресс обновлен",
            format!("Прогресс цели установлен на {progress}"),
        ));
        true
    }

    /// Flips completion of `day` for `habit_id`.
    ///
    /// Returns the new completion state, or `None` when the habit is unknown.
    pub fn toggle_habit_completion(&mut self, habit_id: HabitId, day: NaiveDate) -> Option<bool> {
        let Some(habit) = self.habits.iter_mut().find(|habit| habit.id == habit_id) else {
            debug!(
                "event=habit_toggle module=store status=noop habit_id={} reason=unknown_habit",
                habit_id
            );
            return None;
        };

        let completed = habit.toggle(day);
        info!(
            "event=habit_toggle module=store status=ok habit_id={} day={} completed={}",
            habit_id, day, completed
        );
        Some(completed)
    }

    /// See [`progress::sphere_progress`].
    pub fn sphere_progress(&self, sphere: &str) -> u8 {
        progress::sphere_progress(&self.goals, sphere)
    }

    /// See [`progress::sphere_overview`].
    pub fn sphere_overview(&self) -> Vec<SphereProgress> {
        progress::sphere_overview(&self.goals)
    }

    /// See [`progress::balance_wheel`].
    pub fn balance_wheel(&self) -> BalanceWheel {
        progress::balance_wheel(&self.goals)
    }

    /// See [`agenda::grouped_by_date`].
    pub fn events_by_date(&self) -> Vec<DayGroup<'_>> {
        agenda::grouped_by_date(&self.events)
    }

    /// See [`agenda::events_on_date`].
    pub fn events_on_date(&self, date: Option<NaiveDate>) -> Vec<&Event> {
        agenda::events_on_date(&self.events, date)
    }

    /// Goal linked from `event`, if any.
    pub fn linked_goal(&self, event: &Event) -> Option<&Goal> {
        agenda::linked_goal(&self.goals, event)
    }

    fn reject(&mut self, err: ValidationError) -> ValidationError {
        let fields = err
            .fields()
            .iter()
            .map(|field| field.as_str())
            .collect::<Vec<_>>()
            .join(",");
        warn!(
            "event={}_add module=store status=error error_code=validation fields={}",
            err.entity.as_str(),
            fields
        );
        self.notifier
            .notify(Notification::failure(ERROR_TITLE, rejection_message(err.entity)));
        err
    }
}

fn rejection_message(entity: EntityKind) -> &'static str {
    match entity {
        EntityKind::Goal => "Заполните обязательные поля: сфера, название и срок",
        EntityKind::Event | EntityKind::Habit => "Заполните все поля",
    }
}
