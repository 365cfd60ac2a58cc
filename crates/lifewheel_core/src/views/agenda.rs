//! Calendar views over events.

use crate::model::event::Event;
use crate::model::goal::Goal;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Events that fall on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup<'a> {
    pub date: NaiveDate,
    /// Insertion order.
    pub events: Vec<&'a Event>,
}

/// Groups events by day, days ascending, events in insertion order.
pub fn grouped_by_date(events: &[Event]) -> Vec<DayGroup<'_>> {
    let mut by_day: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
    for event in events {
        by_day.entry(event.date).or_default().push(event);
    }

    by_day
        .into_iter()
        .map(|(date, events)| DayGroup { date, events })
        .collect()
}

/// Events on `date` in insertion order; empty when `date` is `None`.
pub fn events_on_date(events: &[Event], date: Option<NaiveDate>) -> Vec<&Event> {
    let Some(date) = date else {
        return Vec::new();
    };
    events.iter().filter(|event| event.date == date).collect()
}

/// Resolves the goal an event links to, if it still exists.
pub fn linked_goal<'a>(goals: &'a [Goal], event: &Event) -> Option<&'a Goal> {
    let goal_id = event.linked_goal_id?;
    goals.iter().find(|goal| goal.id == goal_id)
}
