//! Records a fresh dashboard starts with.

use crate::model::event::Event;
use crate::model::goal::{Goal, Progress};
use crate::model::habit::Habit;
use crate::model::new_record_id;
use chrono::NaiveDate;

/// Seed collections in insertion order.
pub(crate) struct SeedRecords {
    pub goals: Vec<Goal>,
    pub events: Vec<Event>,
    pub habits: Vec<Habit>,
}

fn seed_day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(crate) fn seed_records() -> SeedRecords {
    let dental = Goal {
        id: new_record_id(),
        sphere: "Здоровье".to_string(),
        title: "Вылечить зубы к НГ".to_string(),
        description: "Записаться к стоматологу и пройти курс лечения".to_string(),
        deadline: seed_day(2024, 12, 31),
        progress: Progress::new(30).unwrap_or_default(),
        specific: "Вылечить 3 зуба".to_string(),
        measurable: "Посещения стоматолога".to_string(),
        achievable: "Найден хороший врач".to_string(),
        relevant: "Важно для здоровья".to_string(),
        time_bound: "До конца декабря 2024".to_string(),
    };

    let events = vec![
        Event {
            id: new_record_id(),
            title: "Приём у стоматолога".to_string(),
            sphere: "Здоровье".to_string(),
            date: seed_day(2024, 12, 20),
            time: "18:00".to_string(),
            location: Some("Клиника \"Дентал\", каб. 305".to_string()),
            cost: Some(5000),
            linked_goal_id: Some(dental.id),
        },
        Event {
            id: new_record_id(),
            title: "Перевести на ипотеку".to_string(),
            sphere: "Финансы".to_string(),
            date: seed_day(2024, 12, 20),
            time: "12:00".to_string(),
            location: None,
            cost: Some(20000),
            linked_goal_id: None,
        },
    ];

    let running = Habit {
        id: new_record_id(),
        sphere: "Спорт".to_string(),
        title: "Утренняя пробежка".to_string(),
        completed_dates: [
            seed_day(2024, 12, 15),
            seed_day(2024, 12, 14),
            seed_day(2024, 12, 13),
        ]
        .into_iter()
        .collect(),
    };

    SeedRecords {
        goals: vec![dental],
        events,
        habits: vec![running],
    }
}

#[cfg(test)]
mod tests {
    use super::{seed_day, seed_records};
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn seed_day_literals_are_real_dates() {
        assert_eq!(seed_day(2024, 12, 31), day(2024, 12, 31));
        // A typo would fall back to the epoch; make sure none of the seed dates do.
        let seed = seed_records();
        let epoch = NaiveDate::default();
        assert!(seed.goals.iter().all(|goal| goal.deadline != epoch));
        assert!(seed.events.iter().all(|event| event.date != epoch));
        assert!(seed
            .habits
            .iter()
            .all(|habit| !habit.completed_dates.contains(&epoch)));
    }

    #[test]
    fn seed_values_match_starter_dashboard() {
        let seed = seed_records();

        let goal = &seed.goals[0];
        assert_eq!(goal.deadline, day(2024, 12, 31));
        assert_eq!(goal.progress.value(), 30);

        let dates = seed.events.iter().map(|e| e.date).collect::<Vec<_>>();
        assert_eq!(dates, vec![day(2024, 12, 20), day(2024, 12, 20)]);
        assert_eq!(seed.events[0].linked_goal_id, Some(goal.id));
        assert_eq!(seed.events[1].cost, Some(20000));

        let habit_days = seed.habits[0]
            .completed_dates
            .iter()
            .copied()
            .collect::<Vec<_>>();
        assert_eq!(
            habit_days,
            vec![day(2024, 12, 13), day(2024, 12, 14), day(2024, 12, 15)]
        );
    }
}
