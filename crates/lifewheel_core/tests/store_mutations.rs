use chrono::NaiveDate;
use lifewheel_core::{
    DraftField, EventDraft, GoalDraft, HabitDraft, LifeStore, LogNotifier, Notifier, Progress,
    RecordingNotifier, Severity,
};
use uuid::Uuid;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn empty_store() -> LifeStore<RecordingNotifier> {
    LifeStore::new(RecordingNotifier::new())
}

fn health_goal(title: &str, deadline: &str) -> GoalDraft {
    GoalDraft {
        sphere: "Здоровье".to_string(),
        title: title.to_string(),
        deadline: deadline.to_string(),
        ..GoalDraft::default()
    }
}

#[test]
fn add_goal_starts_at_zero_and_is_averaged_with_existing_goals() {
    let mut store = LifeStore::with_seed_data(RecordingNotifier::new());
    assert_eq!(store.sphere_progress("Здоровье"), 30);

    let id = store.add_goal(health_goal("X", "2025-01-01")).unwrap();

    let matching = store.goals().iter().filter(|g| g.id == id).count();
    assert_eq!(matching, 1);
    let goal = store.goal(id).unwrap();
    assert_eq!(goal.progress, Progress::ZERO);
    assert_eq!(goal.deadline, day(2025, 1, 1));
    assert_eq!(goal.time_bound, "До 01.01.2025");
    assert_eq!(store.sphere_progress("Здоровье"), 15);

    let note = store.notifier().last().unwrap();
    assert_eq!(note.severity, Severity::Default);
    assert_eq!(note.title, "Цель добавлена!");
    assert_eq!(note.message, "Цель \"X\" успешно создана");
}

#[test]
fn add_goal_rejects_missing_required_fields_without_changes() {
    let mut store = empty_store();
    let draft = GoalDraft {
        title: "Без сферы".to_string(),
        ..GoalDraft::default()
    };

    let err = store.add_goal(draft).unwrap_err();

    assert_eq!(err.fields(), vec![DraftField::Sphere, DraftField::Deadline]);
    assert!(store.goals().is_empty());
    let note = store.notifier().last().unwrap();
    assert!(note.is_failure());
    assert_eq!(note.title, "Ошибка");
    assert_eq!(
        note.message,
        "Заполните обязательные поля: сфера, название и срок"
    );
}

#[test]
fn add_event_with_empty_time_appends_nothing() {
    let mut store = LifeStore::with_seed_data(RecordingNotifier::new());
    let before = store.events().len();
    let draft = EventDraft {
        title: "Тренировка".to_string(),
        sphere: "Спорт".to_string(),
        date: "2024-12-21".to_string(),
        time: String::new(),
        ..EventDraft::default()
    };

    let err = store.add_event(draft).unwrap_err();

    assert_eq!(err.fields(), vec![DraftField::Time]);
    assert_eq!(store.events().len(), before);
    let note = store.notifier().last().unwrap();
    assert_eq!(note.severity, Severity::Destructive);
    assert_eq!(note.message, "Заполните все поля");
}

#[test]
fn add_event_keeps_optional_fields_and_reports_date() {
    let mut store = empty_store();
    let goal_id = store.add_goal(health_goal("Зубы", "2024-12-31")).unwrap();
    let draft = EventDraft {
        title: "Стоматолог".to_string(),
        sphere: "Здоровье".to_string(),
        date: "2024-12-20".to_string(),
        time: "18:00".to_string(),
        location: "  ".to_string(),
        cost: Some(5000),
        linked_goal_id: Some(goal_id),
    };

    let id = store.add_event(draft).unwrap();

    let event = store.event(id).unwrap();
    assert_eq!(event.date, day(2024, 12, 20));
    assert_eq!(event.time, "18:00");
    assert_eq!(event.location, None);
    assert_eq!(event.cost, Some(5000));
    assert_eq!(store.linked_goal(event).map(|g| g.id), Some(goal_id));
    assert_eq!(
        store.notifier().last().unwrap().message,
        "\"Стоматолог\" на 20.12.2024"
    );
}

#[test]
fn add_habit_starts_with_no_completed_days() {
    let mut store = empty_store();
    let id = store
        .add_habit(HabitDraft {
            sphere: "Спорт".to_string(),
            title: "Зарядка".to_string(),
        })
        .unwrap();

    let habit = store.habit(id).unwrap();
    assert!(habit.completed_dates.is_empty());
    assert_eq!(habit.title, "Зарядка");

    let err = store.add_habit(HabitDraft::default()).unwrap_err();
    assert_eq!(err.fields(), vec![DraftField::Sphere, DraftField::Title]);
    assert_eq!(store.habits().len(), 1);
}

#[test]
fn submitted_draft_is_cleared_on_success_and_kept_on_failure() {
    let mut store = empty_store();
    store.goal_draft_mut().title = "Марафон".to_string();
    store.goal_draft_mut().sphere = "Спорт".to_string();

    store.submit_goal_draft().unwrap_err();
    assert_eq!(store.goal_draft().title, "Марафон");

    store.goal_draft_mut().deadline = "2025-06-01".to_string();
    store.submit_goal_draft().unwrap();
    assert_eq!(store.goal_draft(), &GoalDraft::default());
    assert_eq!(store.goals().len(), 1);

    store.event_draft_mut().title = "Забег".to_string();
    store.submit_event_draft().unwrap_err();
    assert_eq!(store.event_draft().title, "Забег");

    store.habit_draft_mut().sphere = "Спорт".to_string();
    store.habit_draft_mut().title = "Растяжка".to_string();
    store.submit_habit_draft().unwrap();
    assert_eq!(store.habit_draft(), &HabitDraft::default());
}

#[test]
fn direct_add_leaves_stored_drafts_untouched() {
    let mut store = empty_store();
    store.goal_draft_mut().title = "В процессе".to_string();
    store.event_draft_mut().time = "09:00".to_string();
    store.habit_draft_mut().title = "Чтение".to_string();

    store
        .add_goal(GoalDraft {
            sphere: "Спорт".to_string(),
            title: "Другая".to_string(),
            deadline: "2025-01-01".to_string(),
            ..GoalDraft::default()
        })
        .unwrap();
    store
        .add_event(EventDraft {
            title: "Забег".to_string(),
            sphere: "Спорт".to_string(),
            date: "2025-01-02".to_string(),
            time: "07:00".to_string(),
            ..EventDraft::default()
        })
        .unwrap();
    store
        .add_habit(HabitDraft {
            sphere: "Спорт".to_string(),
            title: "Бег".to_string(),
        })
        .unwrap();

    assert_eq!(store.goal_draft().title, "В процессе");
    assert_eq!(store.event_draft().time, "09:00");
    assert_eq!(store.habit_draft().title, "Чтение");
}

#[test]
fn notifier_mut_drains_received_notifications() {
    let mut store = empty_store();
    store.add_habit(HabitDraft::default()).unwrap_err();

    let drained = store.notifier_mut().drain();
    assert_eq!(drained.len(), 1);
    assert!(drained[0].is_failure());
    assert!(store.notifier().received().is_empty());
}

#[test]
fn boxed_notifier_store_accepts_trait_objects() {
    let notifier: Box<dyn Notifier> = Box::new(LogNotifier);
    let mut store = LifeStore::new(notifier);

    let id = store
        .add_habit(HabitDraft {
            sphere: "Отдых".to_string(),
            title: "Прогулка".to_string(),
        })
        .unwrap();
    assert!(store.habit(id).is_some());
    store.add_goal(GoalDraft::default()).unwrap_err();
    assert!(store.goals().is_empty());
}

#[test]
fn generated_ids_are_unique() {
    let mut store = empty_store();
    let first = store.add_goal(health_goal("A", "2025-01-01")).unwrap();
    let second = store.add_goal(health_goal("A", "2025-01-01")).unwrap();
    assert_ne!(first, second);
}

#[test]
fn update_goal_progress_is_idempotent() {
    let mut store = empty_store();
    let id = store.add_goal(health_goal("X", "2025-01-01")).unwrap();
    let value = Progress::new(70).unwrap();

    assert!(store.update_goal_progress(id, value));
    let once = store.goals().to_vec();
    assert!(store.update_goal_progress(id, value));

    assert_eq!(store.goals(), once.as_slice());
    assert_eq!(store.goal(id).unwrap().progress.value(), 70);
    assert_eq!(
        store.notifier().last().unwrap().message,
        "Прогресс цели установлен на 70%"
    );
}

#[test]
fn update_goal_progress_ignores_unknown_goal() {
    let mut store = LifeStore::with_seed_data(RecordingNotifier::new());
    let before = store.goals().to_vec();

    assert!(!store.update_goal_progress(Uuid::nil(), Progress::MAX));

    assert_eq!(store.goals(), before.as_slice());
    assert!(store.notifier().received().is_empty());
}

#[test]
fn toggle_habit_completion_is_an_involution() {
    let mut store = empty_store();
    let id = store
        .add_habit(HabitDraft {
            sphere: "Спорт".to_string(),
            title: "Бег".to_string(),
        })
        .unwrap();
    let today = lifewheel_core::local_today();

    assert_eq!(store.toggle_habit_completion(id, today), Some(true));
    assert!(store.habit(id).unwrap().is_completed_on(today));
    assert_eq!(store.habit(id).unwrap().completed_count(), 1);

    assert_eq!(store.toggle_habit_completion(id, today), Some(false));
    assert!(store.habit(id).unwrap().completed_dates.is_empty());
}

#[test]
fn toggle_habit_completion_leaves_other_days_alone() {
    let mut store = LifeStore::with_seed_data(RecordingNotifier::new());
    let habit_id = store.habits()[0].id;
    let original = store.habits()[0].completed_dates.clone();

    assert_eq!(
        store.toggle_habit_completion(habit_id, day(2024, 12, 14)),
        Some(false)
    );
    assert_eq!(store.habits()[0].completed_count(), original.len() - 1);
    store.toggle_habit_completion(habit_id, day(2024, 12, 14));

    assert_eq!(store.habits()[0].completed_dates, original);
    assert_eq!(store.toggle_habit_completion(Uuid::nil(), day(2024, 12, 14)), None);
}
