//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `lifewheel_core` linkage and print a seeded dashboard summary.
//! - Optionally enable file logging via `LIFEWHEEL_LOG_DIR`
//!   (+ `LIFEWHEEL_LOG_LEVEL`).

use lifewheel_core::locale::{format_cost, format_day_month, format_weekday_short};
use lifewheel_core::{
    default_log_level, habit_row, init_logging, last_n_days, LifeStore, LogNotifier,
    DEFAULT_HABIT_WINDOW_DAYS,
};
use log::info;

fn main() {
    println!("lifewheel_core ping={}", lifewheel_core::ping());
    println!("lifewheel_core version={}", lifewheel_core::core_version());

    if let Ok(log_dir) = std::env::var("LIFEWHEEL_LOG_DIR") {
        let level = std::env::var("LIFEWHEEL_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let store = LifeStore::with_seed_data(LogNotifier);
    info!(
        "event=cli_probe module=cli status=ok goals={} events={} habits={}",
        store.goals().len(),
        store.events().len(),
        store.habits().len()
    );

    let wheel = store.balance_wheel();
    println!("wheel score={:.1}", wheel.score());
    for entry in store.sphere_overview() {
        println!("  {:<14} {:>3}%", entry.sphere.name, entry.progress);
    }

    for group in store.events_by_date() {
        println!(
            "{} ({})",
            format_day_month(group.date),
            format_weekday_short(group.date)
        );
        for event in group.events {
            let cost = event.cost.map(format_cost).unwrap_or_default();
            println!("  {} {} {}", event.time, event.title, cost);
        }
    }

    let window = last_n_days(DEFAULT_HABIT_WINDOW_DAYS);
    for habit in store.habits() {
        let cells = habit_row(habit, &window)
            .iter()
            .map(|cell| if cell.completed { 'x' } else { '.' })
            .collect::<String>();
        println!("{} [{}] total={}", habit.title, cells, habit.completed_count());
    }
}
