//! Fixed ru-RU display formatting.
//!
//! # Responsibility
//! - Turn calendar days and amounts into display strings for one locale.
//!
//! # Invariants
//! - Output is for display only; no logic compares formatted strings.

use chrono::{Datelike, NaiveDate, Weekday};

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

const MONTHS_SHORT: [&str; 12] = [
    "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.", "нояб.",
    "дек.",
];

/// Digit group separator (no-break space).
const GROUP_SEPARATOR: char = '\u{a0}';

/// `31.12.2024`
pub fn format_date(day: NaiveDate) -> String {
    day.format("%d.%m.%Y").to_string()
}

/// `20 декабря`
pub fn format_day_month(day: NaiveDate) -> String {
    format!("{} {}", day.day(), MONTHS_GENITIVE[day.month0() as usize])
}

/// `20 дек.`
pub fn format_day_month_short(day: NaiveDate) -> String {
    format!("{} {}", day.day(), MONTHS_SHORT[day.month0() as usize])
}

/// `пт`
pub fn format_weekday_short(day: NaiveDate) -> &'static str {
    match day.weekday() {
        Weekday::Mon => "пн",
        Weekday::Tue => "вт",
        Weekday::Wed => "ср",
        Weekday::Thu => "чт",
        Weekday::Fri => "пт",
        Weekday::Sat => "сб",
        Weekday::Sun => "вс",
    }
}

/// `5 000 ₽`, digits grouped by three.
pub fn format_cost(rubles: u64) -> String {
    let digits = rubles.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    format!("{grouped} ₽")
}

/// Goal `time_bound` text derived from its deadline.
pub fn time_bound_label(deadline: NaiveDate) -> String {
    format!("До {}", format_date(deadline))
}
