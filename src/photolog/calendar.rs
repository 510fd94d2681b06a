//! Pure calendar-grid arithmetic: month matrices, padding, and labels.
//!
//! All functions here are pure over `chrono::NaiveDate`; nothing touches
//! the store or any I/O.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Which day a week row begins on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

/// One cell of a week row: a real day or leading/trailing padding.
pub type GridCell = Option<NaiveDate>;

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// First-of-month anchor `delta` months away from `anchor` (negative
/// deltas step backwards).
pub fn shift_month(anchor: NaiveDate, delta: i32) -> NaiveDate {
    let months0 = anchor.year() * 12 + anchor.month0() as i32 + delta;
    let year = months0.div_euclid(12);
    let month = months0.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(anchor)
}

/// Signed whole-month distance from `a` to `b`, ignoring the day of month.
pub fn months_between(a: NaiveDate, b: NaiveDate) -> i32 {
    (b.year() - a.year()) * 12 + b.month0() as i32 - a.month0() as i32
}

fn days_in_month(date: NaiveDate) -> u32 {
    let next = shift_month(date, 1);
    next.signed_duration_since(first_of_month(date)).num_days() as u32
}

/// Left padding of the first week row: the number of placeholder cells
/// before day 1, given the week-start convention.
fn leading_padding(first: NaiveDate, week_start: WeekStart) -> usize {
    let sunday_index = first.weekday().num_days_from_sunday() as usize;
    match week_start {
        WeekStart::Sunday => sunday_index,
        WeekStart::Monday => {
            if sunday_index == 0 {
                6
            } else {
                sunday_index - 1
            }
        }
    }
}

/// Builds the month grid for the month containing `date` as rows of
/// exactly 7 cells.
///
/// Contract: only the weeks containing real days of the month are
/// emitted (4 to 6 rows), with `None` placeholders padding the first and
/// last row. The grid is never padded out to a fixed 6 rows.
pub fn month_matrix(date: NaiveDate, week_start: WeekStart) -> Vec<Vec<GridCell>> {
    let first = first_of_month(date);
    let total_days = days_in_month(first);

    let mut weeks = Vec::new();
    let mut week: Vec<GridCell> = vec![None; leading_padding(first, week_start)];

    for offset in 0..total_days {
        let day = first + chrono::Duration::days(offset as i64);
        week.push(Some(day));
        if week.len() == 7 {
            weeks.push(week);
            week = Vec::new();
        }
    }

    if !week.is_empty() {
        week.resize(7, None);
        weeks.push(week);
    }

    weeks
}

/// Weekday column headers for a grid in the given convention.
pub fn weekday_labels(week_start: WeekStart) -> [&'static str; 7] {
    match week_start {
        WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    }
}

/// Header title for a month, e.g. "January 2025".
pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Abbreviated month name, e.g. "Jan".
pub fn month_short(date: NaiveDate) -> String {
    date.format("%b").to_string()
}

/// Accessible long-form label for a day, e.g.
/// "Wednesday, 15th January 2025".
pub fn day_label(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{}, {}{} {} {}",
        date.format("%A"),
        day,
        ordinal_suffix(day),
        date.format("%B"),
        date.year()
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

pub fn same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}
