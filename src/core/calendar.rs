/// Calendar helpers behind the `whatdayis` command
///
/// "Now" comes from a `Clock` so tests can pin the date.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use regex::Regex;
use std::sync::OnceLock;

/// Weekday names indexed Sunday=0 .. Saturday=6
pub const WEEKDAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

// How many years either side of today to look for a month/day (covers Feb 29)
const YEAR_SEARCH_RADIUS: i32 = 4;

/// Source of today's date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// `Sunday, Oct 18`
pub fn format_day(date: NaiveDate) -> String {
    date.format("%A, %b %-d").to_string()
}

/// `Sunday`
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// Parse a weekday name, ignoring case
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    let name = name.to_lowercase();
    let index = WEEKDAY_NAMES.iter().position(|day| *day == name)?;

    // Sunday-first index, one step forward from Saturday lands on Sunday
    Some((0..index).fold(Weekday::Sun, |day, _| day.succ()))
}

/// Next date strictly after `today` that falls on `target`.
///
/// Asking on the target day itself yields a week from today.
pub fn next_occurrence(today: NaiveDate, target: Weekday) -> NaiveDate {
    let today_index = today.weekday().num_days_from_sunday() as i64;
    let target_index = target.num_days_from_sunday() as i64;

    let diff = (target_index - today_index + 7) % 7;
    let days = if diff == 0 { 7 } else { diff };

    today + Duration::days(days)
}

fn month_day_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d{1,2})/(\d{1,2})$").expect("month/day pattern is valid"))
}

/// Parse `M/d` (e.g. `8/9`, `12/25`) into (month, day) without range checks
pub fn parse_month_day(text: &str) -> Option<(u32, u32)> {
    let captures = month_day_pattern().captures(text)?;
    let month = captures.get(1)?.as_str().parse().ok()?;
    let day = captures.get(2)?.as_str().parse().ok()?;
    Some((month, day))
}

/// The real calendar date with this month and day closest to `today`.
///
/// Ties go to the later date. `None` when the month/day never exists.
pub fn nearest_month_day(today: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    let year = today.year();

    (year - YEAR_SEARCH_RADIUS..=year + YEAR_SEARCH_RADIUS)
        .filter_map(|y| NaiveDate::from_ymd_opt(y, month, day))
        .min_by_key(|date| {
            let distance = (*date - today).num_days().abs();
            (distance, std::cmp::Reverse(*date))
        })
}
