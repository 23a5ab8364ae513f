//! Lenient date handling for backend date strings.
//!
//! The backend hands dates over as `YYYY-MM-DD` or full RFC 3339
//! timestamps. Anything else parses to `None`, which callers treat as
//! "does not match" rather than an error.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Parse a backend date string into a local calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()
}

/// Parse an optional backend date field.
pub fn parse_opt_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(parse_date)
}

/// Extract the `(year, month)` bucket of a date string.
///
/// Accepts anything `parse_date` does plus a bare `YYYY-MM`.
pub fn month_of(raw: &str) -> Option<(i32, u32)> {
    if let Some(date) = parse_date(raw) {
        return Some((date.year(), date.month()));
    }
    parse_year_month(raw.trim())
}

/// Parse a bare `YYYY-MM` string.
pub fn parse_year_month(raw: &str) -> Option<(i32, u32)> {
    let (year, month) = raw.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// Relative calendar period a date can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBucket {
    /// Sunday through Saturday of the current week.
    Week,
    Month,
    Year,
}

impl TimeBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeBucket::Week => "week",
            TimeBucket::Month => "month",
            TimeBucket::Year => "year",
        }
    }

    /// Whether `date` falls in the bucket that contains `today`.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            TimeBucket::Week => {
                let (start, end) = week_bounds(today);
                start <= date && date <= end
            }
            TimeBucket::Month => date.year() == today.year() && date.month() == today.month(),
            TimeBucket::Year => date.year() == today.year(),
        }
    }
}

/// First (Sunday) and last (Saturday) day of the week containing `day`.
pub fn week_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = day - Duration::days(day.weekday().num_days_from_sunday() as i64);
    (start, start + Duration::days(6))
}
