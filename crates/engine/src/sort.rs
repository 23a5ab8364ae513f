use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use shared_types::{AppError, Appointment, Case};
use std::cmp::Ordering;

use crate::dates::parse_opt_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Orderings the case table offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseSort {
    /// Numeric order of the file number.
    FileNo(SortOrder),
}

impl CaseSort {
    /// Parse a sort code from the UI (`file-no-asc`, `file-no-desc`).
    pub fn parse(raw: &str) -> Option<CaseSort> {
        match raw.trim() {
            "file-no-asc" => Some(CaseSort::FileNo(SortOrder::Asc)),
            "file-no-desc" => Some(CaseSort::FileNo(SortOrder::Desc)),
            _ => None,
        }
    }

    pub fn strict(raw: &str) -> Result<CaseSort, AppError> {
        CaseSort::parse(raw)
            .ok_or_else(|| AppError::invalid_field("sort", format!("unknown sort key: {raw}")))
    }
}

/// Leading integer of a file number: `"123/2024"` is 123, `"abc"` and `""` are 0.
pub fn parse_file_no(raw: &str) -> i64 {
    let raw = raw.trim_start();
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value = digits[..end].parse::<i64>().unwrap_or(0);
    if negative {
        -value
    } else {
        value
    }
}

/// Sort cases without touching the input. Equal keys keep their input order.
pub fn sort_cases(records: &[Case], sort: CaseSort) -> Vec<&Case> {
    let mut sorted: Vec<&Case> = records.iter().collect();
    match sort {
        CaseSort::FileNo(order) => {
            // slice::sort_by is stable, so ties stay in input order either way.
            sorted.sort_by(|a, b| {
                let ord = parse_file_no(&a.file_no).cmp(&parse_file_no(&b.file_no));
                match order {
                    SortOrder::Asc => ord,
                    SortOrder::Desc => ord.reverse(),
                }
            });
        }
    }
    sorted
}

fn parse_time(raw: Option<&str>) -> Option<NaiveTime> {
    let raw = raw?.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

fn schedule_key(a: &Appointment) -> (Option<NaiveDate>, Option<NaiveTime>) {
    (parse_opt_date(a.date.as_deref()), parse_time(a.time.as_deref()))
}

/// Undated or untimed entries sort after dated or timed ones.
fn none_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Appointments in chronological order, undated ones last.
pub fn sort_appointments_by_date(records: &[Appointment]) -> Vec<&Appointment> {
    let mut sorted: Vec<&Appointment> = records.iter().collect();
    sorted.sort_by(|a, b| {
        let (a_date, a_time) = schedule_key(a);
        let (b_date, b_time) = schedule_key(b);
        none_last(&a_date, &b_date).then_with(|| none_last(&a_time, &b_time))
    });
    sorted
}
