//! Free-text matching and structured filters over fetched record snapshots.
//!
//! Every operation borrows the caller's slice and returns references in
//! input order. Nothing here mutates a record or fails: missing fields
//! read as empty strings and unparseable dates never match.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use shared_types::{
    is_valid_case_stage, is_valid_case_status, is_valid_task_status, AppError, Appointment, Case,
    Expense, Searchable, Task,
};

use crate::dates::{month_of, parse_opt_date, parse_year_month, TimeBucket};

// ── Free-text search ────────────────────────────────────────────────

/// Case-fold `s` for comparison.
///
/// Upper-casing first sends every case variant of a letter to the same
/// lowercase form, so `"ß"`, `"SS"` and `"ss"` all fold to `"ss"`.
pub fn fold_case(s: &str) -> String {
    s.to_uppercase().to_lowercase()
}

/// Whether any whitelisted field of `record` contains `query`, ignoring case.
///
/// An empty query matches everything. Fields outside `fields` are never read.
pub fn matches_query<T: Searchable>(record: &T, query: &str, fields: &[&str]) -> bool {
    if query.is_empty() {
        return true;
    }
    contains_folded(record, &fold_case(query), fields)
}

/// `needle` must already be passed through [`fold_case`].
fn contains_folded<T: Searchable>(record: &T, needle: &str, fields: &[&str]) -> bool {
    fields.iter().any(|name| {
        let value = fold_case(record.field(name).unwrap_or_default());
        value.contains(needle)
    })
}

/// Keep the records matching `query` on the given fields, in input order.
#[tracing::instrument(
    skip(records, whitelist),
    fields(entity = T::KIND.as_str(), total = records.len())
)]
pub fn filter_collection<'a, T: Searchable>(
    records: &'a [T],
    query: &str,
    whitelist: &[&str],
) -> Vec<&'a T> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let needle = fold_case(query);
    let kept: Vec<&T> = records
        .iter()
        .filter(|r| contains_folded(*r, &needle, whitelist))
        .collect();
    tracing::debug!(kept = kept.len(), "text filter applied");
    kept
}

/// [`filter_collection`] over the type's own search whitelist.
pub fn search<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    filter_collection(records, query, T::SEARCH_FIELDS)
}

// ── Structured filter keys ──────────────────────────────────────────

/// Effective circulation state of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Circulation {
    Circulated,
    NonCirculated,
}

impl Circulation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Circulation::Circulated => "circulated",
            Circulation::NonCirculated => "non-circulated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReliefOutcome {
    Favor,
    Against,
}

impl ReliefOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReliefOutcome::Favor => "favor",
            ReliefOutcome::Against => "against",
        }
    }
}

/// A structured filter selected in the UI, parsed from its string code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKey {
    /// No filter selected (`""` or `"all"`).
    All,
    /// Case or task status code.
    Status(String),
    /// Case stage code.
    Stage(String),
    /// `ir-favor` / `ir-against`.
    InterimRelief(ReliefOutcome),
    /// `circulated` / `non-circulated`, evaluated against the next date.
    Circulation(Circulation),
    /// `week` / `month` / `year` relative to today.
    Period(TimeBucket),
    /// A `YYYY-MM` calendar month.
    Month { year: i32, month: u32 },
    /// Anything else. Passes every record through.
    Unrecognized(String),
}

impl FilterKey {
    pub fn parse(raw: &str) -> FilterKey {
        let key = raw.trim();
        match key {
            "" | "all" => FilterKey::All,
            "ir-favor" => FilterKey::InterimRelief(ReliefOutcome::Favor),
            "ir-against" => FilterKey::InterimRelief(ReliefOutcome::Against),
            "circulated" => FilterKey::Circulation(Circulation::Circulated),
            "non-circulated" => FilterKey::Circulation(Circulation::NonCirculated),
            "week" => FilterKey::Period(TimeBucket::Week),
            "month" => FilterKey::Period(TimeBucket::Month),
            "year" => FilterKey::Period(TimeBucket::Year),
            s if is_valid_case_status(s) || is_valid_task_status(s) => {
                FilterKey::Status(s.to_string())
            }
            s if is_valid_case_stage(s) => FilterKey::Stage(s.to_string()),
            s => match parse_year_month(s) {
                Some((year, month)) => FilterKey::Month { year, month },
                None => FilterKey::Unrecognized(s.to_string()),
            },
        }
    }

    /// Like [`FilterKey::parse`], but rejects unknown codes instead of
    /// passing everything through.
    pub fn strict(raw: &str) -> Result<FilterKey, AppError> {
        match FilterKey::parse(raw) {
            FilterKey::Unrecognized(key) => Err(AppError::invalid_field(
                "filter",
                format!("unknown filter key: {key}"),
            )),
            key => Ok(key),
        }
    }
}

impl From<&str> for FilterKey {
    fn from(raw: &str) -> Self {
        FilterKey::parse(raw)
    }
}

// ── Per-entity predicates ───────────────────────────────────────────

/// A record type that supports structured filters.
///
/// Keys that do not apply to a type (a stage code on a task, say) pass the
/// record through, the same way an unrecognized key does.
pub trait Filterable {
    fn matches_filter(&self, key: &FilterKey, today: NaiveDate) -> bool;
}

/// A case counts as circulated only while its next date is today or later.
pub fn effective_circulation(case: &Case, today: NaiveDate) -> Circulation {
    let upcoming = parse_opt_date(case.next_date.as_deref()).is_some_and(|d| d >= today);
    if case.circulation_status == "circulated" && upcoming {
        Circulation::Circulated
    } else {
        Circulation::NonCirculated
    }
}

fn date_in_period(raw: Option<&str>, bucket: TimeBucket, today: NaiveDate) -> bool {
    parse_opt_date(raw).is_some_and(|d| bucket.contains(d, today))
}

fn date_in_month(raw: Option<&str>, year: i32, month: u32) -> bool {
    raw.and_then(month_of) == Some((year, month))
}

impl Filterable for Case {
    fn matches_filter(&self, key: &FilterKey, today: NaiveDate) -> bool {
        match key {
            FilterKey::Status(status) => self.status == *status,
            FilterKey::Stage(stage) => self.stage == *stage,
            FilterKey::InterimRelief(outcome) => self.interim_relief == outcome.as_str(),
            FilterKey::Circulation(state) => effective_circulation(self, today) == *state,
            FilterKey::Period(bucket) => date_in_period(self.next_date.as_deref(), *bucket, today),
            FilterKey::Month { year, month } => {
                date_in_month(self.next_date.as_deref(), *year, *month)
            }
            FilterKey::All | FilterKey::Unrecognized(_) => true,
        }
    }
}

impl Filterable for Task {
    fn matches_filter(&self, key: &FilterKey, today: NaiveDate) -> bool {
        match key {
            FilterKey::Status(status) => self.status == *status,
            FilterKey::Period(bucket) => date_in_period(self.deadline.as_deref(), *bucket, today),
            FilterKey::Month { year, month } => {
                date_in_month(self.deadline.as_deref(), *year, *month)
            }
            _ => true,
        }
    }
}

impl Filterable for Appointment {
    fn matches_filter(&self, key: &FilterKey, today: NaiveDate) -> bool {
        match key {
            FilterKey::Period(bucket) => date_in_period(self.date.as_deref(), *bucket, today),
            FilterKey::Month { year, month } => date_in_month(self.date.as_deref(), *year, *month),
            _ => true,
        }
    }
}

impl Filterable for Expense {
    fn matches_filter(&self, key: &FilterKey, today: NaiveDate) -> bool {
        match key {
            FilterKey::Period(bucket) => date_in_period(self.date.as_deref(), *bucket, today),
            FilterKey::Month { year, month } => date_in_month(self.date.as_deref(), *year, *month),
            _ => true,
        }
    }
}

// ── Applying filters ────────────────────────────────────────────────

/// Apply a structured filter relative to the local date at call time.
pub fn apply_structured_filter<'a, T: Filterable>(
    records: &'a [T],
    key: &FilterKey,
) -> Vec<&'a T> {
    apply_structured_filter_at(records, key, Local::now().date_naive())
}

/// Apply a structured filter relative to an explicit `today`.
#[tracing::instrument(skip(records), fields(total = records.len()))]
pub fn apply_structured_filter_at<'a, T: Filterable>(
    records: &'a [T],
    key: &FilterKey,
    today: NaiveDate,
) -> Vec<&'a T> {
    if let FilterKey::Unrecognized(raw) = key {
        tracing::warn!(key = %raw, "unrecognized filter key, passing all records through");
    }
    let kept: Vec<&T> = records
        .iter()
        .filter(|r| r.matches_filter(key, today))
        .collect();
    tracing::debug!(kept = kept.len(), "structured filter applied");
    kept
}

/// Text query and structured filter together. A record must satisfy both.
pub fn query_and_filter_at<'a, T: Searchable + Filterable>(
    records: &'a [T],
    query: &str,
    key: &FilterKey,
    today: NaiveDate,
) -> Vec<&'a T> {
    let needle = fold_case(query);
    records
        .iter()
        .filter(|r| r.matches_filter(key, today))
        .filter(|r| needle.is_empty() || contains_folded(*r, &needle, T::SEARCH_FIELDS))
        .collect()
}

/// [`query_and_filter_at`] relative to the local date at call time.
pub fn query_and_filter<'a, T: Searchable + Filterable>(
    records: &'a [T],
    query: &str,
    key: &FilterKey,
) -> Vec<&'a T> {
    query_and_filter_at(records, query, key, Local::now().date_naive())
}

/// Keep tasks assigned to `user_id`. `""` and `"all"` keep every task.
pub fn filter_tasks_by_assignee<'a>(tasks: &'a [Task], user_id: &str) -> Vec<&'a Task> {
    match user_id {
        "" | "all" => tasks.iter().collect(),
        id => tasks
            .iter()
            .filter(|t| t.assigned_to.as_deref() == Some(id))
            .collect(),
    }
}
