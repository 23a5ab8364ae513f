//! Notification bell contents, computed from appointment and task dates.
//!
//! Which notifications the user has already seen lives outside this module:
//! callers read it from a [`ViewedStore`], pass it in, and write back the
//! IDs the user dismisses. Classification itself keeps no state.

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use shared_types::{Appointment, Task};
use std::collections::HashSet;

use crate::dates::parse_opt_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Appointment,
    TaskDeadline,
}

impl NotificationKind {
    fn prefix(&self) -> &'static str {
        match self {
            NotificationKind::Appointment => "appointment",
            NotificationKind::TaskDeadline => "task",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Stable across polls: `appointment-<id>` or `task-<id>`.
    pub id: String,
    pub kind: NotificationKind,
    pub entity_id: String,
    pub title: String,
    pub due: NaiveDate,
    pub overdue: bool,
    pub viewed: bool,
}

/// Where the set of already-seen notification IDs is persisted.
pub trait ViewedStore {
    fn load(&self) -> HashSet<String>;

    fn mark_viewed(&mut self, ids: &[String]);
}

/// A [`ViewedStore`] that only lives as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryViewedStore {
    viewed: HashSet<String>,
}

impl ViewedStore for MemoryViewedStore {
    fn load(&self) -> HashSet<String> {
        self.viewed.clone()
    }

    fn mark_viewed(&mut self, ids: &[String]) {
        self.viewed.extend(ids.iter().cloned());
    }
}

fn notification(
    kind: NotificationKind,
    entity_id: &str,
    title: &str,
    due: NaiveDate,
    today: NaiveDate,
    viewed: &HashSet<String>,
) -> Notification {
    let id = format!("{}-{}", kind.prefix(), entity_id);
    Notification {
        viewed: viewed.contains(&id),
        id,
        kind,
        entity_id: entity_id.to_string(),
        title: title.to_string(),
        due,
        overdue: due < today,
    }
}

/// Build the notification list for `today`.
///
/// Appointments dated from today through `today + window_days` notify.
/// Pending tasks notify once their deadline is within the window, and keep
/// notifying while overdue. The result is ordered by due date, ties in
/// input order (appointments before tasks). A window too large to add to
/// `today` reaches the end of the calendar.
#[tracing::instrument(skip(appointments, tasks, viewed))]
pub fn classify_notifications(
    appointments: &[Appointment],
    tasks: &[Task],
    viewed: &HashSet<String>,
    today: NaiveDate,
    window_days: i64,
) -> Vec<Notification> {
    let horizon = window_end(today, window_days);
    let mut out = Vec::new();

    for appointment in appointments {
        let Some(date) = parse_opt_date(appointment.date.as_deref()) else {
            continue;
        };
        if today <= date && date <= horizon {
            out.push(notification(
                NotificationKind::Appointment,
                &appointment.id,
                &appointment.client,
                date,
                today,
                viewed,
            ));
        }
    }

    for task in tasks.iter().filter(|t| t.is_pending()) {
        let Some(deadline) = parse_opt_date(task.deadline.as_deref()) else {
            continue;
        };
        if deadline <= horizon {
            out.push(notification(
                NotificationKind::TaskDeadline,
                &task.id,
                &task.title,
                deadline,
                today,
                viewed,
            ));
        }
    }

    out.sort_by_key(|n| n.due);
    tracing::debug!(count = out.len(), unread = unread_count(&out), "notifications classified");
    out
}

fn window_end(today: NaiveDate, window_days: i64) -> NaiveDate {
    let days = Days::new(window_days.max(0).unsigned_abs());
    today.checked_add_days(days).unwrap_or(NaiveDate::MAX)
}

/// [`classify_notifications`] against the local date at call time.
pub fn classify_notifications_now(
    appointments: &[Appointment],
    tasks: &[Task],
    viewed: &HashSet<String>,
    window_days: i64,
) -> Vec<Notification> {
    classify_notifications(appointments, tasks, viewed, Local::now().date_naive(), window_days)
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.viewed).count()
}

/// Mark every listed notification as seen in `store`.
pub fn mark_all_viewed(store: &mut dyn ViewedStore, notifications: &[Notification]) {
    let ids: Vec<String> = notifications.iter().map(|n| n.id.clone()).collect();
    store.mark_viewed(&ids);
}
