use serde::{Deserialize, Serialize};

use crate::search::{EntityKind, Searchable};

/// Valid task status values.
pub const TASK_STATUSES: &[&str] = &["pending", "completed"];

pub fn is_valid_task_status(s: &str) -> bool {
    TASK_STATUSES.contains(&s)
}

/// A to-do item assigned to a user of the office.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// User ID of the assignee.
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// Display name of the assignee, denormalized by the backend.
    #[serde(default)]
    pub assigned_to_name: Option<String>,
    #[serde(default)]
    pub status: String,
    /// Due date, `YYYY-MM-DD` or RFC 3339.
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub case_id: Option<String>,
}

impl Task {
    pub fn is_pending(&self) -> bool {
        self.status == "pending"
    }
}

impl Searchable for Task {
    const KIND: EntityKind = EntityKind::Task;
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "description", "assigned_to_name"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "title" => Some(&self.title),
            "description" => self.description.as_deref(),
            "assigned_to" => self.assigned_to.as_deref(),
            "assigned_to_name" => self.assigned_to_name.as_deref(),
            "status" => Some(&self.status),
            "deadline" => self.deadline.as_deref(),
            "case_id" => self.case_id.as_deref(),
            _ => None,
        }
    }
}
