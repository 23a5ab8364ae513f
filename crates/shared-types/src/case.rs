use serde::{Deserialize, Serialize};

use crate::search::{EntityKind, Searchable};

// ── Validation constants ────────────────────────────────────────────

/// Valid case status values.
pub const CASE_STATUSES: &[&str] = &["pending", "active", "closed", "on-hold"];

/// Valid case stage values, in procedural order.
pub const CASE_STAGES: &[&str] = &[
    "consultation",
    "drafting",
    "filing",
    "admission",
    "notice",
    "pleadings",
    "evidence",
    "arguments",
    "reserved",
    "judgment",
    "disposed",
];

/// Check whether a status string is a valid case status.
pub fn is_valid_case_status(s: &str) -> bool {
    CASE_STATUSES.contains(&s)
}

/// Check whether a stage string is a valid case stage.
pub fn is_valid_case_stage(s: &str) -> bool {
    CASE_STAGES.contains(&s)
}

// ── Record ──────────────────────────────────────────────────────────

/// A client matter as fetched from the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub file_no: String,
    #[serde(default)]
    pub parties_name: String,
    #[serde(default)]
    pub case_type: String,
    #[serde(default)]
    pub court_name: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub circulation_status: String,
    /// Next hearing date, `YYYY-MM-DD` or RFC 3339.
    #[serde(default)]
    pub next_date: Option<String>,
    #[serde(default)]
    pub interim_relief: String,
    #[serde(default)]
    pub counsel_id: Option<String>,
}

impl Searchable for Case {
    const KIND: EntityKind = EntityKind::Case;
    const SEARCH_FIELDS: &'static [&'static str] =
        &["client_name", "file_no", "parties_name", "case_type"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "client_name" => Some(&self.client_name),
            "file_no" => Some(&self.file_no),
            "parties_name" => Some(&self.parties_name),
            "case_type" => Some(&self.case_type),
            "court_name" => Some(&self.court_name),
            "district" => Some(&self.district),
            "status" => Some(&self.status),
            "stage" => Some(&self.stage),
            "circulation_status" => Some(&self.circulation_status),
            "next_date" => self.next_date.as_deref(),
            "interim_relief" => Some(&self.interim_relief),
            "counsel_id" => self.counsel_id.as_deref(),
            _ => None,
        }
    }
}
