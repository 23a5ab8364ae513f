use serde::{Deserialize, Serialize};
use std::fmt;

/// The record types the dashboard searches over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Case,
    Counsel,
    Appointment,
    Task,
    Expense,
    Book,
    StorageItem,
    SofaItem,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Case => "case",
            EntityKind::Counsel => "counsel",
            EntityKind::Appointment => "appointment",
            EntityKind::Task => "task",
            EntityKind::Expense => "expense",
            EntityKind::Book => "book",
            EntityKind::StorageItem => "storage_item",
            EntityKind::SofaItem => "sofa_item",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flat record that can be matched against a free-text query.
///
/// `SEARCH_FIELDS` is the whitelist of field names eligible for text
/// search on this type. `field` resolves a name to its current value;
/// names the type does not know, and absent optional values, yield `None`.
pub trait Searchable {
    const KIND: EntityKind;
    const SEARCH_FIELDS: &'static [&'static str];

    fn id(&self) -> &str;

    fn field(&self, name: &str) -> Option<&str>;
}

/// A single hit returned by the header search box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub entity_type: EntityKind,
    pub title: String,
    pub subtitle: String,
    /// For case-linked entities (storage and sofa items), the owning case ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}
