use serde::{Deserialize, Serialize};

use crate::search::{EntityKind, Searchable};

/// An office expense entry from the finance ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub category: Option<String>,
    /// Date incurred, `YYYY-MM-DD` or RFC 3339. Its `YYYY-MM` prefix is the month bucket.
    #[serde(default)]
    pub date: Option<String>,
}

impl Searchable for Expense {
    const KIND: EntityKind = EntityKind::Expense;
    const SEARCH_FIELDS: &'static [&'static str] = &["description"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "description" => Some(&self.description),
            "category" => self.category.as_deref(),
            "date" => self.date.as_deref(),
            _ => None,
        }
    }
}
