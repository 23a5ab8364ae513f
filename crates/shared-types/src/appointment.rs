use serde::{Deserialize, Serialize};

use crate::search::{EntityKind, Searchable};

/// A scheduled client meeting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub details: String,
    /// Appointment date, `YYYY-MM-DD` or RFC 3339.
    #[serde(default)]
    pub date: Option<String>,
    /// Free-form time of day as entered, e.g. `"10:30"`.
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Searchable for Appointment {
    const KIND: EntityKind = EntityKind::Appointment;
    const SEARCH_FIELDS: &'static [&'static str] = &["client", "details"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "client" => Some(&self.client),
            "details" => Some(&self.details),
            "date" => self.date.as_deref(),
            "time" => self.time.as_deref(),
            "location" => self.location.as_deref(),
            _ => None,
        }
    }
}
