use serde::{Deserialize, Serialize};

use crate::search::{EntityKind, Searchable};

/// An advocate the office works with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Counsel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub chamber: Option<String>,
}

impl Searchable for Counsel {
    const KIND: EntityKind = EntityKind::Counsel;
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "email"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "phone" => self.phone.as_deref(),
            "chamber" => self.chamber.as_deref(),
            _ => None,
        }
    }
}
