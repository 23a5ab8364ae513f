use serde::{Deserialize, Serialize};

use crate::search::{EntityKind, Searchable};

/// A volume in the chamber library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub shelf: Option<String>,
}

impl Searchable for Book {
    const KIND: EntityKind = EntityKind::Book;
    const SEARCH_FIELDS: &'static [&'static str] = &["name"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "name" => Some(&self.name),
            "author" => self.author.as_deref(),
            "shelf" => self.shelf.as_deref(),
            _ => None,
        }
    }
}
