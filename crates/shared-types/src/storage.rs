use serde::{Deserialize, Serialize};

use crate::search::EntityKind;

/// Physical storage that holds a case file.
///
/// The referenced case is not owned: `case_id` may point at a case that no
/// longer exists, so display names are resolved by lookup at query time.
pub trait CaseLinked {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn case_id(&self) -> Option<&str>;

    /// Compartment label the item sits in.
    fn compartment(&self) -> &str;
}

/// A case file kept in an office storage cabinet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageItem {
    pub id: String,
    #[serde(default)]
    pub case_id: Option<String>,
    #[serde(default)]
    pub compartment: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// A case file parked in the sofa rack by the hearing desk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SofaItem {
    pub id: String,
    #[serde(default)]
    pub case_id: Option<String>,
    #[serde(default)]
    pub compartment: String,
}

impl CaseLinked for StorageItem {
    const KIND: EntityKind = EntityKind::StorageItem;

    fn id(&self) -> &str {
        &self.id
    }

    fn case_id(&self) -> Option<&str> {
        self.case_id.as_deref()
    }

    fn compartment(&self) -> &str {
        &self.compartment
    }
}

impl CaseLinked for SofaItem {
    const KIND: EntityKind = EntityKind::SofaItem;

    fn id(&self) -> &str {
        &self.id
    }

    fn case_id(&self) -> Option<&str> {
        self.case_id.as_deref()
    }

    fn compartment(&self) -> &str {
        &self.compartment
    }
}
