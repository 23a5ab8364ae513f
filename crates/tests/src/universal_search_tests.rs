use engine::{count_by_entity, universal_search, Collections};
use pretty_assertions::assert_eq;
use shared_types::{EntityKind, SearchSettings};

use crate::common::{
    seed_appointments, seed_books, seed_cases, seed_counsel, seed_expenses, seed_sofa_items,
    seed_storage_items, seed_tasks,
};

struct Fixture {
    cases: Vec<shared_types::Case>,
    counsel: Vec<shared_types::Counsel>,
    appointments: Vec<shared_types::Appointment>,
    tasks: Vec<shared_types::Task>,
    expenses: Vec<shared_types::Expense>,
    books: Vec<shared_types::Book>,
    storage_items: Vec<shared_types::StorageItem>,
    sofa_items: Vec<shared_types::SofaItem>,
}

impl Fixture {
    fn seeded() -> Self {
        Self {
            cases: seed_cases(),
            counsel: seed_counsel(),
            appointments: seed_appointments(),
            tasks: seed_tasks(),
            expenses: seed_expenses(),
            books: seed_books(),
            storage_items: seed_storage_items(),
            sofa_items: seed_sofa_items(),
        }
    }

    fn collections(&self) -> Collections<'_> {
        Collections {
            cases: &self.cases,
            counsel: &self.counsel,
            appointments: &self.appointments,
            tasks: &self.tasks,
            expenses: &self.expenses,
            books: &self.books,
            storage_items: &self.storage_items,
            sofa_items: &self.sofa_items,
        }
    }
}

#[test]
fn finds_hits_across_entities_in_fixed_order() {
    let fixture = Fixture::seeded();
    let results = universal_search(&fixture.collections(), "mehta", &SearchSettings::default());
    let hits: Vec<(EntityKind, &str)> = results
        .iter()
        .map(|r| (r.entity_type, r.id.as_str()))
        .collect();
    assert_eq!(
        hits,
        vec![
            (EntityKind::Case, "c1"),
            (EntityKind::Appointment, "a1"),
            (EntityKind::Task, "t1"),
            (EntityKind::StorageItem, "s1"),
        ]
    );
}

#[test]
fn storage_hits_carry_parent_case() {
    let fixture = Fixture::seeded();
    let results = universal_search(&fixture.collections(), "arora", &SearchSettings::default());
    let sofa = results
        .iter()
        .find(|r| r.entity_type == EntityKind::SofaItem)
        .unwrap();
    assert_eq!(sofa.title, "Arora Textiles Pvt. Ltd.");
    assert_eq!(sofa.subtitle, "Compartment 3");
    assert_eq!(sofa.parent_id.as_deref(), Some("c3"));
}

#[test]
fn case_rows_show_file_and_parties() {
    let fixture = Fixture::seeded();
    let results = universal_search(&fixture.collections(), "bose", &SearchSettings::default());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Sunita Bose");
    assert_eq!(results[0].subtitle, "File 7 · Bose v. Kolkata Municipal Corp.");
    assert_eq!(results[0].parent_id, None);
}

#[test]
fn dangling_storage_found_by_placeholder_label() {
    let fixture = Fixture::seeded();
    let settings = SearchSettings {
        unknown_case_label: "Case removed".to_string(),
        ..Default::default()
    };
    let results = universal_search(&fixture.collections(), "removed", &settings);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "s2");
    assert_eq!(results[0].title, "Case removed");
}

#[test]
fn display_limit_caps_each_group() {
    let fixture = Fixture::seeded();
    let settings = SearchSettings {
        display_limit: 1,
        ..Default::default()
    };
    let results = universal_search(&fixture.collections(), "a", &settings);
    let counts = count_by_entity(&results);
    assert!(counts.iter().all(|(_, n)| *n == 1));
    assert_eq!(counts[0].0, EntityKind::Case);
}

#[test]
fn blank_query_shows_nothing() {
    let fixture = Fixture::seeded();
    assert!(universal_search(&fixture.collections(), "", &SearchSettings::default()).is_empty());
}

#[test]
fn results_serialize_for_the_ui() {
    let fixture = Fixture::seeded();
    let results = universal_search(&fixture.collections(), "evidence", &SearchSettings::default());
    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[0]["entity_type"], "book");
    assert_eq!(json[0]["title"], "Law of Evidence");
    assert!(json[0].get("parent_id").is_none());
}
