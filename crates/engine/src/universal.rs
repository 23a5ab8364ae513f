use shared_types::{
    Appointment, Book, Case, CaseLinked, Counsel, EntityKind, Expense, SearchResult,
    SearchSettings, Searchable, SofaItem, StorageItem, Task,
};

use crate::filter::search;
use crate::linked::{case_display_name, filter_case_linked};

/// Borrowed snapshot of every collection the header search covers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Collections<'a> {
    pub cases: &'a [Case],
    pub counsel: &'a [Counsel],
    pub appointments: &'a [Appointment],
    pub tasks: &'a [Task],
    pub expenses: &'a [Expense],
    pub books: &'a [Book],
    pub storage_items: &'a [StorageItem],
    pub sofa_items: &'a [SofaItem],
}

/// How a record is shown as a row in the search dropdown.
trait Summary: Searchable {
    fn title(&self) -> String;
    fn subtitle(&self) -> String;
}

impl Summary for Case {
    fn title(&self) -> String {
        self.client_name.clone()
    }

    fn subtitle(&self) -> String {
        match (self.file_no.is_empty(), self.parties_name.is_empty()) {
            (false, false) => format!("File {} · {}", self.file_no, self.parties_name),
            (false, true) => format!("File {}", self.file_no),
            _ => self.parties_name.clone(),
        }
    }
}

impl Summary for Counsel {
    fn title(&self) -> String {
        self.name.clone()
    }

    fn subtitle(&self) -> String {
        self.email.clone()
    }
}

impl Summary for Appointment {
    fn title(&self) -> String {
        self.client.clone()
    }

    fn subtitle(&self) -> String {
        match (self.date.as_deref(), self.time.as_deref()) {
            (Some(date), Some(time)) => format!("{date} {time}"),
            (Some(date), None) => date.to_string(),
            _ => self.details.clone(),
        }
    }
}

impl Summary for Task {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn subtitle(&self) -> String {
        match self.assigned_to_name.as_deref() {
            Some(name) => format!("{} · {}", self.status, name),
            None => self.status.clone(),
        }
    }
}

impl Summary for Expense {
    fn title(&self) -> String {
        self.description.clone()
    }

    fn subtitle(&self) -> String {
        format!("{:.2}", self.amount)
    }
}

impl Summary for Book {
    fn title(&self) -> String {
        self.name.clone()
    }

    fn subtitle(&self) -> String {
        self.author.clone().unwrap_or_default()
    }
}

fn group<T: Summary>(records: &[T], query: &str, limit: usize, out: &mut Vec<SearchResult>) {
    out.extend(search(records, query).into_iter().take(limit).map(|r| SearchResult {
        id: r.id().to_string(),
        entity_type: T::KIND,
        title: r.title(),
        subtitle: r.subtitle(),
        parent_id: None,
    }));
}

fn linked_group<I: CaseLinked>(
    items: &[I],
    cases: &[Case],
    query: &str,
    settings: &SearchSettings,
    out: &mut Vec<SearchResult>,
) {
    let placeholder = settings.unknown_case_label.as_str();
    out.extend(
        filter_case_linked(items, cases, query, placeholder)
            .into_iter()
            .take(settings.display_limit)
            .map(|item| SearchResult {
                id: item.id().to_string(),
                entity_type: I::KIND,
                title: case_display_name(item, cases, placeholder).to_string(),
                subtitle: format!("Compartment {}", item.compartment()),
                parent_id: item.case_id().map(str::to_string),
            }),
    );
}

/// Search every collection for the header dropdown.
///
/// Results are grouped by entity type in a fixed order and each group is
/// capped at `settings.display_limit`. A blank query returns nothing.
#[tracing::instrument(skip(collections, settings))]
pub fn universal_search(
    collections: &Collections<'_>,
    query: &str,
    settings: &SearchSettings,
) -> Vec<SearchResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let limit = settings.display_limit;
    let mut results = Vec::new();
    group(collections.cases, query, limit, &mut results);
    group(collections.counsel, query, limit, &mut results);
    group(collections.appointments, query, limit, &mut results);
    group(collections.tasks, query, limit, &mut results);
    group(collections.expenses, query, limit, &mut results);
    group(collections.books, query, limit, &mut results);
    linked_group(collections.storage_items, collections.cases, query, settings, &mut results);
    linked_group(collections.sofa_items, collections.cases, query, settings, &mut results);
    tracing::debug!(hits = results.len(), "universal search finished");
    results
}

/// Count hits per entity type, in the order they first appear.
pub fn count_by_entity(results: &[SearchResult]) -> Vec<(EntityKind, usize)> {
    let mut counts: Vec<(EntityKind, usize)> = Vec::new();
    for result in results {
        match counts.iter_mut().find(|(kind, _)| *kind == result.entity_type) {
            Some((_, n)) => *n += 1,
            None => counts.push((result.entity_type, 1)),
        }
    }
    counts
}
