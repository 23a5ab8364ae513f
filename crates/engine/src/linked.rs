//! Storage and sofa items only carry a `case_id`. Their display name is the
//! referenced case's client name, looked up at query time.

use shared_types::{Case, CaseLinked};
use std::collections::HashMap;

use crate::filter::fold_case;

/// Case lookup by ID. Absence is a normal answer, not an error.
pub trait CaseLookup {
    fn case_by_id(&self, id: &str) -> Option<&Case>;
}

impl CaseLookup for [Case] {
    fn case_by_id(&self, id: &str) -> Option<&Case> {
        self.iter().find(|c| c.id == id)
    }
}

impl CaseLookup for Vec<Case> {
    fn case_by_id(&self, id: &str) -> Option<&Case> {
        self.as_slice().case_by_id(id)
    }
}

impl CaseLookup for HashMap<String, Case> {
    fn case_by_id(&self, id: &str) -> Option<&Case> {
        self.get(id)
    }
}

/// Display name of a case-linked item, or `placeholder` when its case is gone.
pub fn case_display_name<'a, I, L>(item: &I, cases: &'a L, placeholder: &'a str) -> &'a str
where
    I: CaseLinked,
    L: CaseLookup + ?Sized,
{
    item.case_id()
        .and_then(|id| cases.case_by_id(id))
        .map(|c| c.client_name.as_str())
        .unwrap_or(placeholder)
}

/// Keep items whose resolved display name contains `query`, ignoring case.
///
/// Items with a dangling reference are matched against `placeholder`,
/// which is what the user sees in their row.
#[tracing::instrument(skip(items, cases), fields(entity = I::KIND.as_str(), total = items.len()))]
pub fn filter_case_linked<'a, I, L>(
    items: &'a [I],
    cases: &L,
    query: &str,
    placeholder: &str,
) -> Vec<&'a I>
where
    I: CaseLinked,
    L: CaseLookup + ?Sized,
{
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = fold_case(query);
    let kept: Vec<&I> = items
        .iter()
        .filter(|item| {
            let name = fold_case(case_display_name(*item, cases, placeholder));
            name.contains(&needle)
        })
        .collect();
    tracing::debug!(kept = kept.len(), "case-linked filter applied");
    kept
}

/// Keep items in `compartment`, ignoring case. `""` and `"all"` keep everything.
pub fn filter_by_compartment<'a, I: CaseLinked>(items: &'a [I], compartment: &str) -> Vec<&'a I> {
    match compartment.trim() {
        "" | "all" => items.iter().collect(),
        wanted => items
            .iter()
            .filter(|item| item.compartment().trim().eq_ignore_ascii_case(wanted))
            .collect(),
    }
}
