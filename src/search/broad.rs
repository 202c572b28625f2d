//! Search one value across every field of every entity type

use crate::index::{canonicalize, EntityIndex, IndexTable, Record};
use crate::models::EntityType;
use crate::search::error::{SearchError, SearchResult};
use crate::search::session::Matches;
use std::collections::{BTreeMap, HashSet};

/// Per-entity results of a broad search; entity types without hits are absent
pub type BroadMatches<'a> = BTreeMap<EntityType, Matches<'a>>;

/// Look `value` up in every field of every entity type.
///
/// The three entity types are scanned in parallel, each into its own result
/// list; the lists are merged only after all scans are done. Within an
/// entity type a record matched through several fields is kept once, at the
/// position it was first seen.
pub fn broad_search<'a>(table: &IndexTable<'a>, value: &str) -> SearchResult<BroadMatches<'a>> {
    let canonical = canonicalize(value);

    let (tickets, (users, organizations)) = rayon::join(
        || scan_entity(&table.tickets, &canonical),
        || {
            rayon::join(
                || scan_entity(&table.users, &canonical),
                || scan_entity(&table.organizations, &canonical),
            )
        },
    );

    let mut merged = BroadMatches::new();
    if !tickets.is_empty() {
        merged.insert(EntityType::Ticket, Matches::Tickets(tickets));
    }
    if !users.is_empty() {
        merged.insert(EntityType::User, Matches::Users(users));
    }
    if !organizations.is_empty() {
        merged.insert(EntityType::Organization, Matches::Organizations(organizations));
    }

    tracing::debug!(
        entities = merged.len(),
        hits = merged.values().map(Matches::len).sum::<usize>(),
        "Broad search"
    );

    if merged.is_empty() {
        return Err(SearchError::NoResults);
    }
    Ok(merged)
}

/// Every record of one entity type holding `canonical` in any field.
///
/// Deduplicates on the address of the record itself, never on a copy.
fn scan_entity<'a, T: Record>(index: &EntityIndex<'a, T>, canonical: &str) -> Vec<&'a T> {
    let mut seen: HashSet<*const T> = HashSet::new();
    let mut hits = Vec::new();

    for field in index.fields() {
        for &record in field.get(canonical) {
            if seen.insert(record as *const T) {
                hits.push(record);
            }
        }
    }

    hits
}
