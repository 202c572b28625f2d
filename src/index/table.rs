//! The complete set of entity indices built from one load

use crate::index::error::IndexResult;
use crate::index::field::FieldType;
use crate::index::indexer::{build_index, EntityIndex};
use crate::models::{Dataset, EntityType, Organization, Ticket, User};

/// Field indices for all three entity types.
///
/// Built once from a [`Dataset`] and read-only afterwards, so it can be
/// shared across threads without locking.
#[derive(Debug)]
pub struct IndexTable<'a> {
    pub tickets: EntityIndex<'a, Ticket>,
    pub users: EntityIndex<'a, User>,
    pub organizations: EntityIndex<'a, Organization>,
}

/// Display name and declared type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSummary {
    pub name: &'static str,
    pub field_type: FieldType,
}

impl<'a> IndexTable<'a> {
    /// Index every collection of `dataset`.
    ///
    /// The three collections are indexed in parallel. When more than one is
    /// empty the error for the first in tickets, users, organizations order
    /// is returned, whatever order the tasks finished in.
    pub fn build(dataset: &'a Dataset) -> IndexResult<Self> {
        let (tickets, (users, organizations)) = rayon::join(
            || build_index(&dataset.tickets),
            || {
                rayon::join(
                    || build_index(&dataset.users),
                    || build_index(&dataset.organizations),
                )
            },
        );

        let table = Self {
            tickets: tickets?,
            users: users?,
            organizations: organizations?,
        };

        tracing::info!(
            tickets = table.tickets.record_count(),
            users = table.users.record_count(),
            organizations = table.organizations.record_count(),
            "Index table built"
        );

        Ok(table)
    }

    /// Searchable fields of `entity` in declaration order
    pub fn fields_of(&self, entity: EntityType) -> Vec<FieldSummary> {
        fn summarize<T: crate::index::Record>(index: &EntityIndex<'_, T>) -> Vec<FieldSummary> {
            index
                .fields()
                .iter()
                .map(|field| FieldSummary {
                    name: field.name(),
                    field_type: field.field_type(),
                })
                .collect()
        }

        match entity {
            EntityType::Ticket => summarize(&self.tickets),
            EntityType::User => summarize(&self.users),
            EntityType::Organization => summarize(&self.organizations),
        }
    }

    /// Declared type of `field` on `entity`, ignoring case
    pub fn field_type(&self, entity: EntityType, field: &str) -> Option<FieldType> {
        match entity {
            EntityType::Ticket => self.tickets.field(field).map(|f| f.field_type()),
            EntityType::User => self.users.field(field).map(|f| f.field_type()),
            EntityType::Organization => self.organizations.field(field).map(|f| f.field_type()),
        }
    }
}
