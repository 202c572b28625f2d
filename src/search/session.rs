//! Entity → field → value selection over an [`IndexTable`]
//!
//! Each step returns a new selection value instead of mutating shared
//! state, so a failed step leaves the previous selection usable as-is.

use crate::index::{FieldSummary, FieldType, IndexTable};
use crate::models::{EntityType, Organization, RecordRef, Ticket, User};
use crate::search::broad::{broad_search, BroadMatches};
use crate::search::error::{SearchError, SearchResult};
use std::str::FromStr;

/// Records matched by a query, all of one entity type, in index order
#[derive(Debug, Clone, PartialEq)]
pub enum Matches<'a> {
    Tickets(Vec<&'a Ticket>),
    Users(Vec<&'a User>),
    Organizations(Vec<&'a Organization>),
}

impl<'a> Matches<'a> {
    pub fn entity_type(&self) -> EntityType {
        match self {
            Matches::Tickets(_) => EntityType::Ticket,
            Matches::Users(_) => EntityType::User,
            Matches::Organizations(_) => EntityType::Organization,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Matches::Tickets(records) => records.len(),
            Matches::Users(records) => records.len(),
            Matches::Organizations(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The matched records as type-erased references
    pub fn records(&self) -> Vec<RecordRef<'a>> {
        match self {
            Matches::Tickets(records) => records.iter().map(|&r| RecordRef::Ticket(r)).collect(),
            Matches::Users(records) => records.iter().map(|&r| RecordRef::User(r)).collect(),
            Matches::Organizations(records) => {
                records.iter().map(|&r| RecordRef::Organization(r)).collect()
            }
        }
    }
}

/// Entry point for queries against one index table
#[derive(Debug, Clone, Copy)]
pub struct QuerySession<'t, 'a> {
    table: &'t IndexTable<'a>,
}

impl<'t, 'a> QuerySession<'t, 'a> {
    pub fn new(table: &'t IndexTable<'a>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t IndexTable<'a> {
        self.table
    }

    /// Choose the entity type to search, by menu key or name
    pub fn select_entity(&self, key: &str) -> SearchResult<EntitySelection<'t, 'a>> {
        let entity = EntityType::from_str(key.trim())
            .map_err(|_| SearchError::UnknownEntityType(key.to_string()))?;

        Ok(EntitySelection {
            table: self.table,
            entity,
        })
    }

    /// Search every field of every entity type for `value`
    pub fn broad_search(&self, value: &str) -> SearchResult<BroadMatches<'a>> {
        broad_search(self.table, value)
    }
}

/// An entity type has been chosen; a field is next
#[derive(Debug, Clone, Copy)]
pub struct EntitySelection<'t, 'a> {
    table: &'t IndexTable<'a>,
    entity: EntityType,
}

impl<'t, 'a> EntitySelection<'t, 'a> {
    pub fn entity(&self) -> EntityType {
        self.entity
    }

    /// Field names available for this entity type, as declared
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields().into_iter().map(|field| field.name).collect()
    }

    pub fn fields(&self) -> Vec<FieldSummary> {
        self.table.fields_of(self.entity)
    }

    /// Choose the field to search, ignoring case
    pub fn select_field(&self, name: &str) -> SearchResult<FieldSelection<'t, 'a>> {
        let summary = match self.entity {
            EntityType::Ticket => self
                .table
                .tickets
                .field(name)
                .map(|f| (f.key(), f.name(), f.field_type())),
            EntityType::User => self
                .table
                .users
                .field(name)
                .map(|f| (f.key(), f.name(), f.field_type())),
            EntityType::Organization => self
                .table
                .organizations
                .field(name)
                .map(|f| (f.key(), f.name(), f.field_type())),
        };

        let (key, field_name, field_type) = summary.ok_or_else(|| SearchError::UnknownField {
            entity: self.entity,
            field: name.to_string(),
        })?;

        Ok(FieldSelection {
            table: self.table,
            entity: self.entity,
            key,
            field_name,
            field_type,
        })
    }
}

/// Entity type and field are chosen; ready to look up a value
#[derive(Debug, Clone, Copy)]
pub struct FieldSelection<'t, 'a> {
    table: &'t IndexTable<'a>,
    entity: EntityType,
    key: &'static str,
    field_name: &'static str,
    field_type: FieldType,
}

impl<'t, 'a> FieldSelection<'t, 'a> {
    pub fn entity(&self) -> EntityType {
        self.entity
    }

    /// Field name as declared
    pub fn field_name(&self) -> &'static str {
        self.field_name
    }

    /// Declared type, useful as an input hint
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Records whose field value equals `value`, ignoring case
    pub fn lookup(&self, value: &str) -> SearchResult<Matches<'a>> {
        let matches = match self.entity {
            EntityType::Ticket => Matches::Tickets(
                self.table
                    .tickets
                    .field(self.key)
                    .map(|f| f.lookup(value).to_vec())
                    .unwrap_or_default(),
            ),
            EntityType::User => Matches::Users(
                self.table
                    .users
                    .field(self.key)
                    .map(|f| f.lookup(value).to_vec())
                    .unwrap_or_default(),
            ),
            EntityType::Organization => Matches::Organizations(
                self.table
                    .organizations
                    .field(self.key)
                    .map(|f| f.lookup(value).to_vec())
                    .unwrap_or_default(),
            ),
        };

        tracing::debug!(
            entity = %self.entity,
            field = self.field_name,
            hits = matches.len(),
            "Field lookup"
        );

        if matches.is_empty() {
            return Err(SearchError::NoResults);
        }
        Ok(matches)
    }
}
