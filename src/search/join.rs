//! Foreign-key resolution across entity types
//!
//! Every relation is answered from the target entity type's own field index
//! on its identifier or foreign-key field; there is no separate join index.
//! A key with no target simply resolves to nothing.

use crate::index::IndexTable;
use crate::models::{EntityType, Organization, RecordRef, Ticket, User};
use crate::search::error::{SearchError, SearchResult};
use std::str::FromStr;
use strum::{Display, EnumString};

const ID: &str = "id";
const ASSIGNEE_ID: &str = "assigneeid";
const SUBMITTER_ID: &str = "submitterid";
const ORGANIZATION_ID: &str = "organizationid";

/// Named relations between entity types
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum Relation {
    /// Ticket → the user it is assigned to
    #[strum(to_string = "assignee")]
    Assignee,

    /// Ticket → the user who raised it
    #[strum(to_string = "submitter")]
    Submitter,

    /// Ticket or user → owning organization
    #[strum(to_string = "organization")]
    Organization,

    /// User → tickets assigned to them
    #[strum(to_string = "assignedTickets", serialize = "assigned_tickets")]
    AssignedTickets,

    /// User → tickets they raised
    #[strum(to_string = "submittedTickets", serialize = "submitted_tickets")]
    SubmittedTickets,

    /// Organization → its tickets
    #[strum(to_string = "tickets")]
    Tickets,

    /// Organization → its members
    #[strum(to_string = "users")]
    Users,
}

/// Stateless resolver over a built index table
#[derive(Debug, Clone, Copy)]
pub struct JoinResolver<'t, 'a> {
    table: &'t IndexTable<'a>,
}

impl<'t, 'a> JoinResolver<'t, 'a> {
    pub fn new(table: &'t IndexTable<'a>) -> Self {
        Self { table }
    }

    pub fn ticket_assignee(&self, ticket: &Ticket) -> Option<&'a User> {
        self.user_by_id(ticket.assignee_id)
    }

    pub fn ticket_submitter(&self, ticket: &Ticket) -> Option<&'a User> {
        self.user_by_id(ticket.submitter_id)
    }

    pub fn ticket_organization(&self, ticket: &Ticket) -> Option<&'a Organization> {
        self.organization_by_id(ticket.organization_id)
    }

    pub fn user_organization(&self, user: &User) -> Option<&'a Organization> {
        self.organization_by_id(user.organization_id)
    }

    pub fn user_assigned_tickets(&self, user: &User) -> &'t [&'a Ticket] {
        self.tickets_by(ASSIGNEE_ID, user.id)
    }

    pub fn user_submitted_tickets(&self, user: &User) -> &'t [&'a Ticket] {
        self.tickets_by(SUBMITTER_ID, user.id)
    }

    pub fn organization_tickets(&self, organization: &Organization) -> &'t [&'a Ticket] {
        self.tickets_by(ORGANIZATION_ID, organization.id)
    }

    pub fn organization_users(&self, organization: &Organization) -> &'t [&'a User] {
        self.table
            .users
            .field(ORGANIZATION_ID)
            .map(|field| field.get(&organization.id.to_string()))
            .unwrap_or(&[])
    }

    /// Follow `relation` from `record`.
    ///
    /// An unmatched key yields an empty list. Only asking for a relation the
    /// record's entity type does not define is an error.
    pub fn resolve(
        &self,
        record: RecordRef<'a>,
        relation: Relation,
    ) -> SearchResult<Vec<RecordRef<'a>>> {
        let related = match (record, relation) {
            (RecordRef::Ticket(ticket), Relation::Assignee) => {
                self.ticket_assignee(ticket).map(RecordRef::User).into_iter().collect()
            }
            (RecordRef::Ticket(ticket), Relation::Submitter) => {
                self.ticket_submitter(ticket).map(RecordRef::User).into_iter().collect()
            }
            (RecordRef::Ticket(ticket), Relation::Organization) => self
                .ticket_organization(ticket)
                .map(RecordRef::Organization)
                .into_iter()
                .collect(),
            (RecordRef::User(user), Relation::Organization) => self
                .user_organization(user)
                .map(RecordRef::Organization)
                .into_iter()
                .collect(),
            (RecordRef::User(user), Relation::AssignedTickets) => self
                .user_assigned_tickets(user)
                .iter()
                .map(|&t| RecordRef::Ticket(t))
                .collect(),
            (RecordRef::User(user), Relation::SubmittedTickets) => self
                .user_submitted_tickets(user)
                .iter()
                .map(|&t| RecordRef::Ticket(t))
                .collect(),
            (RecordRef::Organization(org), Relation::Tickets) => self
                .organization_tickets(org)
                .iter()
                .map(|&t| RecordRef::Ticket(t))
                .collect(),
            (RecordRef::Organization(org), Relation::Users) => self
                .organization_users(org)
                .iter()
                .map(|&u| RecordRef::User(u))
                .collect(),
            (record, relation) => {
                return Err(unknown_relation(record.entity_type(), &relation.to_string()));
            }
        };

        Ok(related)
    }

    /// [`resolve`](Self::resolve) with the relation given by name
    pub fn resolve_named(
        &self,
        record: RecordRef<'a>,
        relation: &str,
    ) -> SearchResult<Vec<RecordRef<'a>>> {
        let parsed = Relation::from_str(relation.trim())
            .map_err(|_| unknown_relation(record.entity_type(), relation))?;
        self.resolve(record, parsed)
    }

    fn user_by_id(&self, id: Option<i64>) -> Option<&'a User> {
        let id = id?;
        self.table.users.field(ID)?.get(&id.to_string()).first().copied()
    }

    fn organization_by_id(&self, id: Option<i64>) -> Option<&'a Organization> {
        let id = id?;
        self.table.organizations.field(ID)?.get(&id.to_string()).first().copied()
    }

    fn tickets_by(&self, foreign_key: &str, id: i64) -> &'t [&'a Ticket] {
        self.table
            .tickets
            .field(foreign_key)
            .map(|field| field.get(&id.to_string()))
            .unwrap_or(&[])
    }
}

fn unknown_relation(entity: EntityType, relation: &str) -> SearchError {
    SearchError::UnknownRelation {
        entity,
        relation: relation.to_string(),
    }
}
