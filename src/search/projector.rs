//! Denormalized display records built from matches and their relations

use crate::index::IndexTable;
use crate::models::{EntityType, Organization, Ticket, User};
use crate::search::broad::BroadMatches;
use crate::search::join::JoinResolver;
use crate::search::session::Matches;
use serde::Serialize;
use std::collections::BTreeMap;

/// A ticket with the names of the records it points at
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketView<'a> {
    #[serde(flatten)]
    pub ticket: &'a Ticket,
    pub assignee_name: String,
    pub submitter_name: String,
    pub organization_name: String,
}

/// A user with their organization name and related ticket ids
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserView<'a> {
    #[serde(flatten)]
    pub user: &'a User,
    pub organization_name: String,
    pub assigned_ticket_ids: Vec<String>,
    pub submitted_ticket_ids: Vec<String>,
}

/// An organization with its ticket ids and member names
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationView<'a> {
    #[serde(flatten)]
    pub organization: &'a Organization,
    pub ticket_ids: Vec<String>,
    pub user_names: Vec<String>,
}

/// Display records for one entity type, in match order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Projection<'a> {
    Tickets(Vec<TicketView<'a>>),
    Users(Vec<UserView<'a>>),
    Organizations(Vec<OrganizationView<'a>>),
}

impl Projection<'_> {
    pub fn len(&self) -> usize {
        match self {
            Projection::Tickets(views) => views.len(),
            Projection::Users(views) => views.len(),
            Projection::Organizations(views) => views.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Broad search results keyed by entity type
pub type BroadProjection<'a> = BTreeMap<EntityType, Projection<'a>>;

/// Turns matches into display records.
///
/// Never fails: a relation that resolves to nothing contributes an empty
/// name or an empty id list, and the matched record is kept.
#[derive(Debug, Clone, Copy)]
pub struct ResultProjector<'t, 'a> {
    resolver: JoinResolver<'t, 'a>,
}

impl<'t, 'a> ResultProjector<'t, 'a> {
    pub fn new(table: &'t IndexTable<'a>) -> Self {
        Self {
            resolver: JoinResolver::new(table),
        }
    }

    pub fn project(&self, matches: &Matches<'a>) -> Projection<'a> {
        match matches {
            Matches::Tickets(tickets) => {
                Projection::Tickets(tickets.iter().map(|&t| self.project_ticket(t)).collect())
            }
            Matches::Users(users) => {
                Projection::Users(users.iter().map(|&u| self.project_user(u)).collect())
            }
            Matches::Organizations(organizations) => Projection::Organizations(
                organizations
                    .iter()
                    .map(|&o| self.project_organization(o))
                    .collect(),
            ),
        }
    }

    pub fn project_broad(&self, matches: &BroadMatches<'a>) -> BroadProjection<'a> {
        matches
            .iter()
            .map(|(entity, entity_matches)| (*entity, self.project(entity_matches)))
            .collect()
    }

    pub fn project_ticket(&self, ticket: &'a Ticket) -> TicketView<'a> {
        let assignee = self.resolver.ticket_assignee(ticket);
        let submitter = self.resolver.ticket_submitter(ticket);
        let organization = self.resolver.ticket_organization(ticket);

        if ticket.organization_id.is_some() && organization.is_none() {
            tracing::debug!(
                ticket_id = %ticket.id,
                organization_id = ?ticket.organization_id,
                "Ticket references unknown organization"
            );
        }

        TicketView {
            ticket,
            assignee_name: user_name(assignee),
            submitter_name: user_name(submitter),
            organization_name: organization_name(organization),
        }
    }

    pub fn project_user(&self, user: &'a User) -> UserView<'a> {
        UserView {
            user,
            organization_name: organization_name(self.resolver.user_organization(user)),
            assigned_ticket_ids: ticket_ids(self.resolver.user_assigned_tickets(user)),
            submitted_ticket_ids: ticket_ids(self.resolver.user_submitted_tickets(user)),
        }
    }

    pub fn project_organization(&self, organization: &'a Organization) -> OrganizationView<'a> {
        OrganizationView {
            organization,
            ticket_ids: ticket_ids(self.resolver.organization_tickets(organization)),
            user_names: self
                .resolver
                .organization_users(organization)
                .iter()
                .map(|user| user.name.clone())
                .collect(),
        }
    }
}

fn user_name(user: Option<&User>) -> String {
    user.map(|u| u.name.clone()).unwrap_or_default()
}

fn organization_name(organization: Option<&Organization>) -> String {
    organization.map(|o| o.name.clone()).unwrap_or_default()
}

fn ticket_ids(tickets: &[&Ticket]) -> Vec<String> {
    tickets.iter().map(|t| t.id.clone()).collect()
}
