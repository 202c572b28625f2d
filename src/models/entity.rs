use serde::Serialize;
use strum::{Display, EnumString};

use super::{Organization, Ticket, User};

/// The three record collections that can be searched.
///
/// Parses from the short menu identifier (`1`, `2`, `3`) or, ignoring ASCII
/// case, from the singular or plural entity name. Displays and serializes as
/// the plural name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, EnumString, Display,
)]
#[strum(ascii_case_insensitive)]
pub enum EntityType {
    #[strum(to_string = "tickets", serialize = "ticket", serialize = "1")]
    #[serde(rename = "tickets")]
    Ticket,

    #[strum(to_string = "users", serialize = "user", serialize = "2")]
    #[serde(rename = "users")]
    User,

    #[strum(to_string = "organizations", serialize = "organization", serialize = "3")]
    #[serde(rename = "organizations")]
    Organization,
}

impl EntityType {
    /// Every entity type, in menu order
    pub const ALL: [EntityType; 3] = [
        EntityType::Ticket,
        EntityType::User,
        EntityType::Organization,
    ];

    /// Stable short identifier used by the interactive menu
    pub fn key(&self) -> &'static str {
        match self {
            EntityType::Ticket => "1",
            EntityType::User => "2",
            EntityType::Organization => "3",
        }
    }

    /// Capitalized plural name for menus
    pub fn label(&self) -> &'static str {
        match self {
            EntityType::Ticket => "Tickets",
            EntityType::User => "Users",
            EntityType::Organization => "Organizations",
        }
    }
}

/// Borrowed reference to a record of any entity type.
///
/// Equality is record identity: two references are equal only when they
/// point at the same record instance.
#[derive(Debug, Clone, Copy)]
pub enum RecordRef<'a> {
    Ticket(&'a Ticket),
    User(&'a User),
    Organization(&'a Organization),
}

impl<'a> RecordRef<'a> {
    pub fn entity_type(&self) -> EntityType {
        match self {
            RecordRef::Ticket(_) => EntityType::Ticket,
            RecordRef::User(_) => EntityType::User,
            RecordRef::Organization(_) => EntityType::Organization,
        }
    }
}

impl PartialEq for RecordRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RecordRef::Ticket(a), RecordRef::Ticket(b)) => std::ptr::eq(*a, *b),
            (RecordRef::User(a), RecordRef::User(b)) => std::ptr::eq(*a, *b),
            (RecordRef::Organization(a), RecordRef::Organization(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl Eq for RecordRef<'_> {}
