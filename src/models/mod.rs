pub mod entity;
pub mod organization;
pub mod ticket;
pub mod user;

pub use entity::*;
pub use organization::*;
pub use ticket::*;
pub use user::*;

use serde::{Deserialize, Deserializer};

/// Deserialize an explicit `null` as the type's default value
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The three loaded collections.
///
/// Sole owner of every record; indices and search results only borrow from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub tickets: Vec<Ticket>,
    pub users: Vec<User>,
    pub organizations: Vec<Organization>,
}

impl Dataset {
    pub fn new(tickets: Vec<Ticket>, users: Vec<User>, organizations: Vec<Organization>) -> Self {
        Self {
            tickets,
            users,
            organizations,
        }
    }
}
