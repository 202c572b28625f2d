//! Query layer over the built index table
//!
//! - **Field search**: [`QuerySession`] → [`EntitySelection`] →
//!   [`FieldSelection::lookup`], each step a new value
//! - **Broad search**: one value across every field of every entity type,
//!   deduplicated per entity type
//! - **Joins**: [`JoinResolver`] follows foreign keys through the target
//!   entity type's own field index
//! - **Projection**: [`ResultProjector`] merges matches with related names
//!   and ids into display records
//!
//! # Example
//!
//! ```no_run
//! use desk_search::index::IndexTable;
//! use desk_search::models::Dataset;
//! use desk_search::search::{QuerySession, ResultProjector};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = Dataset::default();
//! let table = IndexTable::build(&dataset)?;
//! let session = QuerySession::new(&table);
//!
//! let matches = session
//!     .select_entity("tickets")?
//!     .select_field("status")?
//!     .lookup("pending")?;
//!
//! let projection = ResultProjector::new(&table).project(&matches);
//! println!("{}", serde_json::to_string_pretty(&projection)?);
//! # Ok(())
//! # }
//! ```

mod broad;
mod error;
mod join;
mod projector;
mod session;

pub use broad::{broad_search, BroadMatches};
pub use error::{SearchError, SearchResult};
pub use join::{JoinResolver, Relation};
pub use projector::{
    BroadProjection, OrganizationView, Projection, ResultProjector, TicketView, UserView,
};
pub use session::{EntitySelection, FieldSelection, Matches, QuerySession};
