//! In-memory field indexing
//!
//! Every record collection is turned into an [`EntityIndex`]: one inverted
//! [`FieldIndex`] per declared field, mapping the lowercase textual form of a
//! value to the records holding it.
//!
//! ```text
//! IndexTable
//!   ├── tickets        ── "status" ── "pending" ─▶ [&t1, &t2]
//!   │                   └ "tags"   ── "ohio"    ─▶ [&t1]
//!   ├── users          ── "id"     ── "1"       ─▶ [&u1]
//!   └── organizations  ── ...
//! ```
//!
//! Field sets come from the static descriptor table each record type
//! declares through [`Record`], so no runtime introspection is involved.

mod error;
mod field;
mod indexer;
mod table;

pub use error::{IndexError, IndexResult};
pub use field::{canonicalize, FieldDescriptor, FieldType, FieldValue, Record};
pub use indexer::{build_index, EntityIndex, FieldIndex};
pub use table::{FieldSummary, IndexTable};
