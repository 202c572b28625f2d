//! Error types for query operations

use crate::models::EntityType;

/// Result type for query operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Errors a query can end with.
///
/// None of these are fatal: the caller reports them and may retry with a
/// different selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Menu choice did not name a search mode
    #[error("There is no search mode matching '{0}'")]
    UnknownSearchMode(String),

    /// Selection did not name a known entity type
    #[error("There is no entity type matching '{0}'")]
    UnknownEntityType(String),

    /// Selection did not name a field of the chosen entity type
    #[error("No field '{field}' found on {entity}")]
    UnknownField { entity: EntityType, field: String },

    /// Valid selection with nothing stored under the value
    #[error("No results found")]
    NoResults,

    /// Relation is not defined for the record's entity type
    #[error("Relation '{relation}' is not defined for {entity}")]
    UnknownRelation { entity: EntityType, relation: String },
}
