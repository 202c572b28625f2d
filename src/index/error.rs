//! Error types for index construction

use crate::models::EntityType;

/// Result type for index operations
pub type IndexResult<T> = std::result::Result<T, IndexError>;

/// Errors that can occur while building indices
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// Nothing to derive a schema from
    #[error("Cannot index empty {0} collection")]
    EmptyCollection(EntityType),
}
