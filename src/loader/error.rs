//! Error types for loading record collections

use crate::models::EntityType;
use std::path::PathBuf;

/// Result type for load operations
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Errors raised while reading or parsing a collection
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Collection file could not be read
    #[error("Failed to read {collection} from {}: {source}", path.display())]
    Read {
        collection: EntityType,
        path: PathBuf,
        source: std::io::Error,
    },

    /// Collection file is not a valid record array
    #[error("Failed to parse {collection}: {source}")]
    Parse {
        collection: EntityType,
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Collection the error belongs to
    pub fn collection(&self) -> EntityType {
        match self {
            LoadError::Read { collection, .. } | LoadError::Parse { collection, .. } => *collection,
        }
    }
}
