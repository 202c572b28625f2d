use crate::index::IndexError;
use crate::loader::LoadError;
use crate::search::SearchError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// A collection could not be read or parsed
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The index table could not be built
    #[error(transparent)]
    Index(#[from] IndexError),

    /// A query failed
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Whether the interactive session can carry on after this error.
    ///
    /// Load and index failures abort startup; query failures do not.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Search(_))
    }

    /// Get error code string
    pub fn error_code(&self) -> &str {
        match self {
            AppError::Load(LoadError::Read { .. }) => "LOAD_READ_ERROR",
            AppError::Load(LoadError::Parse { .. }) => "LOAD_PARSE_ERROR",
            AppError::Index(IndexError::EmptyCollection(_)) => "EMPTY_COLLECTION",
            AppError::Search(SearchError::UnknownSearchMode(_)) => "UNKNOWN_SEARCH_MODE",
            AppError::Search(SearchError::UnknownEntityType(_)) => "UNKNOWN_ENTITY_TYPE",
            AppError::Search(SearchError::UnknownField { .. }) => "UNKNOWN_FIELD",
            AppError::Search(SearchError::NoResults) => "NO_RESULTS",
            AppError::Search(SearchError::UnknownRelation { .. }) => "UNKNOWN_RELATION",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

/// Conversion from serde_json::Error
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Conversion from config::ConfigError
impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityType;

    #[test]
    fn test_query_errors_are_recoverable() {
        assert!(AppError::from(SearchError::NoResults).is_recoverable());
        assert!(AppError::from(SearchError::UnknownEntityType("9".to_string())).is_recoverable());
        assert!(!AppError::from(IndexError::EmptyCollection(EntityType::User)).is_recoverable());
        assert!(!AppError::Configuration("bad".to_string()).is_recoverable());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::from(SearchError::NoResults).error_code(), "NO_RESULTS");
        assert_eq!(
            AppError::from(IndexError::EmptyCollection(EntityType::Ticket)).error_code(),
            "EMPTY_COLLECTION"
        );
        assert_eq!(
            AppError::Configuration("test".to_string()).error_code(),
            "CONFIGURATION_ERROR"
        );
    }

    #[test]
    fn test_messages_pass_through() {
        let err = AppError::from(IndexError::EmptyCollection(EntityType::Organization));
        assert_eq!(err.to_string(), "Cannot index empty organizations collection");
        assert_eq!(AppError::from(SearchError::NoResults).to_string(), "No results found");
    }
}
