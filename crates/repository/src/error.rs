use domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when interacting with a repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record with the given id exists.
    #[error("{entity} not found with id: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A record with the given id is already stored.
    #[error("{entity} already exists with id: {id}")]
    AlreadyExists { entity: &'static str, id: String },

    /// A stored record no longer satisfies the entity's invariants.
    #[error("Invalid stored record: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
