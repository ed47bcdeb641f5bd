//! Application error types.

use domain::ValidationError;
use repository::RepositoryError;
use thiserror::Error;

/// Errors surfaced by the application services.
#[derive(Debug, Error)]
pub enum AppError {
    /// A domain invariant rejected the request.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Loading or storing an entity failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Result type for application service operations.
pub type Result<T> = std::result::Result<T, AppError>;
