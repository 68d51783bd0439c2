use thiserror::Error;

/// Failures talking to the Records Source, one variant per operation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Failed to fetch customers: {0}")]
    FetchFailed(String),

    #[error("Failed to create customer: {0}")]
    CreateFailed(String),

    #[error("Failed to update customer: {0}")]
    UpdateFailed(String),

    #[error("Failed to delete customer: {0}")]
    DeleteFailed(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
