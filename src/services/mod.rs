//! Presentation-layer workflows over the Records Source.
//!
//! Services are generic over the repository traits so they can be exercised
//! against [`crate::repository::mock::MockRepository`].

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod customer;
pub mod main;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Entity not found")]
    NotFound,

    #[error("{0}")]
    Form(String),

    #[error("Type constraint violation: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
