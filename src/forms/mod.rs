//! Form definitions backing the customer routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod customer;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid name")]
    InvalidName,

    #[error("invalid contact")]
    InvalidContact,

    #[error("invalid AMC start date")]
    InvalidStartDate,

    #[error("invalid AMC end date")]
    InvalidEndDate,

    #[error("AMC end date is before the start date")]
    EndBeforeStart,
}
