//! Form definitions backing the dashboard routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod auth;
pub mod phases;
pub mod settings;
pub mod wallet;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid record id")]
    InvalidId,

    #[error("invalid amount")]
    InvalidAmount,

    #[error("invalid name")]
    InvalidName,

    #[error("every entry needs both a key and a value")]
    MismatchedEntries,

    #[error("duplicate key: {0}")]
    DuplicateKey(String),
}

impl From<TypeConstraintError> for FormError {
    fn from(err: TypeConstraintError) -> Self {
        match err {
            TypeConstraintError::InvalidId => FormError::InvalidId,
            TypeConstraintError::InvalidAmount | TypeConstraintError::InvalidValue(_) => {
                FormError::InvalidAmount
            }
            TypeConstraintError::EmptyString => FormError::InvalidName,
        }
    }
}
