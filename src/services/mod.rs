//! Services coordinating dashboard workflows between routes and the backend.

use thiserror::Error;

use crate::api::errors::ApiError;

pub mod auth;
pub mod lists;
pub mod main;
pub mod phases;
pub mod settings;
pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The session is missing or the backend rejected it.
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("form error: {0}")]
    Form(String),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    /// Backend failure with a message suitable for staff.
    #[error("{0}")]
    Backend(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Logs a backend failure and converts it, keeping the server's own
    /// message when there is one.
    pub fn from_api(err: ApiError, fallback: &str) -> Self {
        match err {
            ApiError::Unauthorized => ServiceError::Unauthorized,
            ApiError::Backend { status: 404, .. } => ServiceError::NotFound,
            err => {
                log::error!("{fallback}: {err}");
                ServiceError::Backend(err.user_message(fallback))
            }
        }
    }
}

/// Converts a form body that could not be decoded at all.
pub fn undecodable_form(err: impl std::fmt::Display) -> ServiceError {
    log::error!("Failed to decode form: {err}");
    ServiceError::Form(err.to_string())
}

/// Success message from the backend, or `fallback` when it sent none.
pub(crate) fn message_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
