/// Server services
pub mod users;

pub use users::UserService;

use starter_core::{StarterError, UserId};
use thiserror::Error;

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Outcome of a failed use case
///
/// The transport layer only distinguishes these variants; it never looks at
/// the wrapped store error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No user with this identifier exists
    #[error("user {0} not found")]
    NotFound(UserId),

    /// Payload rejected before reaching the store
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Any other store failure
    #[error("failed to {operation}: {source}")]
    Store {
        operation: &'static str,
        #[source]
        source: StarterError,
    },
}

impl ServiceError {
    /// Wrap a store error without inspecting it
    pub fn store(operation: &'static str, source: StarterError) -> Self {
        Self::Store { operation, source }
    }

    /// Keep the not-found sentinel distinct, wrap everything else
    pub fn from_lookup(operation: &'static str, source: StarterError) -> Self {
        match source {
            StarterError::UserNotFound(id) => Self::NotFound(id),
            other => Self::store(operation, other),
        }
    }

    /// Surface a validation failure from the payload types
    pub fn from_validation(source: StarterError) -> Self {
        match source {
            StarterError::InvalidInput(msg) => Self::InvalidInput(msg),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}
