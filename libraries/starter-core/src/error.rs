/// Core error types for Starter
use crate::types::UserId;
use thiserror::Error;

/// Result type alias using `StarterError`
pub type Result<T> = std::result::Result<T, StarterError>;

/// Core error type shared by the storage layer and its callers
///
/// `UserNotFound` is the only variant callers are expected to match on; it is
/// the typed "no rows" signal produced by the data-access layer.
#[derive(Error, Debug)]
pub enum StarterError {
    /// No user row matched the identifier
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Input rejected before reaching the store
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Errors reported by the database driver
    #[error("Database error: {0}")]
    Database(String),
}

impl StarterError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether this error is the not-found sentinel
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_))
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for StarterError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_user_not_found_is_the_sentinel() {
        assert!(StarterError::UserNotFound(7).is_not_found());
        assert!(!StarterError::Database("user not found in cache".into()).is_not_found());
        assert!(!StarterError::invalid_input("not found").is_not_found());
    }

    #[test]
    fn display_includes_identifier() {
        assert_eq!(StarterError::UserNotFound(42).to_string(), "User not found: 42");
    }
}
