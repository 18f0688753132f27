/// User domain types
use crate::error::{Result, StarterError};
use serde::{Deserialize, Serialize};

/// Store-assigned user identifier
pub type UserId = i64;

/// User account
///
/// Serialized as `{"id": 1, "username": "alice", "email": "a@x.com"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct User {
    /// Unique identifier, immutable once assigned
    pub id: UserId,

    /// Login name
    pub username: String,

    /// Contact address
    pub email: String,
}

/// Data for creating a new user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login name
    pub username: String,
    /// Contact address
    pub email: String,
}

/// Replacement values for an existing user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New login name
    pub username: String,
    /// New contact address
    pub email: String,
}

impl CreateUser {
    /// Build a create payload
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    /// Reject blank fields
    ///
    /// # Errors
    /// Returns `StarterError::InvalidInput` naming the first blank field
    pub fn validate(&self) -> Result<()> {
        require_non_blank("username", &self.username)?;
        require_non_blank("email", &self.email)
    }
}

impl UpdateUser {
    /// Build an update payload
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    /// Reject blank fields
    ///
    /// # Errors
    /// Returns `StarterError::InvalidInput` naming the first blank field
    pub fn validate(&self) -> Result<()> {
        require_non_blank("username", &self.username)?;
        require_non_blank("email", &self.email)
    }
}

fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StarterError::invalid_input(format!("{field} must not be empty")));
    }
    Ok(())
}
