//! Storage port for the user resource

use crate::error::Result;
use crate::types::{CreateUser, Pagination, UpdateUser, User, UserId};
use async_trait::async_trait;

/// Data-access operations over the `users` table
///
/// Implementations report a missing row as [`StarterError::UserNotFound`]
/// and every other failure as a different variant, so callers never have to
/// inspect error text.
///
/// [`StarterError::UserNotFound`]: crate::StarterError::UserNotFound
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; the store assigns the identifier
    async fn create(&self, user: CreateUser) -> Result<User>;

    /// Fetch one user by identifier
    async fn get(&self, id: UserId) -> Result<User>;

    /// Fetch a page of users ordered by identifier
    async fn list(&self, page: Pagination) -> Result<Vec<User>>;

    /// Replace username and email of an existing user
    async fn update(&self, id: UserId, user: UpdateUser) -> Result<User>;

    /// Remove a user
    async fn delete(&self, id: UserId) -> Result<()>;
}
