//! User use cases
//!
//! Each method performs exactly one repository call. The lookups (get,
//! update, delete) translate the store's not-found sentinel into
//! [`ServiceError::NotFound`]; create and list wrap every store failure.

use super::{ServiceError, ServiceResult};
use starter_core::{CreateUser, Pagination, UpdateUser, User, UserId, UserRepository};
use std::sync::Arc;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_user(&self, input: CreateUser) -> ServiceResult<User> {
        tracing::info!(username = %input.username, email = %input.email, "Creating user");
        input.validate().map_err(ServiceError::from_validation)?;

        self.repository.create(input).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create user");
            ServiceError::store("create user", e)
        })
    }

    pub async fn list_users(&self, page: Pagination) -> ServiceResult<Vec<User>> {
        tracing::info!(limit = page.limit, offset = page.offset, "Fetching users");

        self.repository.list(page).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch users");
            ServiceError::store("fetch users", e)
        })
    }

    pub async fn get_user(&self, id: UserId) -> ServiceResult<User> {
        tracing::info!(id, "Fetching user");

        self.repository
            .get(id)
            .await
            .map_err(|e| lookup_failure("fetch user", e))
    }

    pub async fn update_user(&self, id: UserId, input: UpdateUser) -> ServiceResult<User> {
        tracing::info!(id, username = %input.username, email = %input.email, "Updating user");
        input.validate().map_err(ServiceError::from_validation)?;

        self.repository
            .update(id, input)
            .await
            .map_err(|e| lookup_failure("update user", e))
    }

    pub async fn delete_user(&self, id: UserId) -> ServiceResult<()> {
        tracing::info!(id, "Deleting user");

        self.repository
            .delete(id)
            .await
            .map_err(|e| lookup_failure("delete user", e))
    }
}

fn lookup_failure(operation: &'static str, error: starter_core::StarterError) -> ServiceError {
    let error = ServiceError::from_lookup(operation, error);
    if !matches!(error, ServiceError::NotFound(_)) {
        tracing::error!(error = %error, "User lookup failed");
    }
    error
}
