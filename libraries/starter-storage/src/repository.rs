use crate::users;
use async_trait::async_trait;
use starter_core::{
    error::Result,
    storage::UserRepository,
    types::{CreateUser, Pagination, UpdateUser, User, UserId},
    StarterError,
};
use sqlx::SqlitePool;

/// `SQLite`-backed user repository
#[derive(Debug, Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: CreateUser) -> Result<User> {
        users::create(&self.pool, user).await
    }

    async fn get(&self, id: UserId) -> Result<User> {
        users::get_by_id(&self.pool, id)
            .await?
            .ok_or(StarterError::UserNotFound(id))
    }

    async fn list(&self, page: Pagination) -> Result<Vec<User>> {
        users::list(&self.pool, page).await
    }

    async fn update(&self, id: UserId, user: UpdateUser) -> Result<User> {
        users::update(&self.pool, id, user).await
    }

    async fn delete(&self, id: UserId) -> Result<()> {
        users::delete(&self.pool, id).await
    }
}
