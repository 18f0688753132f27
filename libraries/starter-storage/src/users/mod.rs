//! User queries
//!
//! A missing row is reported as `StarterError::UserNotFound` for the write
//! paths and as `None` from [`get_by_id`].

use starter_core::{
    error::Result,
    types::{CreateUser, Pagination, UpdateUser, User, UserId},
    StarterError,
};
use sqlx::SqlitePool;

/// Insert a user and return the stored row
pub async fn create(pool: &SqlitePool, user: CreateUser) -> Result<User> {
    let created = sqlx::query_as::<_, User>(
        "INSERT INTO users (username, email)
         VALUES (?, ?)
         RETURNING id, username, email",
    )
    .bind(&user.username)
    .bind(&user.email)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

/// Get a user by ID
pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, email
         FROM users
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get a page of users ordered by ID
pub async fn list(pool: &SqlitePool, page: Pagination) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, username, email
         FROM users
         ORDER BY id
         LIMIT ? OFFSET ?",
    )
    .bind(page.limit)
    .bind(page.offset)
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Replace username and email of an existing user
pub async fn update(pool: &SqlitePool, id: UserId, user: UpdateUser) -> Result<User> {
    let updated = sqlx::query_as::<_, User>(
        "UPDATE users
         SET username = ?, email = ?
         WHERE id = ?
         RETURNING id, username, email",
    )
    .bind(&user.username)
    .bind(&user.email)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    updated.ok_or(StarterError::UserNotFound(id))
}

/// Delete a user
pub async fn delete(pool: &SqlitePool, id: UserId) -> Result<()> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StarterError::UserNotFound(id));
    }

    Ok(())
}

/// Count all users
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
