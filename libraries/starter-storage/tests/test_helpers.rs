//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! so every pooled connection sees the same schema and rows.

#![allow(dead_code)]

use starter_core::types::{CreateUser, User};
use sqlx::SqlitePool;
use starter_storage::PoolSettings;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = starter_storage::create_pool(&db_url, &PoolSettings::default())
            .await
            .expect("Failed to create pool");

        starter_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: Insert a user through the storage slice
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> User {
    starter_storage::users::create(
        pool,
        CreateUser::new(username, format!("{username}@example.com")),
    )
    .await
    .expect("Failed to create test user")
}
