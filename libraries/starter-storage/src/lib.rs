//! Starter Storage
//!
//! `SQLite` data-access layer for the user resource.
//!
//! Each table owns a vertical slice of query functions (`users`), and
//! [`SqliteUserRepository`] exposes that slice through the
//! [`starter_core::UserRepository`] port.
//!
//! # Example
//!
//! ```rust,no_run
//! use starter_core::{CreateUser, UserRepository};
//! use starter_storage::{create_pool, run_migrations, PoolSettings, SqliteUserRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://starter.db", &PoolSettings::default()).await?;
//! run_migrations(&pool).await?;
//!
//! let repository = SqliteUserRepository::new(pool);
//! let user = repository.create(CreateUser::new("alice", "a@x.com")).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod repository;

// Vertical slices
pub mod users;

pub use error::StorageError;
pub use repository::SqliteUserRepository;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connection pool tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    /// Upper bound on open connections
    pub max_connections: u32,
    /// How long to wait for a connection before failing
    pub acquire_timeout: Duration,
    /// Connections older than this are closed and replaced
    pub max_lifetime: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 25,
            acquire_timeout: Duration::from_secs(5),
            max_lifetime: Duration::from_secs(300),
        }
    }
}

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    tracing::debug!("Database migrations applied");
    Ok(())
}

/// Create a new `SQLite` pool and verify it answers queries
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://starter.db>`)
/// * `settings` - Pool size and timeouts
///
/// # Errors
///
/// Returns an error if the URL is invalid or the database does not respond
pub async fn create_pool(
    database_url: &str,
    settings: &PoolSettings,
) -> Result<SqlitePool, StorageError> {
    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url).map_err(StorageError::Connection)?;
    create_parent_dir(options.get_filename())?;

    let options = options
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .max_lifetime(settings.max_lifetime)
        .connect_with(options)
        .await
        .map_err(StorageError::Connection)?;

    ping(&pool).await?;
    Ok(pool)
}

// SQLite creates the file but not the directories leading to it
fn create_parent_dir(db_path: &Path) -> Result<(), StorageError> {
    let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };

    std::fs::create_dir_all(parent).map_err(|source| StorageError::Directory {
        path: parent.to_path_buf(),
        source,
    })
}

/// Round-trip a trivial query through the pool
///
/// # Errors
///
/// Returns `StorageError::Connection` if the database does not respond
pub async fn ping(pool: &SqlitePool) -> Result<(), StorageError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(StorageError::Connection)?;
    Ok(())
}
