//! Starter Server Library
//!
//! JSON CRUD API for the user resource plus a server-rendered landing page.
//!
//! Requests flow through three layers: the handlers in [`api`] decode input
//! and encode responses, [`services::UserService`] performs one repository
//! call per use case and owns the not-found translation, and
//! `starter-storage` runs the SQL.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod services;
pub mod state;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use routes::{build_router, create_router};
pub use services::{ServiceError, UserService};
pub use state::AppState;
