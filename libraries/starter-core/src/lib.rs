//! Starter Core
//!
//! Domain types, the user repository port, and error handling shared by the
//! storage layer and the HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `CreateUser`, `UpdateUser`, `Pagination`
//! - **Ports**: `UserRepository`, implemented by `starter-storage`
//! - **Error Handling**: `StarterError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use starter_core::types::{CreateUser, Pagination};
//!
//! let input = CreateUser::new("alice", "a@x.com");
//! assert!(input.validate().is_ok());
//!
//! let page = Pagination::from_query(Some("25"), Some("-1"));
//! assert_eq!((page.limit, page.offset), (25, 0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

pub use error::{Result, StarterError};
#[cfg(any(test, feature = "mock"))]
pub use storage::MockUserRepository;
pub use storage::UserRepository;
pub use types::{CreateUser, Pagination, UpdateUser, User, UserId};
