//! Domain types

mod pagination;
mod user;

pub use pagination::Pagination;
pub use user::{CreateUser, UpdateUser, User, UserId};
