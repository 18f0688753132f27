/// API route modules
pub mod extract;
pub mod health;
pub mod users;
