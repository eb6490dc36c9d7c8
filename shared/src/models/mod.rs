//! Data models
//!
//! Shared between gate-server and the admin console frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` snowflakes, all timestamps `i64` Unix millis.

pub mod access;
pub mod employee;
pub mod event;

// Re-exports
pub use access::*;
pub use employee::*;
pub use event::*;
