//! Data models
//!
//! Shared between the HTTP service and its clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod menu_item;
mod presence;

// Re-exports
pub use menu_item::*;
