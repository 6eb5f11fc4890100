//! cafe-api: restaurant menu service
//!
//! CRUD over menu items, backed by SQLite and served as JSON over HTTP:
//! - `api`: routes, handlers and extractors
//! - `db`: connection pool, schema bootstrap and persistence operations
//! - `config` / `state`: startup configuration and shared state

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod state;

pub use config::Config;
pub use state::AppState;
