//! Shared types for the Cafe API
//!
//! Menu models and the unified error system, used by the HTTP service
//! and by anything that talks to it.

pub mod error;
pub mod models;
