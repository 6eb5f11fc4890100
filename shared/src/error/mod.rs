//! Unified error system for the Cafe API
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ErrorResponse`]: Wire format of every error body
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Menu errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorResponse};
//!
//! let err = AppError::new(ErrorCode::MenuItemNotFound);
//! assert_eq!(err.message, "Item not found");
//!
//! let err = AppError::validation("Invalid price")
//!     .with_detail("price", "must be greater than 0");
//!
//! let body = ErrorResponse::from(&err);
//! assert_eq!(body.detail, "Invalid price");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorResponse};
