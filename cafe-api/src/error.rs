//! Persistence error type for cafe-api
//!
//! `DbError` bridges storage errors (`sqlx::Error`) and the API-layer error
//! (`AppError`). Persistence operations return it, handlers propagate it
//! with `?`, and the conversion below decides the response code.

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Persistence error, only two kinds
///
/// - `ConstraintViolation`: a write was rejected by the unique index on `name`
/// - `Database`: anything else the store reports (I/O, pool, decode)
#[derive(Debug, Error)]
pub enum DbError {
    /// Uniqueness rule rejected the write (carries the storage message)
    #[error("{0}")]
    ConstraintViolation(String),
    /// Any other storage failure
    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DbError::ConstraintViolation(db.message().to_string())
            }
            _ => DbError::Database(e),
        }
    }
}

impl From<DbError> for AppError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::ConstraintViolation(msg) => {
                AppError::name_conflict(msg).with_detail("field", "name")
            }
            DbError::Database(db_err) => {
                tracing::error!(error = %db_err, "Database error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

/// Convenience type alias for persistence results
pub type DbResult<T> = Result<T, DbError>;
