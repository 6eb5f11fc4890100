//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    ///
    /// Name conflicts are reported as 400.
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::MenuItemNotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request
            Self::ValidationFailed | Self::InvalidRequest | Self::MenuItemNameExists => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}
