//! Gallery error types with HTTP status code mapping.
//!
//! [`GalleryError`] is the central error type. Each variant maps to an HTTP
//! status code and a JSON body of the shape `{"message": ..., "code": ...}`.
//! Server-side failures are logged with their details and answered with a
//! generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{LocationId, PagerError};

/// Message returned for every server-side failure.
pub const GENERIC_ERROR_MESSAGE: &str = "Some error occurred while retrieving locations.";

/// JSON error response body.
///
/// ```json
/// { "message": "Location with id=7 not found", "code": 2001 }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub message: String,
    /// Numeric error code.
    pub code: u32,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category  | HTTP Status               |
/// |-----------|-----------|---------------------------|
/// | 1000–1999 | Request   | 400 Bad Request, 408      |
/// | 2000–2999 | Not Found | 404 Not Found             |
/// | 3000–3999 | Server    | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// No location exists with the given id.
    #[error("Location with id={0} not found")]
    LocationNotFound(LocationId),

    /// Request parameters could not be interpreted.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The request did not complete within the configured limit.
    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The backing store failed.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// The pager was called with a broken configuration.
    #[error("pagination error: {0}")]
    Pager(#[from] PagerError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GalleryError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::Timeout(_) => 1002,
            Self::LocationNotFound(_) => 2001,
            Self::Internal(_) => 3000,
            Self::Persistence(_) => 3001,
            Self::Pager(_) => 3002,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            Self::LocationNotFound(_) => StatusCode::NOT_FOUND,
            Self::Persistence(_) | Self::Pager(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to clients.
    #[must_use]
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for GalleryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        let body = ErrorResponse {
            message: self.public_message(),
            code: self.error_code(),
        };
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_with_id_in_message() {
        let err = GalleryError::LocationNotFound(LocationId::new(7));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "Location with id=7 not found");
    }

    #[test]
    fn server_errors_hide_details() {
        let err = GalleryError::Persistence("connection refused".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), GENERIC_ERROR_MESSAGE);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn pager_errors_are_server_errors() {
        let err = GalleryError::from(PagerError::ZeroPageSize);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), 3002);
    }

    #[test]
    fn invalid_request_is_400() {
        let err = GalleryError::InvalidRequest("bad order".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "invalid request: bad order");
    }

    #[test]
    fn timeout_is_408_with_its_own_code() {
        let err = GalleryError::Timeout(std::time::Duration::from_secs(30));
        assert_eq!(err.status_code(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(err.error_code(), 1002);
        assert_eq!(err.public_message(), "request timed out after 30s");
    }

    #[test]
    fn into_response_sets_status() {
        let response = GalleryError::LocationNotFound(LocationId::new(1)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
