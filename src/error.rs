// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse};

use crate::database::manager::DatabaseError;
use crate::validate::ValidationError;

/// HTTP API error with appropriate status codes and client-friendly messages.
///
/// Error bodies are plain text: the admin frontend collapses every non-2xx
/// response into a single generic toast, so nothing richer is consumed.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request (missing or malformed field)
    BadRequest(String),

    // 401 - no identity was established for the request
    Unauthenticated(String),

    // 403 - identity exists but the store does not belong to it
    Unauthorized(String),

    // 500 - catch-all for storage failures, including referential conflicts
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized(_) => StatusCode::FORBIDDEN,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::Unauthenticated(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthenticated() -> Self {
        ApiError::Unauthenticated("Unauthenticated".to_string())
    }

    pub fn unauthorized() -> Self {
        ApiError::Unauthorized("Unauthorized".to_string())
    }

    pub fn internal_server_error() -> Self {
        ApiError::InternalServerError("Internal Server Error".to_string())
    }

    /// Flatten a storage failure to a generic 500, logging the real error
    /// under the calling route's label. Clients never see the distinction
    /// between a constraint violation and an unreachable database.
    pub fn storage(label: &str, err: DatabaseError) -> Self {
        tracing::error!("[{}] {}", label, err);
        ApiError::internal_server_error()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        (status, self.message().to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(ApiError::bad_request("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::unauthenticated().status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::unauthorized().status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::internal_server_error().status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_errors_become_bad_requests() {
        let err: ApiError = ValidationError::MissingField("Label").into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Label is required");
    }

    #[test]
    fn storage_errors_flatten_to_generic_500() {
        let err = ApiError::storage("BILLBOARD", DatabaseError::ReferentialConflict);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Internal Server Error");
    }
}
