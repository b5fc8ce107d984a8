//! Error types for QBank server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes exposed in JSON error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    NotAuthenticated = 2,
    InvalidToken = 3,
    Forbidden = 4,
    BadValue = 5,
    DbFailure = 6,
    ProviderFailure = 7,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed Authorization header
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The identity provider rejected the token or returned no claims
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Authenticated but the role does not permit the operation
    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The verification call to the identity provider itself failed
    #[error("Identity provider error: {0}")]
    Provider(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Authentication(msg) => {
                (StatusCode::UNAUTHORIZED, ErrorCode::NotAuthenticated, msg.clone())
            }
            AppError::InvalidToken(msg) => {
                (StatusCode::UNAUTHORIZED, ErrorCode::InvalidToken, msg.clone())
            }
            AppError::Authorization(msg) => {
                (StatusCode::FORBIDDEN, ErrorCode::Forbidden, msg.clone())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
            AppError::Provider(msg) => {
                tracing::error!("Identity provider call failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::ProviderFailure,
                    "Server error during authentication".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_map_to_401() {
        let missing = AppError::Authentication("Unauthorized access".into()).into_response();
        assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

        let rejected = AppError::InvalidToken("Invalid token".into()).into_response();
        assert_eq!(rejected.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn role_failure_maps_to_403() {
        let resp = AppError::Authorization("forbidden access".into()).into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn validation_is_distinct_from_server_error() {
        let resp = AppError::Validation("yearAsked must be an integer".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = AppError::Provider("connection refused".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
