//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The wire contract fixes duplicate registration at 400, so Conflict
        // keeps its own error code but shares the status with Validation.
        let (status, error, message) = match &self {
            AppError::Conflict(m) => (StatusCode::BAD_REQUEST, "conflict", m.as_str()),
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, "validation_error", m.as_str()),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, "not_found", m.as_str()),
            AppError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, "unauthorized", m.as_str()),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error",
            ),
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::NotFound("row not found".into()),
            // Two concurrent registrations can both pass the email_exists
            // check; the loser's UNIQUE violation is still a conflict, not a
            // server error.
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Duplicate value".into())
            }
            _ => AppError::Internal(e.to_string()),
        }
    }
}

impl From<paquexpress_core::auth::AuthError> for AppError {
    fn from(e: paquexpress_core::auth::AuthError) -> Self {
        match e {
            paquexpress_core::auth::AuthError::CredentialError => {
                AppError::Unauthorized("Invalid credentials".into())
            }
            paquexpress_core::auth::AuthError::TokenError(msg) => AppError::Unauthorized(msg),
            paquexpress_core::auth::AuthError::DbError(e) => AppError::from(e),
            paquexpress_core::auth::AuthError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<paquexpress_core::media::MediaError> for AppError {
    fn from(e: paquexpress_core::media::MediaError) -> Self {
        match e {
            paquexpress_core::media::MediaError::EmptyUpload => {
                AppError::Validation("Empty upload".into())
            }
            paquexpress_core::media::MediaError::Io(e) => AppError::Internal(e.to_string()),
        }
    }
}
