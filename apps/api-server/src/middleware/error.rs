//! Error handling - maps every failure to an empty-bodied status response.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use postboard_core::error::RepoError;

/// Application-level error type.
///
/// The detail is for the logs only; clients get the status code and an empty body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Internal(detail) => tracing::error!("Internal error: {}", detail),
            other => tracing::debug!("{}", other),
        }

        HttpResponse::build(self.status_code()).finish()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Validation(msg) => {
                AppError::Internal(format!("Rejected by store: {}", msg))
            }
            RepoError::Connection(msg) => {
                AppError::Internal(format!("Database connection error: {}", msg))
            }
            RepoError::Query(msg) => AppError::Internal(format!("Database query error: {}", msg)),
            RepoError::Constraint(msg) => {
                AppError::Internal(format!("Constraint violation: {}", msg))
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
