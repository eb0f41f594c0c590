//! API error types with IntoResponse
//!
//! Client errors carry a short plain-text body; server errors are logged
//! and answered with an empty body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or rejected input (400)
    Validation(ValidationError),

    /// No row for the given id (404)
    NotFound { resource: &'static str, id: String },

    /// Unique constraint violated (409)
    Conflict { resource: &'static str },

    /// Database or storage failure (500, logged)
    Database(DbError),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "not found");
                (StatusCode::NOT_FOUND, format!("not found: {}", resource)).into_response()
            }
            Self::Conflict { resource } => {
                (StatusCode::CONFLICT, format!("duplicated: {}", resource)).into_response()
            }
            Self::Database(e) => {
                // Log the actual error, return empty body
                tracing::error!("Database error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::Conflict { resource } => Self::Conflict { resource },
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400_with_message() {
        let err = ApiError::Validation(ValidationError::TooLarge {
            field: "file",
            max_bytes: 1_000_000,
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "file exceed 1MByte");
    }

    #[tokio::test]
    async fn not_found_is_404_plain_text() {
        let err = ApiError::from(DbError::NotFound {
            resource: "person",
            id: "1".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "not found: person");
    }

    #[tokio::test]
    async fn conflict_is_409() {
        let err = ApiError::from(DbError::Conflict { resource: "bind" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_text(response).await, "duplicated: bind");
    }

    #[tokio::test]
    async fn database_error_is_500_with_empty_body() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        assert!(matches!(err, ApiError::Database(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(response).await.is_empty());
    }
}
