//! Application errors and their HTTP rendering.
//!
//! `AppError` covers infrastructure and unexpected failures only. Expected
//! outcomes of the administrator workflows (form errors, rejected logins)
//! are values and never become an `AppError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not found")]
    NotFound,

    /// A store uniqueness constraint rejected a write
    #[error("{0} already exists")]
    Conflict(String),

    /// The request could not be interpreted at all
    #[error("{0}")]
    MalformedRequest(String),

    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[cfg(feature = "cache")]
    #[error("Cache error")]
    Cache(#[from] redis::RedisError),

    #[error("Internal server error")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: String,
}

impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        AppError::MalformedRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        self.classify().1
    }

    pub fn status(&self) -> StatusCode {
        self.classify().0
    }

    fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            AppError::MalformedRequest(_) => (StatusCode::BAD_REQUEST, "MALFORMED_REQUEST"),
            #[cfg(feature = "database")]
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            #[cfg(feature = "cache")]
            AppError::Cache(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CACHE_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// Message safe to show to the client.
    ///
    /// Server-side failures are logged here with their detail and answered
    /// with a fixed sentence.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound | AppError::Conflict(_) | AppError::MalformedRequest(_) => {
                self.to_string()
            }
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!(error = ?e, "Database failure");
                "A database error occurred".to_string()
            }
            #[cfg(feature = "cache")]
            AppError::Cache(e) => {
                tracing::error!(error = ?e, "Session store failure");
                "A session store error occurred".to_string()
            }
            AppError::Internal(detail) => {
                tracing::error!(detail = %detail, "Internal failure");
                "An internal error occurred".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let envelope = ErrorEnvelope {
            error: ErrorDetail {
                code: self.code(),
                message: self.user_message(),
            },
        };

        (self.status(), Json(envelope)).into_response()
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::MalformedRequest(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::conflict("Administrator").status(), StatusCode::CONFLICT);
        assert_eq!(AppError::malformed("bad").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_domain_error_is_malformed_request() {
        let err = AppError::from(DomainError::validation("Malformed session identifier"));
        assert_eq!(err.code(), "MALFORMED_REQUEST");
        assert_eq!(err.user_message(), "Malformed session identifier");
    }

    #[test]
    fn test_conflict_message() {
        assert_eq!(
            AppError::conflict("Administrator").user_message(),
            "Administrator already exists"
        );
    }

    #[tokio::test]
    async fn test_internal_details_are_hidden() {
        let response = AppError::internal("connection string leaked").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"]["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let json = body_json(AppError::NotFound.into_response()).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "Resource not found");
    }
}
