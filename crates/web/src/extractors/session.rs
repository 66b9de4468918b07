//! Session identity extractor.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use common::AppError;
use domain::SessionId;

/// Identity of the caller's session, attached by the session middleware.
#[derive(Debug, Clone, Copy)]
pub struct CurrentSession(pub SessionId);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionId>()
            .copied()
            .map(CurrentSession)
            .ok_or_else(|| AppError::internal("Session middleware is not installed"))
    }
}
