//! Form extractor with application-level rejections.

use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;

use common::AppError;

/// URL-encoded form extractor.
///
/// Field-level checks are left to the workflows, which report them as
/// re-rendered forms. Only a body that is not a form at all is rejected
/// here, as an [`AppError::MalformedRequest`].
pub struct FormInput<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for FormInput<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Form<T>: FromRequest<S, Rejection = FormRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::malformed(e.body_text()))?;

        Ok(FormInput(value))
    }
}
