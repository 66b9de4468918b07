//! Fault boundary for panics escaping a handler.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use tracing::error;

use common::AppError;

/// Turn a caught panic into the generic 500 response.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`; the
/// server keeps serving other requests.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    };

    error!(panic = %detail, "Request handler panicked");
    AppError::internal(detail).into_response()
}
