//! Route configuration.

use axum::{middleware, Router};
use tower_http::catch_panic::CatchPanicLayer;

use common::AppError;

use crate::handlers::{administrator_routes, employee_routes, fault_routes};
use crate::middleware::{handle_panic, session_middleware};
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(administrator_routes())
        .merge(fault_routes())
        .nest("/employee", employee_routes())
        .fallback(not_found)
        // Panics become a generic 500 inside the session layer
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
