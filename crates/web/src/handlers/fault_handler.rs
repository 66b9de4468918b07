//! Diagnostic fault injection.

use axum::{routing::get, Router};
use tracing::warn;

use crate::state::AppState;

/// Create fault routes
pub fn fault_routes() -> Router<AppState> {
    Router::new().route("/exception", get(raise_fault))
}

/// Divide by zero at run time.
///
/// The panic is caught by the fault boundary in the router and answered
/// with a generic 500. Nothing after the division runs.
pub async fn raise_fault() -> String {
    warn!("Raising deliberate fault");
    let divisor = std::hint::black_box(0_i32);
    (10 / divisor).to_string()
}
