//! Employee list handler.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};

use common::{AppError, AppResult};

use crate::extractors::CurrentSession;
use crate::state::AppState;
use crate::views::{View, VIEW_EMPLOYEE_LIST};

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new().route("/showList", get(show_list).post(show_list))
}

/// Show the employee list, or send anonymous sessions to the login form
pub async fn show_list(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Response> {
    match state.sessions.current(session).await? {
        Some(name) => render_employee_list(&state, name).await,
        None => Ok(Redirect::to("/").into_response()),
    }
}

/// Render the employee list for a logged-in administrator.
pub(crate) async fn render_employee_list(
    state: &AppState,
    administrator_name: String,
) -> AppResult<Response> {
    let employees = state.employees.list_employees().await?;
    let employees = serde_json::to_value(&employees)
        .map_err(|e| AppError::internal(format!("Serialization error: {}", e)))?;

    let view = View::new(VIEW_EMPLOYEE_LIST)
        .with("administratorName", administrator_name)
        .with("employeeList", employees);
    Ok(state.views.render(view))
}
