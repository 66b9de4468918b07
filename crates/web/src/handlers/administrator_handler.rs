//! Administrator handlers: login, registration and logout.

use axum::{
    extract::{Extension, State},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use tracing::debug;

use admin_service_lib::service::{AuthOutcome, RegistrationOutcome};
use common::{AppError, AppResult};
use domain::{
    LoginInput, RegistrationInput, FIELD_MAIL_ADDRESS, FIELD_NAME, MSG_INVALID_CREDENTIALS,
};

use super::employee_handler::render_employee_list;
use crate::extractors::{CurrentSession, FormInput};
use crate::middleware::SessionInvalidated;
use crate::state::AppState;
use crate::views::{View, VIEW_INSERT, VIEW_LOGIN};

/// Create administrator routes
pub fn administrator_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(to_login))
        .route("/toInsert", get(to_insert))
        .route("/insert", post(insert))
        .route("/login", post(login))
        .route("/logout", get(logout).post(logout))
}

/// Show the login form
pub async fn to_login(State(state): State<AppState>) -> Response {
    state.views.render(View::new(VIEW_LOGIN))
}

/// Show the registration form
pub async fn to_insert(State(state): State<AppState>) -> Response {
    state.views.render(View::new(VIEW_INSERT))
}

/// Register an administrator.
///
/// Success redirects to the login form. A rejected form is shown again with
/// its field errors and the submitted name and mail address; passwords are
/// not echoed back.
pub async fn insert(
    State(state): State<AppState>,
    FormInput(input): FormInput<RegistrationInput>,
) -> AppResult<Response> {
    let name = input.name.clone();
    let mail_address = input.mail_address.clone();

    match state.registration.register(input).await? {
        RegistrationOutcome::Registered(_) => Ok(Redirect::to("/").into_response()),
        RegistrationOutcome::Rejected(errors) => {
            let errors = serde_json::to_value(errors.by_field())
                .map_err(|e| AppError::internal(format!("Serialization error: {}", e)))?;
            let view = View::new(VIEW_INSERT)
                .with(FIELD_NAME, name)
                .with(FIELD_MAIL_ADDRESS, mail_address)
                .with("errors", errors);
            Ok(state.views.render(view))
        }
    }
}

/// Log in.
///
/// Success forwards to the employee list within the same response.
pub async fn login(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    FormInput(input): FormInput<LoginInput>,
) -> AppResult<Response> {
    let mail_address = input.mail_address.clone();

    match state.auth.login(session, input).await? {
        AuthOutcome::Success { name } => {
            debug!(session = %session, "Forwarding to employee list");
            render_employee_list(&state, name).await
        }
        AuthOutcome::Failure => {
            let view = View::new(VIEW_LOGIN)
                .with("errorMessage", MSG_INVALID_CREDENTIALS)
                .with(FIELD_MAIL_ADDRESS, mail_address);
            Ok(state.views.render(view))
        }
    }
}

/// Log out and go back to the login form
pub async fn logout(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<impl IntoResponse> {
    state.auth.logout(session).await?;
    Ok((Extension(SessionInvalidated), Redirect::to("/")))
}
