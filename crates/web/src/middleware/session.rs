//! Session cookie middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::debug;

use common::SessionConfig;
use domain::SessionId;

use crate::state::AppState;

/// Response marker asking the middleware to expire the session cookie.
#[derive(Debug, Clone, Copy)]
pub struct SessionInvalidated;

/// Attach a [`SessionId`] to every request.
///
/// The identity comes from the session cookie when it holds a well-formed
/// value; otherwise a fresh identity is generated and the cookie is set on
/// the response.
pub async fn session_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let config = &state.session_config;
    let existing = jar
        .get(&config.cookie_name)
        .and_then(|cookie| cookie.value().parse::<SessionId>().ok());

    let (session, issued) = match existing {
        Some(id) => (id, false),
        None => {
            let id = SessionId::generate();
            debug!(session = %id, "Issuing new session");
            (id, true)
        }
    };

    request.extensions_mut().insert(session);
    let response = next.run(request).await;

    if response.extensions().get::<SessionInvalidated>().is_some() {
        let removal = Cookie::build((config.cookie_name.clone(), "")).path("/");
        (jar.remove(removal), response).into_response()
    } else if issued {
        (jar.add(session_cookie(config, session)), response).into_response()
    } else {
        response
    }
}

fn session_cookie(config: &SessionConfig, session: SessionId) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), session.to_string()))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .build()
}
