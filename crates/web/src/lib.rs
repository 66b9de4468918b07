//! Web Library
//!
//! The HTTP front of the employee management application: administrator
//! login, registration and logout, and the employee list behind them.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod views;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tower_http::trace::TraceLayer;
use tracing::info;

use admin_service_lib::infra::Database;
use admin_service_lib::service::Services;
use admin_service_lib::session::{
    MemorySessionStore, RedisSessionStore, SessionManager, SessionStore,
};

use crate::config::WebConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: WebConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Connect and migrate
    let db = Database::connect(&config.database).await?;

    // Pick the session store
    let store: Arc<dyn SessionStore> = match &config.cache {
        Some(cache) => {
            info!("Using Redis session store");
            Arc::new(RedisSessionStore::connect(cache, config.session.ttl_seconds).await?)
        }
        None => {
            info!("Using in-memory session store");
            Arc::new(MemorySessionStore::new(Duration::from_secs(
                config.session.ttl_seconds,
            )))
        }
    };
    let sessions = SessionManager::new(store);

    // Create app state
    let services = Services::new(db.connection(), sessions.clone());
    let state = AppState::new(services, sessions, config.session.clone());

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = config.server.addr().parse()?;
    info!("Listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
