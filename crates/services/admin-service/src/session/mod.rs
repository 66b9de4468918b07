//! Session management.
//!
//! A [`SessionStore`] keeps one [`SessionState`] per [`SessionId`];
//! [`SessionManager`] exposes the operations the workflows need on top of it.
//! Two stores are provided: in-process memory and Redis.

mod memory;
mod redis_store;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use common::AppResult;
use domain::{SessionId, SessionState};

pub use self::memory::MemorySessionStore;
pub use self::redis_store::RedisSessionStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Session storage keyed by session identity.
///
/// Entries expire after a period of inactivity chosen by the implementation.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the state of a live session, refreshing its expiry
    async fn load(&self, id: SessionId) -> AppResult<Option<SessionState>>;

    /// Replace the state of a session
    async fn save(&self, id: SessionId, state: &SessionState) -> AppResult<()>;

    /// Drop all state of a session. Unknown sessions are not an error.
    async fn invalidate(&self, id: SessionId) -> AppResult<()>;
}

/// Login state operations over a [`SessionStore`].
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Record `administrator_name` as the logged-in identity of the session.
    /// Last write wins.
    pub async fn establish(&self, id: SessionId, administrator_name: &str) -> AppResult<()> {
        debug!(session = %id, "Establishing session");
        self.store
            .save(id, &SessionState::authenticated(administrator_name))
            .await
    }

    /// Name of the administrator logged in on this session, if any
    pub async fn current(&self, id: SessionId) -> AppResult<Option<String>> {
        Ok(self
            .store
            .load(id)
            .await?
            .and_then(|state| state.administrator_name))
    }

    /// Destroy the session. Idempotent.
    pub async fn invalidate(&self, id: SessionId) -> AppResult<()> {
        debug!(session = %id, "Invalidating session");
        self.store.invalidate(id).await
    }
}
