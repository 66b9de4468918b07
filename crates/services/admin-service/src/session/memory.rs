//! In-process session store.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;

use common::AppResult;
use domain::{SessionId, SessionState};

use super::SessionStore;

struct Entry {
    state: SessionState,
    expires_at: Instant,
}

/// Session store backed by a map in this process.
///
/// Sessions do not survive a restart and are not shared between instances.
pub struct MemorySessionStore {
    entries: RwLock<HashMap<SessionId, Entry>>,
    ttl: Duration,
}

impl MemorySessionStore {
    /// Create a store whose sessions expire after `ttl` of inactivity
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|entry| entry.expires_at > now)
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, id: SessionId) -> AppResult<Option<SessionState>> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        match entries.get_mut(&id) {
            Some(entry) if entry.expires_at > now => {
                entry.expires_at = now + self.ttl;
                Ok(Some(entry.state.clone()))
            }
            Some(_) => {
                entries.remove(&id);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn save(&self, id: SessionId, state: &SessionState) -> AppResult<()> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        // Sweep expired sessions while holding the lock anyway
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            id,
            Entry {
                state: state.clone(),
                expires_at: now + self.ttl,
            },
        );
        Ok(())
    }

    async fn invalidate(&self, id: SessionId) -> AppResult<()> {
        self.entries.write().await.remove(&id);
        Ok(())
    }
}
