//! Redis-backed session store.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, RedisError};
use tracing::{debug, warn};

use common::{AppError, AppResult, CacheConfig, CACHE_PREFIX_SESSION};
use domain::{SessionId, SessionState};

use super::SessionStore;

/// Session store shared by every instance pointing at the same Redis.
///
/// Each session is one JSON value under `session:{id}` with a sliding TTL.
pub struct RedisSessionStore {
    conn: ConnectionManager,
    ttl_seconds: u64,
}

impl RedisSessionStore {
    /// Connect to Redis.
    pub async fn connect(config: &CacheConfig, ttl_seconds: u64) -> Result<Self, RedisError> {
        debug!("Connecting to Redis session store");
        let client = redis::Client::open(config.url.as_str())?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self { conn, ttl_seconds })
    }

    fn key(id: SessionId) -> String {
        format!("{}{}", CACHE_PREFIX_SESSION, id)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, id: SessionId) -> AppResult<Option<SessionState>> {
        let key = Self::key(id);
        let mut conn = self.conn.clone();

        let raw: Option<String> = conn.get(&key).await.map_err(|e| {
            warn!("Redis get error for key {}: {}", key, e);
            AppError::Cache(e)
        })?;

        let Some(json) = raw else {
            return Ok(None);
        };

        match serde_json::from_str(&json) {
            Ok(state) => {
                conn.expire::<_, ()>(&key, self.ttl_seconds as i64)
                    .await
                    .map_err(AppError::Cache)?;
                Ok(Some(state))
            }
            Err(e) => {
                // Unreadable state counts as no session
                warn!("Failed to deserialize session {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn save(&self, id: SessionId, state: &SessionState) -> AppResult<()> {
        let key = Self::key(id);
        let mut conn = self.conn.clone();
        let json = serde_json::to_string(state)
            .map_err(|e| AppError::internal(format!("Serialization error: {}", e)))?;

        conn.set_ex::<_, _, ()>(&key, json, self.ttl_seconds)
            .await
            .map_err(|e| {
                warn!("Redis set error for key {}: {}", key, e);
                AppError::Cache(e)
            })
    }

    async fn invalidate(&self, id: SessionId) -> AppResult<()> {
        let key = Self::key(id);
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(&key).await.map_err(|e| {
            warn!("Redis delete error for key {}: {}", key, e);
            AppError::Cache(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        let id: SessionId = "6f1c1f5e-2c3b-4b8a-9a5e-1d2f3a4b5c6d".parse().unwrap();
        assert_eq!(
            RedisSessionStore::key(id),
            "session:6f1c1f5e-2c3b-4b8a-9a5e-1d2f3a4b5c6d"
        );
    }
}
