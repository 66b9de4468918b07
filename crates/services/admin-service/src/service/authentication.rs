//! Authentication workflow - login and logout.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use common::AppResult;
use domain::{LoginInput, SessionId};

use crate::repository::AdministratorRepository;
use crate::session::SessionManager;

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The session now belongs to this administrator
    Success { name: String },
    /// No administrator matched. Carries no detail on purpose.
    Failure,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and, on a match, log the session in.
    async fn login(&self, session: SessionId, input: LoginInput) -> AppResult<AuthOutcome>;

    /// Log the session out. Idempotent.
    async fn logout(&self, session: SessionId) -> AppResult<()>;
}

/// Authentication workflow over an administrator repository.
pub struct Authenticator {
    repo: Arc<dyn AdministratorRepository>,
    sessions: SessionManager,
}

impl Authenticator {
    pub fn new(repo: Arc<dyn AdministratorRepository>, sessions: SessionManager) -> Self {
        Self { repo, sessions }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, session: SessionId, input: LoginInput) -> AppResult<AuthOutcome> {
        let matched = self
            .repo
            .find_by_credentials(&input.mail_address, &input.password)
            .await?;

        let Some(administrator) = matched else {
            warn!(session = %session, "Login rejected");
            return Ok(AuthOutcome::Failure);
        };

        self.sessions.establish(session, &administrator.name).await?;
        info!(session = %session, administrator_id = %administrator.id, "Administrator logged in");

        Ok(AuthOutcome::Success {
            name: administrator.name,
        })
    }

    async fn logout(&self, session: SessionId) -> AppResult<()> {
        self.sessions.invalidate(session).await?;
        info!(session = %session, "Session logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockAdministratorRepository;
    use crate::session::{MemorySessionStore, MockSessionStore};
    use chrono::Utc;
    use common::AppError;
    use domain::Administrator;
    use std::time::Duration;
    use uuid::Uuid;

    fn taro() -> Administrator {
        Administrator {
            id: Uuid::new_v4(),
            name: "Taro".into(),
            mail_address: "a@b.com".into(),
            password: "p1".into(),
            created_at: Utc::now(),
        }
    }

    fn memory_sessions() -> SessionManager {
        SessionManager::new(Arc::new(MemorySessionStore::new(Duration::from_secs(1800))))
    }

    fn repo_with_taro() -> MockAdministratorRepository {
        let mut repo = MockAdministratorRepository::new();
        repo.expect_find_by_credentials()
            .returning(|mail, password| {
                if mail == "a@b.com" && password == "p1" {
                    Ok(Some(taro()))
                } else {
                    Ok(None)
                }
            });
        repo
    }

    #[tokio::test]
    async fn test_login_success_establishes_session() {
        let sessions = memory_sessions();
        let auth = Authenticator::new(Arc::new(repo_with_taro()), sessions.clone());
        let session = SessionId::generate();

        let outcome = auth
            .login(session, LoginInput::new("a@b.com", "p1"))
            .await
            .unwrap();

        assert_eq!(outcome, AuthOutcome::Success { name: "Taro".into() });
        assert_eq!(sessions.current(session).await.unwrap().as_deref(), Some("Taro"));
    }

    #[tokio::test]
    async fn test_wrong_password_fails_without_session() {
        let sessions = memory_sessions();
        let auth = Authenticator::new(Arc::new(repo_with_taro()), sessions.clone());
        let session = SessionId::generate();

        let outcome = auth
            .login(session, LoginInput::new("a@b.com", "wrong"))
            .await
            .unwrap();

        assert_eq!(outcome, AuthOutcome::Failure);
        assert!(sessions.current(session).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_mail_address_fails() {
        let auth = Authenticator::new(Arc::new(repo_with_taro()), memory_sessions());

        let outcome = auth
            .login(SessionId::generate(), LoginInput::new("nobody@b.com", "p1"))
            .await
            .unwrap();

        assert_eq!(outcome, AuthOutcome::Failure);
    }

    #[tokio::test]
    async fn test_failure_leaves_existing_login_untouched() {
        let sessions = memory_sessions();
        let auth = Authenticator::new(Arc::new(repo_with_taro()), sessions.clone());
        let session = SessionId::generate();
        sessions.establish(session, "Hanako").await.unwrap();

        auth.login(session, LoginInput::new("a@b.com", "wrong"))
            .await
            .unwrap();

        assert_eq!(sessions.current(session).await.unwrap().as_deref(), Some("Hanako"));
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let sessions = memory_sessions();
        let auth = Authenticator::new(Arc::new(repo_with_taro()), sessions.clone());
        let session = SessionId::generate();
        auth.login(session, LoginInput::new("a@b.com", "p1"))
            .await
            .unwrap();

        auth.logout(session).await.unwrap();

        assert!(sessions.current(session).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let auth = Authenticator::new(Arc::new(repo_with_taro()), memory_sessions());
        let session = SessionId::generate();

        assert!(auth.logout(session).await.is_ok());
        assert!(auth.logout(session).await.is_ok());
    }

    #[tokio::test]
    async fn test_session_store_failure_propagates() {
        let mut store = MockSessionStore::new();
        store
            .expect_save()
            .returning(|_, _| Err(AppError::internal("store unavailable")));
        let auth = Authenticator::new(
            Arc::new(repo_with_taro()),
            SessionManager::new(Arc::new(store)),
        );

        let result = auth
            .login(SessionId::generate(), LoginInput::new("a@b.com", "p1"))
            .await;

        assert!(result.is_err());
    }
}
