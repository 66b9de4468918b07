//! Session identity and the state kept per session.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Opaque identity of one client session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh, unguessable identity
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::validation("Malformed session identifier"))
    }
}

/// Per-session state. Absent name means "not logged in".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrator_name: Option<String>,
}

impl SessionState {
    /// State for a session that has just logged in
    pub fn authenticated(administrator_name: impl Into<String>) -> Self {
        Self {
            administrator_name: Some(administrator_name.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.administrator_name.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_round_trips_through_text() {
        let id = SessionId::generate();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_malformed_session_id_is_rejected() {
        let result = "not-a-session".parse::<SessionId>();
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }

    #[test]
    fn test_default_state_is_anonymous() {
        assert!(!SessionState::default().is_authenticated());
        assert!(SessionState::authenticated("Taro").is_authenticated());
    }
}
