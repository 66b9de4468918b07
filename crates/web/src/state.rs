//! Application state for dependency injection.

use std::sync::Arc;

use admin_service_lib::service::{AuthService, EmployeeService, RegistrationService, Services};
use admin_service_lib::session::SessionManager;
use common::SessionConfig;

use crate::views::{JsonViewRenderer, ViewRenderer};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub registration: Arc<dyn RegistrationService>,
    pub auth: Arc<dyn AuthService>,
    pub employees: Arc<dyn EmployeeService>,
    pub sessions: SessionManager,
    pub views: Arc<dyn ViewRenderer>,
    pub session_config: SessionConfig,
}

impl AppState {
    /// Create new app state rendering views as JSON.
    pub fn new(services: Services, sessions: SessionManager, session_config: SessionConfig) -> Self {
        Self {
            registration: services.registration,
            auth: services.auth,
            employees: services.employees,
            sessions,
            views: Arc::new(JsonViewRenderer),
            session_config,
        }
    }

    /// Swap the view renderer.
    pub fn with_views(mut self, views: Arc<dyn ViewRenderer>) -> Self {
        self.views = views;
        self
    }
}
