//! Shared fixtures for HTTP integration tests.
//!
//! The router runs against in-memory stores, so no database or Redis is
//! needed.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use chrono::{NaiveDate, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use admin_service_lib::repository::{AdministratorRepository, EmployeeRepository};
use admin_service_lib::service::{
    Authenticator, DeclaredConstraints, EmployeeDirectory, Registrar, Services,
};
use admin_service_lib::session::{MemorySessionStore, SessionManager};
use common::{AppError, AppResult, SessionConfig};
use domain::{Administrator, Employee, NewAdministrator};
use web_lib::routes::create_router;
use web_lib::state::AppState;
use web_lib::views::ViewRenderer;

// =============================================================================
// In-memory Stores
// =============================================================================

/// Credential store enforcing a unique mail address like the real index.
#[derive(Default)]
pub struct InMemoryAdministrators {
    records: Mutex<Vec<Administrator>>,
}

impl InMemoryAdministrators {
    pub async fn count(&self) -> usize {
        self.records.lock().await.len()
    }
}

#[async_trait]
impl AdministratorRepository for InMemoryAdministrators {
    async fn find_by_mail_address(&self, mail_address: &str) -> AppResult<Option<Administrator>> {
        let records = self.records.lock().await;
        Ok(records
            .iter()
            .find(|a| a.mail_address == mail_address)
            .cloned())
    }

    async fn find_by_credentials(
        &self,
        mail_address: &str,
        password: &str,
    ) -> AppResult<Option<Administrator>> {
        let records = self.records.lock().await;
        Ok(records
            .iter()
            .find(|a| a.mail_address == mail_address && a.password == password)
            .cloned())
    }

    async fn insert(&self, administrator: NewAdministrator) -> AppResult<Administrator> {
        let mut records = self.records.lock().await;
        if records
            .iter()
            .any(|a| a.mail_address == administrator.mail_address)
        {
            return Err(AppError::conflict("Administrator"));
        }

        let record = Administrator {
            id: Uuid::new_v4(),
            name: administrator.name,
            mail_address: administrator.mail_address,
            password: administrator.password,
            created_at: Utc::now(),
        };
        records.push(record.clone());
        Ok(record)
    }
}

/// Fixed employee list, newest hire first.
pub struct FixedEmployees;

#[async_trait]
impl EmployeeRepository for FixedEmployees {
    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        Ok(vec![
            employee("Sato Jiro", 2021, 10, 1),
            employee("Yamada Hanako", 2019, 4, 1),
        ])
    }
}

fn employee(name: &str, year: i32, month: u32, day: u32) -> Employee {
    Employee {
        id: Uuid::new_v4(),
        name: name.to_string(),
        image: "e1.png".to_string(),
        gender: "F".to_string(),
        hire_date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        mail_address: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        telephone: "090-0000-0000".to_string(),
        salary: 300_000,
        dependents_count: 0,
    }
}

// =============================================================================
// Test Application
// =============================================================================

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub sessions: SessionManager,
    pub administrators: Arc<InMemoryAdministrators>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_employees(Arc::new(FixedEmployees))
    }

    /// Build the application around a custom employee store.
    pub fn with_employees(employees: Arc<dyn EmployeeRepository>) -> Self {
        let administrators = Arc::new(InMemoryAdministrators::default());
        let sessions = SessionManager::new(Arc::new(MemorySessionStore::new(
            Duration::from_secs(1800),
        )));

        let services = Services {
            registration: Arc::new(Registrar::new(
                administrators.clone(),
                Arc::new(DeclaredConstraints),
            )),
            auth: Arc::new(Authenticator::new(administrators.clone(), sessions.clone())),
            employees: Arc::new(EmployeeDirectory::new(employees)),
        };
        let state = AppState::new(services, sessions.clone(), SessionConfig::default());

        Self {
            router: create_router(state.clone()),
            state,
            sessions,
            administrators,
        }
    }

    /// Rebuild the router with another view renderer.
    pub fn with_views(mut self, views: Arc<dyn ViewRenderer>) -> Self {
        self.state = self.state.with_views(views);
        self.router = create_router(self.state.clone());
        self
    }

    /// Send one request through a fresh clone of the router.
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        use tower::ServiceExt;

        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Register an administrator through the HTTP form.
    pub async fn register(&self, name: &str, mail: &str, password: &str, confirm: &str) -> Response<Body> {
        let body = format!(
            "name={}&mailAddress={}&password={}&confirmPassword={}",
            name,
            encode(mail),
            password,
            confirm
        );
        self.send(form_post("/insert", &body, None)).await
    }

    /// Log in and return the response together with the session cookie used.
    pub async fn login(&self, mail: &str, password: &str) -> (Response<Body>, String) {
        let cookie = self.new_session().await;
        let body = format!("mailAddress={}&password={}", encode(mail), password);
        let response = self.send(form_post("/login", &body, Some(&cookie))).await;
        (response, cookie)
    }

    /// Obtain a session cookie from the server.
    pub async fn new_session(&self) -> String {
        let response = self.send(get("/", None)).await;
        session_cookie(&response).expect("session cookie issued")
    }
}

// =============================================================================
// Request / Response Helpers
// =============================================================================

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn form_post(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// `name=value` pair of the session cookie set by the response, if any.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("EMP_SESSION="))
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

fn encode(value: &str) -> String {
    value.replace('@', "%40")
}
