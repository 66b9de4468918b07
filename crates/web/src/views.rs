//! Named views and the renderer that turns them into responses.
//!
//! Handlers decide *which* view to show and *what* goes in its model;
//! a [`ViewRenderer`] decides how that becomes an HTTP response.

use axum::response::{IntoResponse, Json, Response};
use serde_json::{json, Map, Value};

/// Login form
pub const VIEW_LOGIN: &str = "administrator/login";

/// Registration form
pub const VIEW_INSERT: &str = "administrator/insert";

/// Employee listing shown after login
pub const VIEW_EMPLOYEE_LIST: &str = "employee/list";

/// A view name plus the model rendered into it.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub name: &'static str,
    pub model: Map<String, Value>,
}

impl View {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            model: Map::new(),
        }
    }

    /// Add one model attribute, replacing any earlier value under `key`
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.model.insert(key.to_string(), value.into());
        self
    }
}

/// Turns a [`View`] into an HTTP response.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: View) -> Response;
}

/// Renders views as `{"view": name, "model": {...}}` JSON documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonViewRenderer;

impl ViewRenderer for JsonViewRenderer {
    fn render(&self, view: View) -> Response {
        Json(json!({
            "view": view.name,
            "model": view.model,
        }))
        .into_response()
    }
}
