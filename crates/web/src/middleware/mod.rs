//! Middleware for sessions and fault handling.

mod fault;
mod session;

pub use fault::handle_panic;
pub use session::{session_middleware, SessionInvalidated};
