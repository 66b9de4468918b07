//! HTTP handlers.

mod administrator_handler;
mod employee_handler;
mod fault_handler;

pub use administrator_handler::administrator_routes;
pub use employee_handler::employee_routes;
pub use fault_handler::fault_routes;
