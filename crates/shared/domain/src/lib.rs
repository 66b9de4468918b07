//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Administrator accounts, the forms that create and authenticate them,
//! session identity, and employee records all live here.

pub mod administrator;
pub mod constants;
pub mod employee;
pub mod error;
pub mod session;
pub mod validation;

pub use administrator::{Administrator, LoginInput, NewAdministrator, RegistrationInput};
pub use constants::*;
pub use employee::Employee;
pub use error::DomainError;
pub use session::{SessionId, SessionState};
pub use validation::{FieldError, ValidationErrors};
