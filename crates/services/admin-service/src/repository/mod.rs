//! Repository layer for data access.

pub mod entities;
mod administrator_repository;
mod employee_repository;

pub use administrator_repository::{AdministratorRepository, AdministratorStore};
pub use employee_repository::{EmployeeRepository, EmployeeStore};

#[cfg(any(test, feature = "test-utils"))]
pub use administrator_repository::MockAdministratorRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
