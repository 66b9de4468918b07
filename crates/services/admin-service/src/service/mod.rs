//! Service layer for business logic.

mod authentication;
mod employee;
mod form_validator;
mod registration;

pub use authentication::{AuthOutcome, AuthService, Authenticator};
pub use employee::{EmployeeDirectory, EmployeeService};
pub use form_validator::{DeclaredConstraints, FormValidator};
pub use registration::{Registrar, RegistrationOutcome, RegistrationService};

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repository::{AdministratorStore, EmployeeStore};
use crate::session::SessionManager;

/// Workflows wired to the database-backed stores.
pub struct Services {
    pub registration: Arc<dyn RegistrationService>,
    pub auth: Arc<dyn AuthService>,
    pub employees: Arc<dyn EmployeeService>,
}

impl Services {
    pub fn new(db: DatabaseConnection, sessions: SessionManager) -> Self {
        let administrators = Arc::new(AdministratorStore::new(db.clone()));
        let employees = Arc::new(EmployeeStore::new(db));

        Self {
            registration: Arc::new(Registrar::new(
                administrators.clone(),
                Arc::new(DeclaredConstraints),
            )),
            auth: Arc::new(Authenticator::new(administrators, sessions)),
            employees: Arc::new(EmployeeDirectory::new(employees)),
        }
    }
}
