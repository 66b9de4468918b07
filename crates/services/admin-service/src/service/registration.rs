//! Registration workflow - creates new administrators.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use common::{AppError, AppResult};
use domain::{
    Administrator, NewAdministrator, RegistrationInput, ValidationErrors,
    FIELD_CONFIRM_PASSWORD, FIELD_MAIL_ADDRESS, MSG_MAIL_ADDRESS_TAKEN, MSG_PASSWORD_MISMATCH,
};

use super::FormValidator;
use crate::repository::AdministratorRepository;

/// Result of a registration attempt that reached a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The administrator was stored
    Registered(Administrator),
    /// The form was rejected; nothing was stored
    Rejected(ValidationErrors),
}

impl RegistrationOutcome {
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered(_))
    }
}

/// Registration service trait for dependency injection.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Validate the form and store a new administrator.
    ///
    /// Form problems come back as [`RegistrationOutcome::Rejected`];
    /// `Err` is reserved for infrastructure failures.
    async fn register(&self, input: RegistrationInput) -> AppResult<RegistrationOutcome>;
}

/// Registration workflow over an administrator repository.
pub struct Registrar {
    repo: Arc<dyn AdministratorRepository>,
    validator: Arc<dyn FormValidator>,
}

impl Registrar {
    pub fn new(repo: Arc<dyn AdministratorRepository>, validator: Arc<dyn FormValidator>) -> Self {
        Self { repo, validator }
    }

    fn mail_address_taken() -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.add(FIELD_MAIL_ADDRESS, MSG_MAIL_ADDRESS_TAKEN);
        errors
    }
}

#[async_trait]
impl RegistrationService for Registrar {
    async fn register(&self, input: RegistrationInput) -> AppResult<RegistrationOutcome> {
        // Structural failures stop here, before the store is queried
        let errors = self.validator.validate(&input);
        if !errors.is_empty() {
            warn!(fields = errors.len(), "Registration form is malformed");
            return Ok(RegistrationOutcome::Rejected(errors));
        }

        // Both checks run so the form shows every problem at once
        let mut errors = ValidationErrors::new();
        if self
            .repo
            .find_by_mail_address(&input.mail_address)
            .await?
            .is_some()
        {
            errors.add(FIELD_MAIL_ADDRESS, MSG_MAIL_ADDRESS_TAKEN);
        }
        if !input.passwords_match() {
            errors.add(FIELD_CONFIRM_PASSWORD, MSG_PASSWORD_MISMATCH);
        }
        if !errors.is_empty() {
            warn!(fields = errors.len(), "Registration rejected");
            return Ok(RegistrationOutcome::Rejected(errors));
        }

        match self.repo.insert(NewAdministrator::from(input)).await {
            Ok(administrator) => {
                info!(administrator_id = %administrator.id, "Administrator registered");
                Ok(RegistrationOutcome::Registered(administrator))
            }
            // Lost the race against a concurrent registration
            Err(AppError::Conflict(_)) => {
                warn!("Registration rejected by unique index");
                Ok(RegistrationOutcome::Rejected(Self::mail_address_taken()))
            }
            Err(err) => Err(err),
        }
    }
}
