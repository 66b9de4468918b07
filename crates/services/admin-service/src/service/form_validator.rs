//! Structural validation of the registration form.

use domain::{RegistrationInput, ValidationErrors, REGISTRATION_FIELDS};

/// Structural checks on a registration form.
///
/// Returns every failing constraint; an empty result means the form is
/// well-formed. Implementations never touch the store.
pub trait FormValidator: Send + Sync {
    fn validate(&self, input: &RegistrationInput) -> ValidationErrors;
}

/// Constraints declared on [`RegistrationInput`] with `validator` attributes:
/// name required, mail address required and well-formed, password required.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredConstraints;

impl FormValidator for DeclaredConstraints {
    fn validate(&self, input: &RegistrationInput) -> ValidationErrors {
        match validator::Validate::validate(input) {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => ValidationErrors::from_declared(&errors, REGISTRATION_FIELDS),
        }
    }
}

impl<F> FormValidator for F
where
    F: Fn(&RegistrationInput) -> ValidationErrors + Send + Sync,
{
    fn validate(&self, input: &RegistrationInput) -> ValidationErrors {
        self(input)
    }
}
