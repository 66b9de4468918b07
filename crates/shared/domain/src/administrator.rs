//! Administrator domain entity and related forms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Administrator domain entity
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Administrator {
    pub id: Uuid,
    pub name: String,
    pub mail_address: String,
    /// Stored exactly as submitted at registration (no hashing).
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

// Don't expose the password in debug output
impl std::fmt::Debug for Administrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Administrator")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("mail_address", &self.mail_address)
            .field("password", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Data needed to insert a new administrator.
///
/// The store assigns `id` and `created_at`.
#[derive(Clone, PartialEq, Eq)]
pub struct NewAdministrator {
    pub name: String,
    pub mail_address: String,
    pub password: String,
}

impl std::fmt::Debug for NewAdministrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAdministrator")
            .field("name", &self.name)
            .field("mail_address", &self.mail_address)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Copies name, mail address and password; the confirmation is dropped.
impl From<RegistrationInput> for NewAdministrator {
    fn from(input: RegistrationInput) -> Self {
        Self {
            name: input.name,
            mail_address: input.mail_address,
            password: input.password,
        }
    }
}

/// Registration form as posted by the client.
///
/// Missing fields deserialize as empty strings so that structural
/// validation, not deserialization, reports them.
#[derive(Clone, Default, Deserialize, Validate)]
pub struct RegistrationInput {
    #[validate(length(min = 1, message = "Please enter a name"))]
    #[serde(default)]
    pub name: String,

    #[validate(
        length(min = 1, message = "Please enter an email address"),
        email(message = "Please enter a valid email address")
    )]
    #[serde(default, rename = "mailAddress")]
    pub mail_address: String,

    #[validate(length(min = 1, message = "Please enter a password"))]
    #[serde(default)]
    pub password: String,

    #[serde(default, rename = "confirmPassword")]
    pub confirm_password: String,
}

impl RegistrationInput {
    /// Build a form from its four fields.
    pub fn new(
        name: impl Into<String>,
        mail_address: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mail_address: mail_address.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Exact comparison of password and confirmation.
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }
}

impl std::fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("name", &self.name)
            .field("mail_address", &self.mail_address)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

/// Login form as posted by the client.
#[derive(Clone, Default, Deserialize)]
pub struct LoginInput {
    #[serde(default, rename = "mailAddress")]
    pub mail_address: String,
    #[serde(default)]
    pub password: String,
}

impl LoginInput {
    pub fn new(mail_address: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            mail_address: mail_address.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginInput")
            .field("mail_address", &self.mail_address)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
