//! Domain-level constants.
//!
//! These constants define form field names and the messages attached to them.

// =============================================================================
// Form Fields
// =============================================================================

/// Administrator display name field
pub const FIELD_NAME: &str = "name";

/// Mail address field (login and registration)
pub const FIELD_MAIL_ADDRESS: &str = "mailAddress";

/// Password field (login and registration)
pub const FIELD_PASSWORD: &str = "password";

/// Password confirmation field (registration only)
pub const FIELD_CONFIRM_PASSWORD: &str = "confirmPassword";

/// Registration form fields in the order errors are reported
pub const REGISTRATION_FIELDS: &[&str] = &[
    FIELD_NAME,
    FIELD_MAIL_ADDRESS,
    FIELD_PASSWORD,
    FIELD_CONFIRM_PASSWORD,
];

// =============================================================================
// Validation Messages
// =============================================================================

/// Attached to `mailAddress` when another administrator already uses it
pub const MSG_MAIL_ADDRESS_TAKEN: &str = "This email address is already registered";

/// Attached to `confirmPassword` when it differs from `password`
pub const MSG_PASSWORD_MISMATCH: &str = "Does not match the password";

/// Login failure message. Never says which field was wrong.
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid email address or password";
