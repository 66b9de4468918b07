//! Field-level validation results.
//!
//! Form failures are ordinary values, not errors: a workflow returns
//! [`ValidationErrors`] and the caller re-renders the form with them.

use std::collections::BTreeMap;

use serde::Serialize;

/// A message attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Ordered collection of field errors.
///
/// Errors accumulate; adding never removes earlier entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a message to a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Check whether any error is attached to `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// Messages attached to `field`, in insertion order
    pub fn messages_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Group messages by field for rendering next to form inputs.
    pub fn by_field(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for error in &self.0 {
            grouped
                .entry(error.field.as_str())
                .or_default()
                .push(error.message.as_str());
        }
        grouped
    }

    /// Convert errors produced by `validator` derive attributes.
    ///
    /// `validator` keys errors by Rust field name in a hash map; keys are
    /// mapped to camelCase wire names and emitted in `field_order`. Fields
    /// missing from `field_order` follow in name order.
    pub fn from_declared(errors: &validator::ValidationErrors, field_order: &[&str]) -> Self {
        let mut by_wire_name: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            let wire_name = to_wire_name(field);
            let messages = by_wire_name.entry(wire_name.clone()).or_default();
            for err in errs {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", wire_name));
                messages.push(message);
            }
        }

        let mut result = Self::new();
        for field in field_order {
            if let Some(messages) = by_wire_name.remove(*field) {
                for message in messages {
                    result.add(*field, message);
                }
            }
        }
        for (field, messages) in by_wire_name {
            for message in messages {
                result.add(field.clone(), message);
            }
        }
        result
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Extend<FieldError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = FieldError>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// `mail_address` -> `mailAddress`; already camelCase names pass through.
fn to_wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RegistrationInput, FIELD_MAIL_ADDRESS, FIELD_NAME, FIELD_PASSWORD, REGISTRATION_FIELDS};
    use validator::Validate;

    #[test]
    fn test_errors_accumulate_in_order() {
        let mut errors = ValidationErrors::new();
        errors.add("mailAddress", "taken");
        errors.add("confirmPassword", "mismatch");

        assert_eq!(errors.len(), 2);
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["mailAddress", "confirmPassword"]);
    }

    #[test]
    fn test_by_field_groups_messages() {
        let mut errors = ValidationErrors::new();
        errors.add("mailAddress", "first");
        errors.add("name", "required");
        errors.add("mailAddress", "second");

        let grouped = errors.by_field();
        assert_eq!(grouped["mailAddress"], vec!["first", "second"]);
        assert_eq!(grouped["name"], vec!["required"]);
    }

    #[test]
    fn test_wire_name_conversion() {
        assert_eq!(to_wire_name("mail_address"), "mailAddress");
        assert_eq!(to_wire_name("mailAddress"), "mailAddress");
        assert_eq!(to_wire_name("name"), "name");
    }

    #[test]
    fn test_from_declared_follows_field_order() {
        let input = RegistrationInput::new("", "", "", "");
        let declared = input.validate().unwrap_err();

        let errors = ValidationErrors::from_declared(&declared, REGISTRATION_FIELDS);

        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        let first_mail = fields.iter().position(|f| *f == FIELD_MAIL_ADDRESS).unwrap();
        let first_password = fields.iter().position(|f| *f == FIELD_PASSWORD).unwrap();
        assert_eq!(fields[0], FIELD_NAME);
        assert!(first_mail < first_password);
        assert_eq!(errors.messages_for(FIELD_NAME).collect::<Vec<_>>(), vec!["Please enter a name"]);
    }

    #[test]
    fn test_serializes_as_list() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "required");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!([{ "field": "name", "message": "required" }]));
    }
}
