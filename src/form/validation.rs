//! Submit-time validation of the three form fields.

use super::state::{Field, FieldErrors};
use crate::domain::{EmailAddress, PhoneNumber, ValidationError};
use crate::models::ContactFields;

/// Checks the form fields before anything reaches the store.
///
/// Every field is checked on every call, so the returned error set is
/// complete rather than stopping at the first failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    trim_name: bool,
}

impl Validator {
    /// `trim_name` strips surrounding whitespace from the name before the
    /// emptiness check, and the trimmed name is what gets stored.
    pub fn new(trim_name: bool) -> Self {
        Self { trim_name }
    }

    /// Validate `fields`, returning the values to store on success.
    pub fn validate(&self, fields: &ContactFields) -> Result<ContactFields, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = if self.trim_name {
            fields.name.trim()
        } else {
            fields.name.as_str()
        };
        if name.is_empty() {
            errors.set(Field::Name, ValidationError::EmptyName);
        }

        let email = match EmailAddress::new(fields.email.as_str()) {
            Ok(email) => Some(email),
            Err(err) => {
                errors.set(Field::Email, err);
                None
            }
        };

        let phone = match PhoneNumber::new(fields.phone.as_str()) {
            Ok(phone) => Some(phone),
            Err(err) => {
                errors.set(Field::Phone, err);
                None
            }
        };

        match (email, phone) {
            (Some(email), Some(phone)) if errors.is_empty() => Ok(ContactFields {
                name: name.to_string(),
                email: email.into_inner(),
                phone: phone.into_inner(),
            }),
            _ => Err(errors),
        }
    }
}
