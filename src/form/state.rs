//! Transient form state: field values, edit mode and validation errors.

use crate::domain::{ContactId, ValidationError};
use crate::models::ContactFields;
use serde::Serialize;
use std::fmt;

/// One of the three editable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Phone];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    /// Look a field up by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation failures from the last submit attempt.
///
/// A field that passed has no entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<ValidationError>,

    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<ValidationError>,

    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<ValidationError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, field: Field) -> &mut Option<ValidationError> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        }
    }

    /// Record the failure for `field`, replacing any earlier one.
    pub fn set(&mut self, field: Field, error: ValidationError) {
        *self.slot(field) = Some(error);
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        match field {
            Field::Name => self.name.as_ref(),
            Field::Email => self.email.as_ref(),
            Field::Phone => self.phone.as_ref(),
        }
    }

    /// The user-facing message for `field`, if it failed.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Failing fields with their errors, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|err| (field, err)))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for (i, (field, err)) in self.iter().enumerate() {
            let sep = if i == 0 { ": " } else { ", " };
            write!(f, "{}{}: {}", sep, field, err)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Whether a submit creates a new contact or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "id", rename_all = "snake_case")]
pub enum FormMode {
    Create,
    Edit(ContactId),
}

/// Everything the form shows: field values, the contact being edited (if
/// any) and the errors from the last rejected submit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormState {
    #[serde(flatten)]
    fields: ContactFields,

    editing_id: Option<ContactId>,

    errors: FieldErrors,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Current value of one input.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.fields.name,
            Field::Email => &self.fields.email,
            Field::Phone => &self.fields.phone,
        }
    }

    pub fn editing_id(&self) -> Option<ContactId> {
        self.editing_id
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn mode(&self) -> FormMode {
        match self.editing_id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub(super) fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Phone => self.fields.phone = value,
        }
    }

    pub(super) fn load(&mut self, id: ContactId, fields: ContactFields) {
        self.fields = fields;
        self.editing_id = Some(id);
        self.errors = FieldErrors::default();
    }

    pub(super) fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    /// Clear fields and errors and drop back to create mode.
    pub(super) fn reset(&mut self) {
        *self = Self::default();
    }
}
