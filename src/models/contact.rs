//! Contact model representing one entry in the contact list.

use crate::domain::ContactId;
use serde::{Deserialize, Serialize};

/// The editable part of a contact: everything except its id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactFields {
    /// Full name
    pub name: String,

    /// Email address
    pub email: String,

    /// Phone number, digits only once it has been through the form
    pub phone: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// True when all three fields are empty.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }
}

/// A contact in the list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier, assigned at creation
    pub id: ContactId,

    /// Full name
    pub name: String,

    /// Email address
    pub email: String,

    /// Phone number
    pub phone: String,
}

impl Contact {
    /// Create a contact from an id and its editable fields.
    pub fn new(id: ContactId, fields: ContactFields) -> Self {
        let ContactFields { name, email, phone } = fields;
        Self {
            id,
            name,
            email,
            phone,
        }
    }

    /// Copy out the editable fields.
    pub fn fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    /// Overwrite name, email and phone; the id is untouched.
    pub fn apply(&mut self, fields: ContactFields) {
        self.name = fields.name;
        self.email = fields.email;
        self.phone = fields.phone;
    }
}
