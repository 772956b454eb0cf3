//! Domain validation errors.

use serde::{Serialize, Serializer};
use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// The `Display` text doubles as the message shown next to the offending
/// form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The contact name is empty.
    EmptyName,

    /// The provided email address does not have the `local@domain.tld` shape.
    InvalidEmail(String),

    /// The phone field is empty.
    EmptyPhone,

    /// The phone field contains something other than decimal digits.
    InvalidPhone(String),

    /// The provided text is not a contact id.
    InvalidId(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name is required"),
            Self::InvalidEmail(_) => write!(f, "Email must look like name@domain.tld"),
            Self::EmptyPhone => write!(f, "Phone is required"),
            Self::InvalidPhone(_) => write!(f, "Phone must contain only digits"),
            Self::InvalidId(id) => write!(f, "Invalid contact ID: {}", id),
        }
    }
}

impl std::error::Error for ValidationError {}

// Serialized as the user-facing message
impl Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Name is required");
        assert_eq!(
            ValidationError::InvalidEmail("bad".to_string()).to_string(),
            "Email must look like name@domain.tld"
        );
        assert_eq!(ValidationError::EmptyPhone.to_string(), "Phone is required");
        assert_eq!(
            ValidationError::InvalidPhone("12a".to_string()).to_string(),
            "Phone must contain only digits"
        );
        assert_eq!(
            ValidationError::InvalidId("abc".to_string()).to_string(),
            "Invalid contact ID: abc"
        );
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&ValidationError::EmptyName).unwrap();
        assert_eq!(json, "\"Name is required\"");
    }
}
