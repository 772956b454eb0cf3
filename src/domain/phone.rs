//! PhoneNumber value object.

use super::errors::ValidationError;

/// A type-safe wrapper for phone numbers.
///
/// Phone numbers are stored as bare decimal digits. Form input is run
/// through [`PhoneNumber::sanitize`] on every keystroke, so by the time a
/// value reaches [`PhoneNumber::new`] it is either digits or empty.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// assert_eq!(PhoneNumber::sanitize("(11) 98765-4321"), "11987654321");
/// let phone = PhoneNumber::new("11987654321").unwrap();
/// assert_eq!(phone.into_inner(), "11987654321");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyPhone` for an empty value and
    /// `ValidationError::InvalidPhone` when anything but `0-9` is present.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if phone.is_empty() {
            return Err(ValidationError::EmptyPhone);
        }

        if !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Strip every character that is not a decimal digit.
    pub fn sanitize(input: &str) -> String {
        input.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("5551234").unwrap();
        assert_eq!(phone.into_inner(), "5551234");
    }

    #[test]
    fn test_phone_validates_format() {
        assert_eq!(PhoneNumber::new(""), Err(ValidationError::EmptyPhone));
        assert_eq!(
            PhoneNumber::new("+1-555"),
            Err(ValidationError::InvalidPhone("+1-555".to_string()))
        );
        assert!(PhoneNumber::new("555 1234").is_err());
        assert!(PhoneNumber::new("0").is_ok());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not 0-9
        assert!(PhoneNumber::new("١٢٣").is_err());
        assert_eq!(PhoneNumber::sanitize("١٢٣"), "");
    }

    #[test]
    fn test_phone_sanitize() {
        assert_eq!(PhoneNumber::sanitize("12a3b"), "123");
        assert_eq!(PhoneNumber::sanitize("+1 (555) 123-4567"), "15551234567");
        assert_eq!(PhoneNumber::sanitize("abc"), "");
        assert_eq!(PhoneNumber::sanitize(""), "");
    }
}
