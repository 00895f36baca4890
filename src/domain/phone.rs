//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits in a complete phone number.
pub const PHONE_DIGITS: usize = 10;

/// Why a phone field edit was refused at entry time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneEntryRejection {
    /// The edit would make the field longer than [`PHONE_DIGITS`].
    TooLong,
    /// The edit contains a character that is not an ASCII digit.
    NonDigit(char),
}

impl fmt::Display for PhoneEntryRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong => write!(f, "phone number cannot exceed {} digits", PHONE_DIGITS),
            Self::NonDigit(c) => write!(f, "'{}' is not a digit", c),
        }
    }
}

/// A type-safe wrapper for phone numbers.
///
/// A phone number is exactly ten ASCII decimal digits with no formatting.
///
/// # Example
///
/// ```
/// use contact_manager::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("5551234567").unwrap();
/// assert_eq!(phone.as_str(), "5551234567");
/// assert!(PhoneNumber::new("555-1234").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the value is exactly
    /// ten ASCII digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    fn is_valid(phone: &str) -> bool {
        phone.len() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
    }

    /// Check whether `candidate` may be held by a phone input field.
    ///
    /// A field may hold a partial number, so anything up to ten digits is
    /// accepted, including the empty string.
    pub fn check_entry(candidate: &str) -> Result<(), PhoneEntryRejection> {
        if let Some(c) = candidate.chars().find(|c| !c.is_ascii_digit()) {
            return Err(PhoneEntryRejection::NonDigit(c));
        }
        if candidate.len() > PHONE_DIGITS {
            return Err(PhoneEntryRejection::TooLong);
        }
        Ok(())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("123456789").is_err());
        assert!(PhoneNumber::new("12345678901").is_err());
        assert!(PhoneNumber::new("123-456-7890").is_err());
        assert!(PhoneNumber::new("12345 7890").is_err());
        assert!(PhoneNumber::new("０１２３４５６７８９").is_err());
        assert!(PhoneNumber::new("0000000000").is_ok());
    }

    #[test]
    fn test_check_entry_accepts_partial_numbers() {
        assert_eq!(PhoneNumber::check_entry(""), Ok(()));
        assert_eq!(PhoneNumber::check_entry("555"), Ok(()));
        assert_eq!(PhoneNumber::check_entry("5551234567"), Ok(()));
    }

    #[test]
    fn test_check_entry_rejections() {
        assert_eq!(
            PhoneNumber::check_entry("55512345678"),
            Err(PhoneEntryRejection::TooLong)
        );
        assert_eq!(
            PhoneNumber::check_entry("555-123"),
            Err(PhoneEntryRejection::NonDigit('-'))
        );
        assert_eq!(
            PhoneNumber::check_entry("12345678901x"),
            Err(PhoneEntryRejection::NonDigit('x'))
        );
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("1234567890").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"1234567890\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"12345\"");
        assert!(result.is_err());
    }
}
