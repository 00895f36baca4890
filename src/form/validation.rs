//! Submit-time validation of the contact form.

use super::state::FormState;
use crate::domain::{ContactName, EmailAddress, PhoneNumber, ValidationError};

/// Per-field result of one submit.
///
/// Every field is checked even when an earlier one already failed, so the
/// presentation layer can flag all offending fields at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub name_valid: bool,
    pub phone_valid: bool,
    pub email_valid: bool,
}

impl ValidationReport {
    /// Causes of a rejection, in field order.
    pub fn failures(&self) -> Vec<&'static str> {
        [
            (!self.name_valid).then_some("name"),
            (!self.phone_valid).then_some("phone"),
            (!self.email_valid).then_some("email"),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// The three validated fields, or the report explaining which failed.
pub(super) struct ValidatedFields {
    pub name: Result<ContactName, ValidationError>,
    pub phone: Result<PhoneNumber, ValidationError>,
    pub email: Result<EmailAddress, ValidationError>,
}

impl ValidatedFields {
    pub fn from_state(state: &FormState) -> Self {
        Self {
            name: ContactName::new(state.name.clone()),
            phone: PhoneNumber::new(state.phone.clone()),
            email: EmailAddress::new(state.email.clone()),
        }
    }

    pub fn report(&self) -> ValidationReport {
        ValidationReport {
            name_valid: self.name.is_ok(),
            phone_valid: self.phone.is_ok(),
            email_valid: self.email.is_ok(),
        }
    }
}
