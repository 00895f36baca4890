//! Transient contents of the contact form.

use crate::domain::{ContactName, ContactType};

/// Message shown under the phone field after a rejected submit.
pub const PHONE_ERROR_MESSAGE: &str = "Enter a valid 10-digit phone number";

/// Message shown under the email field after a rejected submit.
pub const EMAIL_ERROR_MESSAGE: &str = "Enter a valid email address";

/// What the user has typed so far, plus the error flags of the last submit.
///
/// Only [`ContactFormController`](super::ContactFormController) can change
/// a `FormState`; everyone else reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub(super) name: String,
    pub(super) phone: String,
    pub(super) email: String,
    pub(super) selected_type: Option<ContactType>,
    pub(super) phone_error: bool,
    pub(super) email_error: bool,
}

impl FormState {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Never longer than ten characters, digits only.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn selected_type(&self) -> Option<ContactType> {
        self.selected_type
    }

    /// The phone field failed the last submit.
    pub fn phone_error(&self) -> bool {
        self.phone_error
    }

    /// The email field failed the last submit.
    pub fn email_error(&self) -> bool {
        self.email_error
    }

    /// The name field is currently blank. Unlike the other flags this
    /// tracks the live text rather than the last submit.
    pub fn name_error(&self) -> bool {
        ContactName::is_blank(&self.name)
    }

    pub fn phone_error_message(&self) -> Option<&'static str> {
        self.phone_error.then_some(PHONE_ERROR_MESSAGE)
    }

    pub fn email_error_message(&self) -> Option<&'static str> {
        self.email_error.then_some(EMAIL_ERROR_MESSAGE)
    }

    /// All input fields are empty and no type is selected.
    pub fn is_cleared(&self) -> bool {
        self.name.is_empty()
            && self.phone.is_empty()
            && self.email.is_empty()
            && self.selected_type.is_none()
    }
}
