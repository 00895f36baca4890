//! Contact form controller.
//!
//! Mediates between raw field edits and the contact store. Edits only touch
//! the transient [`FormState`]; a contact reaches the store only through a
//! submit whose every field validated.

use super::state::FormState;
use super::validation::{ValidatedFields, ValidationReport};
use crate::domain::{ContactType, PhoneEntryRejection, PhoneNumber};
use crate::models::Contact;
use crate::notice::{Notice, NoticeSender};
use crate::observability::SessionMetrics;
use crate::store::ContactStore;
use std::sync::Arc;

/// Result of an edit to the phone field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneEdit {
    /// The field now holds the new value.
    Accepted,
    /// The field kept its previous value.
    Rejected(PhoneEntryRejection),
}

impl PhoneEdit {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Result of a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The contact was added to the store and the form was cleared.
    Accepted(Contact),
    /// Nothing was stored; the report says which fields failed.
    Rejected(ValidationReport),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Owns the form fields and runs the submit algorithm.
pub struct ContactFormController {
    state: FormState,
    store: Arc<ContactStore>,
    notices: NoticeSender,
    metrics: SessionMetrics,
}

impl ContactFormController {
    /// Create a controller with an empty form that submits into `store`.
    pub fn new(store: Arc<ContactStore>, notices: NoticeSender, metrics: SessionMetrics) -> Self {
        Self {
            state: FormState::default(),
            store,
            notices,
            metrics,
        }
    }

    /// Current form contents.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The store accepted contacts go to.
    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.state.email = email.into();
    }

    /// Replace the phone field, unless the new value is longer than ten
    /// characters or contains a non-digit.
    pub fn set_phone(&mut self, phone: impl Into<String>) -> PhoneEdit {
        let phone = phone.into();
        match PhoneNumber::check_entry(&phone) {
            Ok(()) => {
                self.state.phone = phone;
                PhoneEdit::Accepted
            }
            Err(reason) => {
                self.metrics.track_phone_edit_rejected();
                tracing::debug!(reason = %reason, "Phone edit rejected");
                PhoneEdit::Rejected(reason)
            }
        }
    }

    /// Type one character at the end of the phone field.
    pub fn push_phone_char(&mut self, c: char) -> PhoneEdit {
        let mut candidate = self.state.phone.clone();
        candidate.push(c);
        self.set_phone(candidate)
    }

    /// Delete the last character of the phone field.
    pub fn pop_phone_char(&mut self) -> Option<char> {
        self.state.phone.pop()
    }

    pub fn select_type(&mut self, kind: ContactType) {
        self.state.selected_type = Some(kind);
    }

    pub fn clear_type(&mut self) {
        self.state.selected_type = None;
    }

    /// Validate the form and, if every field passes, store a new contact.
    ///
    /// On success a "Contact Added" notice is posted and all fields are
    /// cleared. On failure the error flags are updated, a generic notice is
    /// posted, and the field contents are left as they were.
    pub fn submit(&mut self) -> SubmitOutcome {
        let fields = ValidatedFields::from_state(&self.state);
        let report = fields.report();

        self.state.phone_error = !report.phone_valid;
        self.state.email_error = !report.email_valid;

        let outcome = match (fields.name, fields.phone, fields.email) {
            (Ok(name), Ok(phone), Ok(email)) => {
                let contact = Contact::new(name, phone, email, self.state.selected_type);
                self.store.add(contact.clone());
                self.post(Notice::ContactAdded {
                    name: contact.name.to_string(),
                });
                self.state = FormState::default();

                tracing::info!(contacts = self.store.len(), "Contact added");
                SubmitOutcome::Accepted(contact)
            }
            _ => {
                self.post(Notice::InvalidDetails);

                tracing::info!(failures = ?report.failures(), "Submit rejected");
                SubmitOutcome::Rejected(report)
            }
        };

        self.metrics.track_submission(outcome.is_accepted());
        outcome
    }

    fn post(&self, notice: Notice) {
        self.metrics.track_notice();
        self.notices.post(notice);
    }
}
