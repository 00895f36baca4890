//! Shared builders for integration tests.

use contact_manager::notice::NoticeReceiver;
use contact_manager::{
    notice_channel, ContactFormController, ContactStore, PhoneEdit, SessionMetrics,
};
use std::sync::Arc;

/// A controller over a fresh store, plus the receiving end of its notices.
#[allow(dead_code)]
pub struct FormFixture {
    pub controller: ContactFormController,
    pub store: Arc<ContactStore>,
    pub notices: NoticeReceiver,
    pub metrics: SessionMetrics,
}

#[allow(dead_code)]
impl FormFixture {
    pub fn new() -> Self {
        let store = Arc::new(ContactStore::new());
        let metrics = SessionMetrics::new();
        let (sender, notices) = notice_channel();
        let controller = ContactFormController::new(store.clone(), sender, metrics.clone());
        Self {
            controller,
            store,
            notices,
            metrics,
        }
    }

    /// Fill name, phone and email; panics if the phone filter refuses `phone`.
    pub fn fill(&mut self, name: &str, phone: &str, email: &str) {
        self.controller.set_name(name);
        assert_eq!(
            self.controller.set_phone(phone),
            PhoneEdit::Accepted,
            "phone {:?} should pass the entry filter",
            phone
        );
        self.controller.set_email(email);
    }
}
