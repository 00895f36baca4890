//! Session contact list with push-based change notification.
//!
//! The store is the only writer. Readers either take a snapshot with
//! [`ContactStore::list`] or hold a [`ContactSubscription`], which is woken
//! after every append and can only borrow the current sequence immutably.

use crate::models::Contact;
use tokio::sync::watch;

/// Ordered, append-only list of accepted contacts.
#[derive(Debug)]
pub struct ContactStore {
    contacts: watch::Sender<Vec<Contact>>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            contacts: watch::Sender::new(Vec::new()),
        }
    }

    /// Append a contact to the end of the list and notify subscribers.
    pub fn add(&self, contact: Contact) {
        let mut position = 0;
        self.contacts.send_modify(|contacts| {
            contacts.push(contact);
            position = contacts.len() - 1;
        });

        tracing::debug!(
            position = position,
            subscribers = self.contacts.receiver_count(),
            "Contact appended"
        );
    }

    /// Snapshot of every contact, in insertion order.
    pub fn list(&self) -> Vec<Contact> {
        self.contacts.borrow().clone()
    }

    /// Number of contacts held.
    pub fn len(&self) -> usize {
        self.contacts.borrow().len()
    }

    /// Whether no contact has been added yet.
    pub fn is_empty(&self) -> bool {
        self.contacts.borrow().is_empty()
    }

    /// Observe the list. The subscription starts out caught up with the
    /// current contents.
    pub fn subscribe(&self) -> ContactSubscription {
        ContactSubscription {
            receiver: self.contacts.subscribe(),
        }
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of a [`ContactStore`] that is notified of appends.
#[derive(Debug, Clone)]
pub struct ContactSubscription {
    receiver: watch::Receiver<Vec<Contact>>,
}

impl ContactSubscription {
    /// Wait for the next append and return the full list after it.
    ///
    /// Several appends between two calls are coalesced into one wake-up.
    /// Returns `None` once the store has been dropped.
    pub async fn changed(&mut self) -> Option<Vec<Contact>> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}
