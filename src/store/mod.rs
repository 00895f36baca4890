//! In-memory contact storage for the lifetime of a session.

pub mod contact_store;

pub use contact_store::{ContactStore, ContactSubscription};
