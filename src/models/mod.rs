//! Data models for the contact manager.

pub mod contact;

pub use contact::Contact;
