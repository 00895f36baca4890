//! Contact Manager - a small contact list driven by a validated contact form.
//!
//! A contact is captured through a form (name, phone, email, type), checked
//! on submit, and appended to an in-memory list that lives for the session.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, email, type)
//! - **models**: The `Contact` record
//! - **store**: Append-only contact list with change subscriptions
//! - **form**: Form state, validation and the form controller
//! - **notice**: Fire-and-forget user notices and the host that shows them
//! - **app**: Terminal screens, commands and rendering
//! - **config**: Configuration from environment variables
//! - **error**: Error types for configuration and commands
//! - **observability**: Session metrics

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod models;
pub mod notice;
pub mod observability;
pub mod store;

pub use app::{Command, Screen, Session};
pub use config::Config;
pub use error::{CommandError, ConfigError};
pub use form::{ContactFormController, FormState, PhoneEdit, SubmitOutcome, ValidationReport};
pub use models::Contact;
pub use notice::{notice_channel, Notice, NoticeHost, NoticeSender};
pub use observability::SessionMetrics;
pub use store::{ContactStore, ContactSubscription};
