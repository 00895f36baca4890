//! The contact form: transient field state, validation and the controller
//! that turns a valid form into a stored contact.

pub mod controller;
pub mod state;
pub mod validation;

pub use controller::{ContactFormController, PhoneEdit, SubmitOutcome};
pub use state::{FormState, EMAIL_ERROR_MESSAGE, PHONE_ERROR_MESSAGE};
pub use validation::ValidationReport;
