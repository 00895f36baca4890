//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a contact. Each value object is
//! validated at construction time, so a contact built from them can never
//! hold a blank name, a malformed phone number, or a malformed email.

pub mod contact_type;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use contact_type::ContactType;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::{PhoneEntryRejection, PhoneNumber, PHONE_DIGITS};
