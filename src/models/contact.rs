//! Contact model representing one accepted entry of the contact list.

use crate::domain::{ContactName, ContactType, EmailAddress, PhoneNumber};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Serializes an unselected type as an empty string.
fn serialize_kind<S>(kind: &Option<ContactType>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(kind.map_or("", |k| k.label()))
}

/// Accepts either a type label or an empty string.
fn deserialize_kind<'de, D>(deserializer: D) -> Result<Option<ContactType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(serde::de::Error::custom)
}

/// A contact accepted from the contact form.
///
/// All fields are validated value objects, so every `Contact` satisfies the
/// form's constraints from the moment it exists. There is no id; two
/// contacts with the same values are equal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Contact {
    /// Name as entered
    pub name: ContactName,

    /// Ten-digit phone number
    pub phone: PhoneNumber,

    /// Email address
    pub email: EmailAddress,

    /// Relationship type, `None` when nothing was selected
    #[serde(
        rename = "type",
        default,
        serialize_with = "serialize_kind",
        deserialize_with = "deserialize_kind"
    )]
    pub kind: Option<ContactType>,
}

impl Contact {
    /// Create a contact from already-validated parts.
    pub fn new(
        name: ContactName,
        phone: PhoneNumber,
        email: EmailAddress,
        kind: Option<ContactType>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            kind,
        }
    }

    /// The type label, or an empty string when no type was selected.
    pub fn kind_label(&self) -> &'static str {
        self.kind.map_or("", |k| k.label())
    }
}

/// Renders the list row: `{name} - {phone} - {email} - {type}`.
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {} - {}",
            self.name,
            self.phone,
            self.email,
            self.kind_label()
        )
    }
}
