//! ContactType value object.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The relationship a contact has to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactType {
    Friend,
    Family,
    Work,
}

impl ContactType {
    /// Every type, in the order the selector lists them.
    pub const ALL: [ContactType; 3] = [ContactType::Friend, ContactType::Family, ContactType::Work];

    /// Label shown in the selector and in list rows.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Friend => "Friend",
            Self::Family => "Family",
            Self::Work => "Work",
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a label case-insensitively.
impl FromStr for ContactType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownContactType(s.to_string()))
    }
}
