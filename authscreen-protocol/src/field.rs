use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Identifies one input on the authentication form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Email,
    Password,
    Name,
    Phone,
}

impl FieldKey {
    /// Every field the form knows about, in display order
    pub const ALL: [FieldKey; 4] = [
        FieldKey::Email,
        FieldKey::Password,
        FieldKey::Name,
        FieldKey::Phone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Email => "email",
            FieldKey::Password => "password",
            FieldKey::Name => "name",
            FieldKey::Phone => "phone",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown form field '{}'", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for FieldKey {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl log::kv::ToValue for FieldKey {
    fn to_value(&self) -> log::kv::Value<'_> {
        log::kv::Value::from(self.as_str())
    }
}
