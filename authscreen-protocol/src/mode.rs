use serde::{Deserialize, Serialize};

use crate::field::FieldKey;

/// Whether the screen is signing an existing user in or registering a new one
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Login,
    Signup,
}

const LOGIN_FIELDS: &[FieldKey] = &[FieldKey::Email, FieldKey::Password];
const SIGNUP_FIELDS: &[FieldKey] = &[
    FieldKey::Email,
    FieldKey::Password,
    FieldKey::Name,
    FieldKey::Phone,
];

impl Mode {
    /// The fields that take part in this mode, in display order
    pub fn fields(&self) -> &'static [FieldKey] {
        match self {
            Mode::Login => LOGIN_FIELDS,
            Mode::Signup => SIGNUP_FIELDS,
        }
    }

    pub fn toggled(&self) -> Mode {
        match self {
            Mode::Login => Mode::Signup,
            Mode::Signup => Mode::Login,
        }
    }

    pub fn is_signup(&self) -> bool {
        matches!(self, Mode::Signup)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Login => "login",
            Mode::Signup => "signup",
        }
    }
}

impl log::kv::ToValue for Mode {
    fn to_value(&self) -> log::kv::Value<'_> {
        log::kv::Value::from(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(Mode::Login.toggled(), Mode::Signup);
        assert_eq!(Mode::Login.toggled().toggled(), Mode::Login);
    }

    #[test]
    fn test_signup_is_superset_of_login() {
        for key in Mode::Login.fields() {
            assert!(Mode::Signup.fields().contains(key));
        }
        assert_eq!(Mode::Signup.fields().len(), 4);
    }

    #[test]
    fn test_default_mode_is_login() {
        assert_eq!(Mode::default(), Mode::Login);
    }
}
