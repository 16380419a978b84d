use kv_log_macro as log;
use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::Path};

use crate::{FieldKey, Mode};

/// Screen configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    ReadError {
        path: String,
        source: std::io::Error,
    },
    /// The configuration is not valid JSON for this schema
    ParseError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ReadError { path, source } => {
                write!(f, "Failed to read screen config '{}': {}", path, source)
            }
            ConfigError::ParseError(msg) => write!(f, "Invalid screen config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Text shown for one mode
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeLabels {
    /// Header title
    pub title: String,
    /// Label on the submit button
    pub submit_label: String,
    /// Label on the link that switches to the other mode
    pub toggle_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldLabels {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
}

impl FieldLabels {
    pub fn label(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Email => &self.email,
            FieldKey::Password => &self.password,
            FieldKey::Name => &self.name,
            FieldKey::Phone => &self.phone,
        }
    }
}

impl Default for FieldLabels {
    fn default() -> Self {
        FieldLabels {
            email: "Email".to_string(),
            password: "Password".to_string(),
            name: "Name".to_string(),
            phone: "Phone number".to_string(),
        }
    }
}

/// Everything about the screen that a host may want to change without code.
///
/// Missing keys fall back to the defaults, so a config file only needs the
/// values it overrides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthScreenConfig {
    /// Where to navigate after a successful login or signup
    pub destination: String,
    pub alert_title: String,
    pub acknowledge_label: String,
    pub login: ModeLabels,
    pub signup: ModeLabels,
    pub fields: FieldLabels,
}

impl Default for AuthScreenConfig {
    fn default() -> Self {
        AuthScreenConfig {
            destination: "Shop".to_string(),
            alert_title: "An error occurred!".to_string(),
            acknowledge_label: "Okay".to_string(),
            login: ModeLabels {
                title: "Log in".to_string(),
                submit_label: "Log in".to_string(),
                toggle_label: "I don't have an account".to_string(),
            },
            signup: ModeLabels {
                title: "Sign up".to_string(),
                submit_label: "Sign up".to_string(),
                toggle_label: "I already have an account".to_string(),
            },
            fields: FieldLabels::default(),
        }
    }
}

impl AuthScreenConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_json_str(&contents)?;
        log::debug!("Loaded screen config from {}", path.display());
        Ok(config)
    }

    pub fn labels(&self, mode: Mode) -> &ModeLabels {
        match mode {
            Mode::Login => &self.login,
            Mode::Signup => &self.signup,
        }
    }
}
