use kv_log_macro as log;
use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::Path, sync::Arc, time::Duration};

use authscreen::{AuthScreen, AuthScreenConfig, ErrorAlert, Handled, ScreenEvent, ScreenView};

use crate::{
    accounts::{Account, AccountDirectory},
    console::{ConsoleAlerts, ConsoleNavigator},
};

/// Script loading errors
#[derive(Debug)]
pub enum ScriptError {
    /// Failed to read the script file
    ReadError {
        path: String,
        source: std::io::Error,
    },
    /// The script is not valid JSON for this schema
    ParseError(String),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ReadError { path, source } => {
                write!(f, "Failed to read script '{}': {}", path, source)
            }
            ScriptError::ParseError(msg) => write!(f, "Invalid script: {}", msg),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::ReadError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ScriptError {
    fn from(err: serde_json::Error) -> Self {
        ScriptError::ParseError(err.to_string())
    }
}

/// A recorded session: the accounts that exist and what the user did.
///
/// Field events carry the validity the input layer computed at record time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub accounts: Vec<Account>,
    /// Simulated backend latency in milliseconds
    #[serde(default)]
    pub latency_ms: u64,
    pub events: Vec<ScreenEvent>,
}

impl Script {
    pub fn from_json_str(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ScriptError::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

/// What happened while replaying a script
#[derive(Clone, Debug)]
pub struct ReplayReport {
    pub handled: Vec<(&'static str, Handled)>,
    pub destinations: Vec<String>,
    pub alerts: Vec<ErrorAlert>,
    pub final_view: ScreenView,
}

impl ReplayReport {
    pub fn navigated(&self) -> bool {
        !self.destinations.is_empty()
    }
}

/// Mounts a fresh screen and feeds it every event in the script
pub async fn replay(script: &Script, config: AuthScreenConfig) -> ReplayReport {
    let directory = AccountDirectory::new(script.accounts.iter().cloned())
        .with_latency(Duration::from_millis(script.latency_ms));
    let navigator = Arc::new(ConsoleNavigator::default());
    let alerts = Arc::new(ConsoleAlerts::default());

    let mut screen = AuthScreen::new(directory, navigator.clone(), alerts.clone(), config);
    let mut handled = Vec::with_capacity(script.events.len());

    for event in &script.events {
        let name = event.name();
        let outcome = screen.handle(event.clone()).await;
        if outcome == Handled::Ignored {
            log::debug!("Event had no effect", { event: name });
        }
        handled.push((name, outcome));
    }

    ReplayReport {
        handled,
        destinations: navigator.destinations(),
        alerts: alerts.shown(),
        final_view: screen.view(),
    }
}
