use serde::{Deserialize, Serialize};
use std::fmt;

/// The only error an auth operation reports.
///
/// The message is shown to the user exactly as the service supplied it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionFailure {
    pub message: String,
}

impl SubmissionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        SubmissionFailure {
            message: message.into(),
        }
    }
}

impl fmt::Display for SubmissionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SubmissionFailure {}

impl From<String> for SubmissionFailure {
    fn from(message: String) -> Self {
        SubmissionFailure::new(message)
    }
}

impl From<&str> for SubmissionFailure {
    fn from(message: &str) -> Self {
        SubmissionFailure::new(message)
    }
}
