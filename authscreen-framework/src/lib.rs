mod config;
mod controller;
mod logging;
mod screen;
mod services;

pub use authscreen_protocol::{
    credentials::Credentials,
    event::ScreenEvent,
    failure::SubmissionFailure,
    field::FieldKey,
    form_state::{FieldUpdate, FormState},
    mode::Mode,
};
pub use config::{AuthScreenConfig, ConfigError, FieldLabels, ModeLabels};
pub use controller::{SubmissionController, SubmissionState, SubmitRejected};
pub use logging::{init_logging, LoggerKind};
pub use screen::{AuthScreen, FieldView, Handled, ScreenView};
pub use services::{AlertPresenter, AuthService, ErrorAlert, Navigator};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
