use kv_log_macro as log;
use std::{cell::RefCell, fmt};

use crate::{
    AlertPresenter, AuthScreenConfig, AuthService, ErrorAlert, FormState, Mode, Navigator,
    SubmissionFailure,
};

/// Where a submission is in its lifecycle.
///
/// `Idle -> Submitting -> {Succeeded | Failed} -> Idle`. `Succeeded` is terminal for a
/// screen instance since navigation replaces the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed(_) => "failed",
        }
    }
}

impl ::log::kv::ToValue for SubmissionState {
    fn to_value(&self) -> ::log::kv::Value<'_> {
        ::log::kv::Value::from(self.name())
    }
}

/// Returned when `submit` is called while the controller is not idle
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitRejected {
    pub state: SubmissionState,
}

impl fmt::Display for SubmitRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Submission rejected while controller is {}",
            self.state.name()
        )
    }
}

impl std::error::Error for SubmitRejected {}

struct Progress {
    state: SubmissionState,
    loading: bool,
    error: Option<String>,
}

/// Runs one login or signup attempt at a time against an [`AuthService`].
///
/// State lives in a `RefCell` and is never borrowed across an `.await`, so the
/// controller is meant to be driven from a single event loop. A second `submit`
/// made while the first is still awaiting the service sees `Submitting` and is
/// rejected without touching the service.
pub struct SubmissionController<S, N, A> {
    service: S,
    navigator: N,
    alerts: A,
    config: AuthScreenConfig,
    progress: RefCell<Progress>,
}

impl<S, N, A> SubmissionController<S, N, A>
where
    S: AuthService,
    N: Navigator,
    A: AlertPresenter,
{
    pub fn new(service: S, navigator: N, alerts: A, config: AuthScreenConfig) -> Self {
        SubmissionController {
            service,
            navigator,
            alerts,
            config,
            progress: RefCell::new(Progress {
                state: SubmissionState::Idle,
                loading: false,
                error: None,
            }),
        }
    }

    /// Sends the form's credentials to the operation `mode` selects.
    ///
    /// The form is trusted to be valid; checking that is the caller's job. Success
    /// navigates to the configured destination, failure shows an alert and waits for
    /// [`acknowledge_error`](Self::acknowledge_error).
    pub async fn submit(&self, mode: Mode, form: &FormState) -> Result<(), SubmitRejected> {
        self.begin()?;

        let credentials = form.credentials(mode);
        log::info!("Submitting credentials", {
            mode: mode,
            email: credentials.email.as_str()
        });

        let result = match mode {
            Mode::Login => {
                self.service
                    .login(&credentials.email, &credentials.password)
                    .await
            }
            Mode::Signup => self.service.signup(&credentials).await,
        };

        match result {
            Ok(()) => self.succeed(mode),
            Err(failure) => self.fail(mode, failure),
        }

        Ok(())
    }

    fn begin(&self) -> Result<(), SubmitRejected> {
        let mut progress = self.progress.borrow_mut();
        if progress.state != SubmissionState::Idle {
            log::warn!("Ignoring submit", { state: progress.state });
            return Err(SubmitRejected {
                state: progress.state.clone(),
            });
        }

        // Error is cleared before the indicator turns on
        progress.error = None;
        progress.loading = true;
        progress.state = SubmissionState::Submitting;
        Ok(())
    }

    fn succeed(&self, mode: Mode) {
        // Loading stays on; the screen is being replaced
        self.progress.borrow_mut().state = SubmissionState::Succeeded;

        log::info!("Submission succeeded", {
            mode: mode,
            destination: self.config.destination.as_str()
        });
        self.navigator.navigate_to(&self.config.destination);
    }

    fn fail(&self, mode: Mode, failure: SubmissionFailure) {
        let SubmissionFailure { message } = failure;
        {
            let mut progress = self.progress.borrow_mut();
            progress.state = SubmissionState::Failed(message.clone());
            progress.error = Some(message.clone());
            progress.loading = false;
        }

        log::warn!("Submission failed", { mode: mode, message: message.as_str() });
        self.alerts.present_error(&ErrorAlert {
            title: self.config.alert_title.clone(),
            message,
            acknowledge_label: self.config.acknowledge_label.clone(),
        });
    }

    /// Dismisses a failure and allows another attempt.
    ///
    /// Returns false when there is no failure to acknowledge.
    pub fn acknowledge_error(&self) -> bool {
        let mut progress = self.progress.borrow_mut();
        if !matches!(progress.state, SubmissionState::Failed(_)) {
            return false;
        }

        progress.state = SubmissionState::Idle;
        log::debug!("Error acknowledged");
        true
    }

    pub fn state(&self) -> SubmissionState {
        self.progress.borrow().state.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.progress.borrow().loading
    }

    /// The last failure message, kept until the next submit starts
    pub fn error(&self) -> Option<String> {
        self.progress.borrow().error.clone()
    }

    pub fn config(&self) -> &AuthScreenConfig {
        &self.config
    }
}
