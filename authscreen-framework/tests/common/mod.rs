//! Common test collaborators shared across integration tests

use async_trait::async_trait;
use authscreen::{
    AlertPresenter, AuthService, Credentials, ErrorAlert, Navigator, SubmissionFailure,
};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// One call the auth service received
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(dead_code)]
pub enum AuthCall {
    Login { email: String, password: String },
    Signup(Credentials),
}

/// Auth service that records calls and answers with a fixed result.
///
/// With a gate installed, every call waits for the gate to be notified before
/// answering, which keeps the submission in flight for as long as a test needs.
pub struct RecordingAuthService {
    calls: Mutex<Vec<AuthCall>>,
    result: Result<(), SubmissionFailure>,
    gate: Option<Arc<Notify>>,
}

#[allow(dead_code)]
impl RecordingAuthService {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self::with_result(Ok(())))
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self::with_result(Err(SubmissionFailure::new(message))))
    }

    pub fn gated(result: Result<(), SubmissionFailure>, gate: Arc<Notify>) -> Arc<Self> {
        Arc::new(RecordingAuthService {
            gate: Some(gate),
            ..Self::with_result(result)
        })
    }

    fn with_result(result: Result<(), SubmissionFailure>) -> Self {
        RecordingAuthService {
            calls: Mutex::new(Vec::new()),
            result,
            gate: None,
        }
    }

    pub fn calls(&self) -> Vec<AuthCall> {
        self.calls.lock().unwrap().clone()
    }

    async fn answer(&self, call: AuthCall) -> Result<(), SubmissionFailure> {
        self.calls.lock().unwrap().push(call);

        match &self.gate {
            Some(gate) => gate.notified().await,
            None => tokio::task::yield_now().await,
        }

        self.result.clone()
    }
}

#[async_trait]
impl AuthService for RecordingAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<(), SubmissionFailure> {
        self.answer(AuthCall::Login {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
    }

    async fn signup(&self, credentials: &Credentials) -> Result<(), SubmissionFailure> {
        self.answer(AuthCall::Signup(credentials.clone())).await
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    destinations: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn destinations(&self) -> Vec<String> {
        self.destinations.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, destination: &str) {
        self.destinations
            .lock()
            .unwrap()
            .push(destination.to_string());
    }
}

#[derive(Default)]
pub struct RecordingAlerts {
    alerts: Mutex<Vec<ErrorAlert>>,
}

#[allow(dead_code)]
impl RecordingAlerts {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn alerts(&self) -> Vec<ErrorAlert> {
        self.alerts.lock().unwrap().clone()
    }
}

impl AlertPresenter for RecordingAlerts {
    fn present_error(&self, alert: &ErrorAlert) {
        self.alerts.lock().unwrap().push(alert.clone());
    }
}
