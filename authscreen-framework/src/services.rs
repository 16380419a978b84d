use async_trait::async_trait;
use std::sync::Arc;

use crate::{Credentials, SubmissionFailure};

/// The external operation that signs users in and registers them.
///
/// Implementations own the transport, token handling and storage; the screen only
/// sees success or an opaque failure message.
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<(), SubmissionFailure>;
    async fn signup(&self, credentials: &Credentials) -> Result<(), SubmissionFailure>;
}

/// Moves the user to another screen
pub trait Navigator {
    fn navigate_to(&self, destination: &str);
}

/// A modal error with a single acknowledgement action
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorAlert {
    pub title: String,
    pub message: String,
    pub acknowledge_label: String,
}

/// Shows error alerts to the user.
///
/// When the user dismisses the alert the host calls
/// [`SubmissionController::acknowledge_error`](crate::SubmissionController::acknowledge_error).
pub trait AlertPresenter {
    fn present_error(&self, alert: &ErrorAlert);
}

#[async_trait]
impl<T: AuthService + ?Sized> AuthService for Arc<T> {
    async fn login(&self, email: &str, password: &str) -> Result<(), SubmissionFailure> {
        (**self).login(email, password).await
    }

    async fn signup(&self, credentials: &Credentials) -> Result<(), SubmissionFailure> {
        (**self).signup(credentials).await
    }
}

impl<T: Navigator + ?Sized> Navigator for Arc<T> {
    fn navigate_to(&self, destination: &str) {
        (**self).navigate_to(destination)
    }
}

impl<T: AlertPresenter + ?Sized> AlertPresenter for Arc<T> {
    fn present_error(&self, alert: &ErrorAlert) {
        (**self).present_error(alert)
    }
}
