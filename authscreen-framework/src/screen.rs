use kv_log_macro as log;

use crate::{
    AlertPresenter, AuthScreenConfig, AuthService, FieldKey, FormState, Mode, Navigator,
    ScreenEvent, SubmissionController, SubmissionState,
};

/// Whether an event changed anything
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handled {
    Applied,
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldView {
    pub key: FieldKey,
    pub label: String,
    pub value: String,
    pub is_valid: bool,
}

/// What the screen should currently show. Rendering it is up to the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenView {
    pub title: String,
    pub fields: Vec<FieldView>,
    pub submit_label: String,
    pub submit_enabled: bool,
    /// The spinner takes the place of the submit button
    pub show_spinner: bool,
    pub toggle_label: String,
}

/// One mounted login/signup screen.
///
/// Owns its form, its mode and a [`SubmissionController`]. Dropping the screen
/// discards all of them.
pub struct AuthScreen<S, N, A> {
    controller: SubmissionController<S, N, A>,
    form: FormState,
    mode: Mode,
}

impl<S, N, A> AuthScreen<S, N, A>
where
    S: AuthService,
    N: Navigator,
    A: AlertPresenter,
{
    pub fn new(service: S, navigator: N, alerts: A, config: AuthScreenConfig) -> Self {
        let mode = Mode::default();
        AuthScreen {
            controller: SubmissionController::new(service, navigator, alerts, config),
            form: FormState::new(mode),
            mode,
        }
    }

    pub async fn handle(&mut self, event: ScreenEvent) -> Handled {
        log::debug!("Screen event", { event: event, mode: self.mode });

        match event {
            ScreenEvent::FieldChanged(update) => {
                if self.controller.state() == SubmissionState::Succeeded {
                    log::debug!("Ignoring field update after success", { field: update.field });
                    return Handled::Ignored;
                }

                let form = std::mem::take(&mut self.form);
                self.form = form.reduce(update);
                Handled::Applied
            }

            ScreenEvent::ToggleMode => match self.controller.state() {
                SubmissionState::Submitting | SubmissionState::Succeeded => Handled::Ignored,
                _ => {
                    self.mode = self.mode.toggled();
                    let form = std::mem::take(&mut self.form);
                    self.form = form.with_mode(self.mode);
                    log::info!("Mode switched", { mode: self.mode });
                    Handled::Applied
                }
            },

            ScreenEvent::Submit => {
                if !self.form.is_valid() {
                    log::debug!("Submit pressed on invalid form");
                    return Handled::Ignored;
                }

                match self.controller.submit(self.mode, &self.form).await {
                    Ok(()) => Handled::Applied,
                    Err(_) => Handled::Ignored,
                }
            }

            ScreenEvent::AcknowledgeError => {
                if self.controller.acknowledge_error() {
                    Handled::Applied
                } else {
                    Handled::Ignored
                }
            }
        }
    }

    pub fn view(&self) -> ScreenView {
        let config = self.controller.config();
        let labels = config.labels(self.mode);

        let fields = self
            .form
            .active_fields()
            .into_iter()
            .map(|key| FieldView {
                key,
                label: config.fields.label(key).to_string(),
                value: self.form.value(key).to_string(),
                is_valid: self.form.validity(key).unwrap_or(false),
            })
            .collect();

        ScreenView {
            title: labels.title.clone(),
            fields,
            submit_label: labels.submit_label.clone(),
            submit_enabled: self.form.is_valid()
                && self.controller.state() == SubmissionState::Idle,
            show_spinner: self.controller.is_loading(),
            toggle_label: labels.toggle_label.clone(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn controller(&self) -> &SubmissionController<S, N, A> {
        &self.controller
    }
}
