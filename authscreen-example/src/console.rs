use kv_log_macro as log;
use std::sync::Mutex;

use authscreen::{AlertPresenter, ErrorAlert, Navigator};

/// Logs navigation and remembers where the user was sent
#[derive(Default)]
pub struct ConsoleNavigator {
    destinations: Mutex<Vec<String>>,
}

impl ConsoleNavigator {
    pub fn destinations(&self) -> Vec<String> {
        self.destinations
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate_to(&self, destination: &str) {
        log::info!("Navigating", { destination: destination });
        if let Ok(mut destinations) = self.destinations.lock() {
            destinations.push(destination.to_string());
        }
    }
}

/// Logs alerts in place of showing a modal
#[derive(Default)]
pub struct ConsoleAlerts {
    shown: Mutex<Vec<ErrorAlert>>,
}

impl ConsoleAlerts {
    pub fn shown(&self) -> Vec<ErrorAlert> {
        self.shown.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl AlertPresenter for ConsoleAlerts {
    fn present_error(&self, alert: &ErrorAlert) {
        log::warn!("{}: {} [{}]", alert.title, alert.message, alert.acknowledge_label);
        if let Ok(mut shown) = self.shown.lock() {
            shown.push(alert.clone());
        }
    }
}
