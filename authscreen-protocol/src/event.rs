use serde::{Deserialize, Serialize};

use crate::form_state::FieldUpdate;

/// Something the user did on the screen
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScreenEvent {
    /// The input layer reported a new value for a field
    FieldChanged(FieldUpdate),

    /// The "I have / don't have an account" link was pressed
    ToggleMode,

    /// The submit button was pressed
    Submit,

    /// The error alert was dismissed
    AcknowledgeError,
}

impl ScreenEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ScreenEvent::FieldChanged(_) => "field_changed",
            ScreenEvent::ToggleMode => "toggle_mode",
            ScreenEvent::Submit => "submit",
            ScreenEvent::AcknowledgeError => "acknowledge_error",
        }
    }
}

impl log::kv::ToValue for ScreenEvent {
    fn to_value(&self) -> log::kv::Value<'_> {
        log::kv::Value::from(self.name())
    }
}
