use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::{credentials::Credentials, field::FieldKey, mode::Mode};

/// A new value for one field, together with the validity the input layer computed for it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldUpdate {
    pub field: FieldKey,
    pub value: String,
    pub is_valid: bool,
}

impl FieldUpdate {
    pub fn new(field: FieldKey, value: impl Into<String>, is_valid: bool) -> Self {
        FieldUpdate {
            field,
            value: value.into(),
            is_valid,
        }
    }
}

/// Values and validities for every field the form has seen.
///
/// Only the fields active in the current [`Mode`] count towards [`FormState::is_valid`].
/// Fields that fall out of the active set keep their last value and validity, so
/// toggling back to a mode restores what the user had typed.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    values: FxHashMap<FieldKey, String>,
    validities: FxHashMap<FieldKey, bool>,
    active: FxHashSet<FieldKey>,
    is_valid: bool,
}

impl FormState {
    /// A fresh form for `mode` with every field empty and invalid
    pub fn new(mode: Mode) -> Self {
        FormState {
            values: FxHashMap::default(),
            validities: FxHashMap::default(),
            active: FxHashSet::default(),
            is_valid: false,
        }
        .with_mode(mode)
    }

    /// Applies one field update and recomputes overall validity
    pub fn reduce(mut self, update: FieldUpdate) -> Self {
        let FieldUpdate {
            field,
            value,
            is_valid,
        } = update;

        self.values.insert(field, value);
        self.validities.insert(field, is_valid);
        self.is_valid = self.compute_validity();
        self
    }

    /// Switches the active field set to the fields of `mode`
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.active = mode.fields().iter().copied().collect();

        for key in mode.fields() {
            self.values.entry(*key).or_default();
            self.validities.entry(*key).or_insert(false);
        }

        self.is_valid = self.compute_validity();
        self
    }

    fn compute_validity(&self) -> bool {
        self.active
            .iter()
            .filter_map(|key| self.validities.get(key))
            .all(|valid| *valid)
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn value(&self, key: FieldKey) -> &str {
        self.values.get(&key).map(String::as_str).unwrap_or("")
    }

    pub fn validity(&self, key: FieldKey) -> Option<bool> {
        self.validities.get(&key).copied()
    }

    pub fn is_active(&self, key: FieldKey) -> bool {
        self.active.contains(&key)
    }

    /// Active fields in display order
    pub fn active_fields(&self) -> Vec<FieldKey> {
        FieldKey::ALL
            .iter()
            .copied()
            .filter(|key| self.active.contains(key))
            .collect()
    }

    /// Collects the values `mode` submits to the auth service
    pub fn credentials(&self, mode: Mode) -> Credentials {
        let optional = |key: FieldKey| {
            if mode.is_signup() {
                Some(self.value(key).to_string())
            } else {
                None
            }
        };

        Credentials {
            email: self.value(FieldKey::Email).to_string(),
            password: self.value(FieldKey::Password).to_string(),
            name: optional(FieldKey::Name),
            phone: optional(FieldKey::Phone),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        FormState::new(Mode::default())
    }
}

/// Free-function form of [`FormState::reduce`]
pub fn reduce(state: FormState, update: FieldUpdate) -> FormState {
    state.reduce(update)
}
