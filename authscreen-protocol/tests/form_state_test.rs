//! Form state reducer tests
//!
//! These tests verify that overall validity always tracks the per-field validities of
//! the active fields, across arbitrary update orders and mode switches.

use authscreen_protocol::{FieldKey, FieldUpdate, FormState, Mode};

fn apply(state: FormState, updates: &[FieldUpdate]) -> FormState {
    updates
        .iter()
        .cloned()
        .fold(state, |state, update| state.reduce(update))
}

/// All orderings of a small slice, enough for exhaustive order checks
fn permutations(items: &[FieldUpdate]) -> Vec<Vec<FieldUpdate>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }

    let mut result = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head.clone());
            result.push(tail);
        }
    }
    result
}

#[test]
fn test_login_scenario_valid() {
    let state = apply(
        FormState::new(Mode::Login),
        &[
            FieldUpdate::new(FieldKey::Email, "a@b.com", true),
            FieldUpdate::new(FieldKey::Password, "abcde", true),
        ],
    );

    assert!(state.is_valid());
    assert_eq!(state.value(FieldKey::Email), "a@b.com");
    assert_eq!(state.value(FieldKey::Password), "abcde");
}

#[test]
fn test_one_invalid_field_invalidates_form() {
    let state = apply(
        FormState::new(Mode::Login),
        &[
            FieldUpdate::new(FieldKey::Email, "a@b.com", true),
            FieldUpdate::new(FieldKey::Password, "abcde", true),
            FieldUpdate::new(FieldKey::Password, "ab", false),
        ],
    );

    assert!(!state.is_valid());
}

#[test]
fn test_validity_is_and_of_active_fields_for_every_combination() {
    let keys = Mode::Signup.fields();

    // Every assignment of validities to the four signup fields
    for mask in 0u8..16 {
        let updates: Vec<FieldUpdate> = keys
            .iter()
            .enumerate()
            .map(|(bit, key)| FieldUpdate::new(*key, "x", mask & (1 << bit) != 0))
            .collect();

        let state = apply(FormState::new(Mode::Signup), &updates);
        assert_eq!(state.is_valid(), mask == 0b1111, "mask {:04b}", mask);
    }
}

#[test]
fn test_updates_to_distinct_fields_commute() {
    let updates = vec![
        FieldUpdate::new(FieldKey::Email, "a@b.com", true),
        FieldUpdate::new(FieldKey::Password, "ab", false),
        FieldUpdate::new(FieldKey::Name, "Ann", true),
        FieldUpdate::new(FieldKey::Phone, "0123456789", true),
    ];

    let expected = apply(FormState::new(Mode::Signup), &updates);
    for order in permutations(&updates) {
        let state = apply(FormState::new(Mode::Signup), &order);
        assert_eq!(state, expected);
        assert!(!state.is_valid());
    }
}

#[test]
fn test_switching_to_login_ignores_signup_fields() {
    let state = apply(
        FormState::new(Mode::Signup),
        &[
            FieldUpdate::new(FieldKey::Email, "a@b.com", true),
            FieldUpdate::new(FieldKey::Password, "abcde", true),
            FieldUpdate::new(FieldKey::Phone, "12", false),
        ],
    );
    assert!(!state.is_valid());

    let state = state.with_mode(Mode::Login);
    assert!(state.is_valid());
    assert!(!state.is_active(FieldKey::Phone));
    assert_eq!(
        state.active_fields(),
        vec![FieldKey::Email, FieldKey::Password]
    );
}

#[test]
fn test_switching_to_signup_adds_empty_invalid_fields() {
    let state = apply(
        FormState::new(Mode::Login),
        &[
            FieldUpdate::new(FieldKey::Email, "a@b.com", true),
            FieldUpdate::new(FieldKey::Password, "abcde", true),
        ],
    );
    assert!(state.is_valid());

    let state = state.with_mode(Mode::Signup);
    assert!(!state.is_valid());
    assert_eq!(state.value(FieldKey::Name), "");
    assert_eq!(state.validity(FieldKey::Name), Some(false));
    assert_eq!(state.validity(FieldKey::Phone), Some(false));
}

#[test]
fn test_toggling_back_restores_retained_fields() {
    let state = apply(
        FormState::new(Mode::Signup),
        &[
            FieldUpdate::new(FieldKey::Email, "a@b.com", true),
            FieldUpdate::new(FieldKey::Password, "abcde", true),
            FieldUpdate::new(FieldKey::Name, "Ann", true),
            FieldUpdate::new(FieldKey::Phone, "0123456789", true),
        ],
    );

    let state = state.with_mode(Mode::Login).with_mode(Mode::Signup);
    assert!(state.is_valid());
    assert_eq!(state.value(FieldKey::Name), "Ann");
    assert_eq!(state.value(FieldKey::Phone), "0123456789");
}

#[test]
fn test_with_same_mode_is_noop() {
    let state = apply(
        FormState::new(Mode::Login),
        &[FieldUpdate::new(FieldKey::Email, "a@b.com", true)],
    );
    assert_eq!(state.clone().with_mode(Mode::Login), state);
}
