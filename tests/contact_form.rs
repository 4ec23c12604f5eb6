//! Public contact form lifecycle.

use tekstra_ui::models::contact::SUCCESS_MESSAGE;
use tekstra_ui::models::{ContactForm, ContactFormState, SubmitStatus};

fn filled() -> ContactFormState {
    let mut state = ContactFormState::default();
    state.form = ContactForm {
        name: "Grace".to_string(),
        email: "grace@example.com".to_string(),
        subject: "Workshop".to_string(),
        organization: "Navy".to_string(),
        message: "Can we host a COBOL night?".to_string(),
    };
    state
}

#[test]
fn test_submit_moves_to_success_and_clears_fields() {
    let mut state = filled();
    assert_eq!(state.status(), SubmitStatus::Idle);

    assert!(state.begin_submit());
    assert!(state.is_submitting());
    assert_eq!(state.status_message(), None);

    state.complete_submit();
    assert_eq!(state.status(), SubmitStatus::Success);
    assert!(state.form.is_empty());
    assert_eq!(state.status_message(), Some(SUCCESS_MESSAGE));
}

#[test]
fn test_double_submit_is_ignored() {
    let mut state = filled();
    assert!(state.begin_submit());
    assert!(!state.begin_submit());
}

#[test]
fn test_dismiss_returns_to_idle() {
    let mut state = filled();
    state.begin_submit();
    state.complete_submit();
    state.dismiss();
    assert_eq!(state.status(), SubmitStatus::Idle);
    assert_eq!(state.status_message(), None);
}

#[test]
fn test_completion_without_submit_keeps_fields() {
    let mut state = filled();
    state.complete_submit();
    assert_eq!(state.status(), SubmitStatus::Idle);
    assert!(!state.form.is_empty());
}
