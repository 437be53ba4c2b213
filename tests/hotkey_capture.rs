use std::sync::atomic::Ordering;

use auto_clicker::settings::Settings;
use auto_clicker::state::SessionState;
use auto_clicker::trigger::{observe, Observation, Trigger};

#[test]
fn capture_sets_the_trigger_without_toggling() {
    let state = SessionState::from_settings(&Settings::default());
    state.begin_capture();

    let outcome = observe(&state, Trigger::parse("f6"));
    assert_eq!(outcome, Observation::Captured);
    assert!(!state.capturing.load(Ordering::SeqCst));
    assert_eq!(state.trigger(), Trigger::parse("f6"));

    // same event again, now outside capture mode: a plain match
    assert_eq!(observe(&state, Trigger::parse("f6")), Observation::Matched);
}

#[test]
fn capture_replaces_a_keyboard_trigger_with_a_mouse_one() {
    let state = SessionState::from_settings(&Settings::default());
    assert_eq!(state.trigger(), Trigger::parse("f6"));

    state.begin_capture();
    assert_eq!(
        observe(&state, Trigger::parse("Button.right")),
        Observation::Captured
    );
    assert_eq!(state.trigger().to_string(), "Button.right");

    // the old trigger no longer matches
    assert_eq!(observe(&state, Trigger::parse("f6")), Observation::Ignored);
    assert_eq!(
        observe(&state, Trigger::parse("Button.right")),
        Observation::Matched
    );
}

#[test]
fn only_the_exact_identifier_matches() {
    let state = SessionState::from_settings(&Settings::default());

    assert_eq!(observe(&state, Trigger::parse("f5")), Observation::Ignored);
    assert_eq!(
        observe(&state, Trigger::parse("Button.left")),
        Observation::Ignored
    );
    // a key named like a button suffix must not match a mouse trigger
    state.set_trigger(Trigger::parse("Button.right"));
    assert_eq!(
        observe(&state, Trigger::parse("right")),
        Observation::Ignored
    );
}
