use super::*;

#[test]
fn classifier_default_is_idle() {
    assert_eq!(ClassifierState::default(), ClassifierState::Idle);
}

#[test]
fn idle_message_prompts_for_a_drawing() {
    assert_eq!(ClassifierState::Idle.message(), "Draw a digit, then ask.");
}

#[test]
fn pending_message() {
    assert_eq!(ClassifierState::Pending.message(), "Thinking...");
}

#[test]
fn classified_message_includes_the_label() {
    let state = ClassifierState::Classified("7".to_owned());
    assert_eq!(state.message(), "I think it's 7.");
}

#[test]
fn classifier_states_are_distinct() {
    assert_ne!(ClassifierState::Idle, ClassifierState::Pending);
    assert_ne!(ClassifierState::Pending, ClassifierState::Classified("1".to_owned()));
    assert_ne!(
        ClassifierState::Classified("1".to_owned()),
        ClassifierState::Classified("2".to_owned())
    );
}
