//! Property tests for the session state machine.

use proptest::prelude::*;

use custom_lock::ui::mvi::Reducer;
use custom_lock::ui::session::{
    Mode, SessionIntent, SessionReducer, SessionState, ViewDirective, ViewName,
};

fn intent_strategy() -> impl Strategy<Value = SessionIntent> {
    prop_oneof![
        4 => (0x20u8..=0x7e).prop_map(|b| SessionIntent::Append(b as char)),
        2 => Just(SessionIntent::Backspace),
        1 => Just(SessionIntent::Cancel),
        1 => Just(SessionIntent::AuthFailed),
    ]
}

fn edit_strategy() -> impl Strategy<Value = SessionIntent> {
    prop_oneof![
        3 => (0x20u8..=0x7e).prop_map(|b| SessionIntent::Append(b as char)),
        2 => Just(SessionIntent::Backspace),
    ]
}

proptest! {
    #[test]
    fn length_is_clamped_net_count(intents in prop::collection::vec(edit_strategy(), 0..64)) {
        let mut state = SessionState::default();
        let mut expected = 0usize;
        for intent in intents {
            expected = match intent {
                SessionIntent::Append(_) => expected + 1,
                _ => expected.saturating_sub(1),
            };
            state = SessionReducer::reduce(state, intent);
            prop_assert_eq!(state.password().len(), expected);
        }
    }

    #[test]
    fn escape_always_resets(intents in prop::collection::vec(intent_strategy(), 0..32)) {
        let state = intents
            .into_iter()
            .fold(SessionState::default(), SessionReducer::reduce);
        let state = SessionReducer::reduce(state, SessionIntent::Cancel);
        prop_assert!(state.password().is_empty());
        prop_assert_eq!(state.mode(), Mode::Idle);
        prop_assert_eq!(state.last_error(), None);
    }

    #[test]
    fn mode_tracks_buffer_emptiness(intents in prop::collection::vec(intent_strategy(), 0..64)) {
        let mut state = SessionState::default();
        for intent in intents {
            state = SessionReducer::reduce(state, intent);
            let expected = if state.password().is_empty() { Mode::Idle } else { Mode::Typing };
            prop_assert_eq!(state.mode(), expected);
        }
    }

    #[test]
    fn dots_match_buffer_length(intents in prop::collection::vec(intent_strategy(), 0..64)) {
        let mut state = SessionState::default();
        for intent in intents {
            state = SessionReducer::reduce(state, intent);
            let directive = ViewDirective::from(&state);
            prop_assert_eq!(directive.dots, state.password().len());
            prop_assert_eq!(directive.dots_text().chars().count(), directive.dots);
            let view = if state.mode() == Mode::Typing { ViewName::Typing } else { ViewName::Idle };
            prop_assert_eq!(directive.view, view);
        }
    }

    #[test]
    fn debug_never_reveals_password(text in "[0-9]{4,16}") {
        let state = text.chars().fold(SessionState::default(), |s, ch| {
            SessionReducer::reduce(s, SessionIntent::Append(ch))
        });
        let rendered = format!("{:?}", state);
        prop_assert!(!rendered.contains(&text));
    }

    #[test]
    fn unlocked_state_is_terminal(intents in prop::collection::vec(intent_strategy(), 1..32)) {
        let unlocked = SessionReducer::reduce(
            SessionReducer::reduce(SessionState::default(), SessionIntent::Append('x')),
            SessionIntent::AuthSucceeded,
        );
        let mut state = unlocked.clone();
        for intent in intents {
            state = SessionReducer::reduce(state, intent);
        }
        prop_assert_eq!(state, unlocked);
    }
}

#[test]
fn failed_attempt_sets_error_and_clears_buffer() {
    let state = "abc".chars().fold(SessionState::default(), |s, ch| {
        SessionReducer::reduce(s, SessionIntent::Append(ch))
    });
    let state = SessionReducer::reduce(state, SessionIntent::AuthFailed);
    assert!(state.password().is_empty());
    assert_eq!(state.mode(), Mode::Idle);
    assert_eq!(state.last_error(), Some("Wrong password"));
}
