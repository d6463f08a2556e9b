use crate::ui::mvi::Reducer;
use crate::ui::session::intent::SessionIntent;
use crate::ui::session::state::{Mode, SessionState, WRONG_PASSWORD};

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        if state.unlocked {
            return state;
        }

        match intent {
            SessionIntent::Append(ch) => {
                // A full buffer drops the keystroke.
                if state.password.push(ch) {
                    state.mode = Mode::Typing;
                }
            }
            SessionIntent::Backspace => {
                if state.password.pop().is_some() && state.password.is_empty() {
                    // Emptying the field by hand also dismisses a stale error.
                    state.mode = Mode::Idle;
                    state.last_error = None;
                }
            }
            SessionIntent::Cancel => {
                state.password.clear();
                state.mode = Mode::Idle;
                state.last_error = None;
            }
            SessionIntent::AuthFailed => {
                state.password.clear();
                state.mode = Mode::Idle;
                state.last_error = Some(WRONG_PASSWORD.to_string());
            }
            SessionIntent::AuthSucceeded => {
                state.password.clear();
                state.mode = Mode::Idle;
                state.last_error = None;
                state.unlocked = true;
            }
        }
        state
    }
}
