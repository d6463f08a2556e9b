use super::state::{Mode, SessionState};

/// Which of the two stacked center views a surface should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewName {
    #[default]
    Idle,
    Typing,
}

impl ViewName {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewName::Idle => "idle",
            ViewName::Typing => "typing",
        }
    }
}

/// What every surface should currently display for the session.
///
/// Carries the dot count, never the password itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewDirective {
    pub view: ViewName,
    pub dots: usize,
    pub error: Option<String>,
}

impl ViewDirective {
    pub const DOT: char = '●';

    /// The password field text: one dot per typed character.
    pub fn dots_text(&self) -> String {
        std::iter::repeat(Self::DOT).take(self.dots).collect()
    }
}

impl From<&SessionState> for ViewDirective {
    fn from(state: &SessionState) -> Self {
        let view = match state.mode() {
            Mode::Idle => ViewName::Idle,
            Mode::Typing => ViewName::Typing,
        };
        Self {
            view,
            dots: state.password().len(),
            error: state.last_error().map(str::to_string),
        }
    }
}
