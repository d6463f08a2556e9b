mod directive;
mod intent;
mod reducer;
mod state;

pub use directive::{ViewDirective, ViewName};
pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{Mode, PasswordBuffer, SessionState, PASSWORD_CAPACITY, WRONG_PASSWORD};
