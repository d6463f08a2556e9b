pub mod console;
pub mod key;
pub mod mvi;
pub mod overlay;
pub mod session;
pub mod surface;
pub mod theme;
