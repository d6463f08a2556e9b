//! Lock screen configuration.
//!
//! Read once at startup from `~/.config/custom-lock/config.toml`. Every
//! field has a default, so a missing file or a partial file both work.

mod loader;
mod types;

pub use loader::{expand_home, ConfigError};
pub use types::{
    AuthBackend, AuthConfig, BatteryConfig, ClockConfig, Config, LoggingConfig, QuoteConfig,
    WallpaperConfig, WindowManagerConfig,
};
