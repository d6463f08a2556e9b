//! Ambient data shown on every surface.
//!
//! These collaborators never fail past their boundary: each one degrades
//! to a fixed fallback and logs why.

pub mod battery;
pub mod clock;
pub mod quote;
pub mod wallpaper;

use chrono::{DateTime, Local};

use crate::config::{ClockConfig, Config};

pub use battery::BatteryReading;
pub use clock::ClockText;

/// Clock, date and battery text refreshed once per second.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AmbientSnapshot {
    pub clock: ClockText,
    pub battery: String,
}

impl AmbientSnapshot {
    pub fn new(now: &DateTime<Local>, clock: &ClockConfig, battery: BatteryReading) -> Self {
        Self {
            clock: ClockText::format(now, clock),
            battery: battery.display(),
        }
    }
}

/// Reads the live clock and battery for each refresh tick.
#[derive(Debug, Clone)]
pub struct AmbientSource {
    clock: ClockConfig,
    battery_path: std::path::PathBuf,
}

impl AmbientSource {
    pub fn from_config(config: &Config) -> Self {
        Self {
            clock: config.clock.clone(),
            battery_path: config.battery.capacity_path.clone(),
        }
    }

    pub fn capture(&self) -> AmbientSnapshot {
        let battery = BatteryReading::read(&self.battery_path);
        AmbientSnapshot::new(&Local::now(), &self.clock, battery)
    }
}
