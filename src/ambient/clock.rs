use chrono::{DateTime, Local};

use crate::config::ClockConfig;

/// Formatted clock strings for one refresh.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClockText {
    /// Top-bar text, `%I:%M %p` by default.
    pub date: String,
    /// Large clock, upper line.
    pub hour: String,
    /// Large clock, lower line.
    pub minute: String,
}

impl ClockText {
    /// Format `now`. The formats are validated when the config is loaded.
    pub fn format(now: &DateTime<Local>, config: &ClockConfig) -> Self {
        Self {
            date: now.format(&config.date_format).to_string(),
            hour: now.format(&config.hour_format).to_string(),
            minute: now.format(&config.minute_format).to_string(),
        }
    }
}
