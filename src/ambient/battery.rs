use std::path::Path;

/// Nerd Font battery glyphs from empty to full, one per 10%.
pub const ICONS: [&str; 11] = [
    "󰂎", "󰁺", "󰁻", "󰁼", "󰁽", "󰁾", "󰁿", "󰂀", "󰂁", "󰂂", "󰁹",
];

/// Shown when the capacity file cannot be read.
pub const UNKNOWN_DISPLAY: &str = "󰁹 --";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryReading {
    Known { icon_index: usize, percentage: u32 },
    Unknown,
}

impl BatteryReading {
    /// Read the charge percentage from a sysfs capacity file.
    pub fn read(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(err) => {
                tracing::trace!(path = %path.display(), "battery unreadable: {}", err);
                BatteryReading::Unknown
            }
        }
    }

    pub fn parse(content: &str) -> Self {
        match content.trim().parse::<u32>() {
            Ok(percentage) => BatteryReading::Known {
                icon_index: (percentage / 10).min(10) as usize,
                percentage,
            },
            Err(_) => BatteryReading::Unknown,
        }
    }

    pub fn display(self) -> String {
        match self {
            BatteryReading::Known {
                icon_index,
                percentage,
            } => format!("{} {}%", ICONS[icon_index], percentage),
            BatteryReading::Unknown => UNKNOWN_DISPLAY.to_string(),
        }
    }
}
