use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub battery: BatteryConfig,
    #[serde(default)]
    pub quote: QuoteConfig,
    #[serde(default)]
    pub wallpaper: WallpaperConfig,
    #[serde(default)]
    pub window_manager: WindowManagerConfig,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which authentication mechanism to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthBackend {
    /// Use libpam when it loads, otherwise the helper command.
    #[default]
    Auto,
    /// Always use the helper command.
    Command,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub backend: AuthBackend,
    /// PAM service name (a file under /etc/pam.d).
    #[serde(default = "default_pam_service")]
    pub pam_service: String,
    /// Helper that reads the password on stdin and exits 0 when it is valid.
    #[serde(default = "default_auth_command")]
    pub command: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryConfig {
    /// sysfs file holding the charge percentage.
    #[serde(default = "default_capacity_path")]
    pub capacity_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// Script run with `bash`; its trimmed stdout becomes the quote.
    #[serde(default = "default_quote_script")]
    pub script: PathBuf,
    /// How long the script may run (default: 2000).
    #[serde(default = "default_quote_timeout_ms")]
    pub timeout_ms: u64,
    /// Shown when the script is missing, slow or silent.
    #[serde(default = "default_quote_fallback")]
    pub fallback: String,
    #[serde(default = "default_quote_attribution")]
    pub attribution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallpaperConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Current wallpaper image.
    #[serde(default = "default_wallpaper_source")]
    pub source: PathBuf,
    /// Where the blurred copy is cached between runs.
    #[serde(default = "default_wallpaper_cache")]
    pub cache: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowManagerConfig {
    /// Run at startup so the compositor stops dispatching keybinds.
    /// Empty disables the call.
    #[serde(default = "default_enter_command")]
    pub enter_command: Vec<String>,
    /// Run after a successful unlock. Empty disables the call.
    #[serde(default = "default_leave_command")]
    pub leave_command: Vec<String>,
}

/// chrono format strings for the ambient clock text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_hour_format")]
    pub hour_format: String,
    #[serde(default = "default_minute_format")]
    pub minute_format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file path. `CUSTOM_LOCK_LOG` takes precedence when set.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_pam_service() -> String {
    "login".to_string()
}

fn default_auth_command() -> Vec<String> {
    ["sudo", "-S", "-k", "true"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_capacity_path() -> PathBuf {
    PathBuf::from("/sys/class/power_supply/macsmc-battery/capacity")
}

fn default_quote_script() -> PathBuf {
    PathBuf::from("~/.config/hypr/scripts/RandomQuote.sh")
}

fn default_quote_timeout_ms() -> u64 {
    2000
}

fn default_quote_fallback() -> String {
    "The supreme art of war is to subdue the enemy without fighting.".to_string()
}

fn default_quote_attribution() -> String {
    "Sun Tzu".to_string()
}

fn default_wallpaper_source() -> PathBuf {
    PathBuf::from("~/.config/hypr/wallpaper_effects/.wallpaper_current")
}

fn default_wallpaper_cache() -> PathBuf {
    PathBuf::from("/tmp/lockscreen_blurred.png")
}

fn default_enter_command() -> Vec<String> {
    ["hyprctl", "dispatch", "submap", "lockscreen"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_leave_command() -> Vec<String> {
    ["hyprctl", "dispatch", "submap", "reset"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_date_format() -> String {
    "%I:%M %p".to_string()
}

fn default_hour_format() -> String {
    "%H".to_string()
}

fn default_minute_format() -> String {
    "%M".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            backend: AuthBackend::default(),
            pam_service: default_pam_service(),
            command: default_auth_command(),
        }
    }
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            capacity_path: default_capacity_path(),
        }
    }
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            script: default_quote_script(),
            timeout_ms: default_quote_timeout_ms(),
            fallback: default_quote_fallback(),
            attribution: default_quote_attribution(),
        }
    }
}

impl Default for WallpaperConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            source: default_wallpaper_source(),
            cache: default_wallpaper_cache(),
        }
    }
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            enter_command: default_enter_command(),
            leave_command: default_leave_command(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            hour_format: default_hour_format(),
            minute_format: default_minute_format(),
        }
    }
}
