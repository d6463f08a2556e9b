use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Environment variable naming the log file. Overrides `[logging] file`.
pub const LOG_ENV: &str = "CUSTOM_LOCK_LOG";

/// Initialize tracing with optional file output.
///
/// Nothing is logged unless a log file is configured, so the console
/// frontend never has its display corrupted. Each run writes to
/// `{path}.{timestamp}.{pid}`.
pub fn init_tracing(config: &LoggingConfig) {
    let Some(log_path) = log_path(std::env::var_os(LOG_ENV).map(PathBuf::from), config) else {
        return;
    };

    let unique_path = unique_log_path(&log_path);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path.display());
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

/// The environment wins over the config file.
pub fn log_path(from_env: Option<PathBuf>, config: &LoggingConfig) -> Option<PathBuf> {
    from_env
        .filter(|path| !path.as_os_str().is_empty())
        .or_else(|| config.file.clone())
}

fn unique_log_path(base: &std::path::Path) -> PathBuf {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = base.as_os_str().to_os_string();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}
